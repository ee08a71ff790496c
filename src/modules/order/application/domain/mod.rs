pub mod entities;
pub mod payment;
pub mod queue;
