mod order_query_postgres;
mod order_repository_postgres;
mod random_payment_codes;
pub mod sea_orm_entity;

pub use order_query_postgres::OrderQueryPostgres;
pub use order_repository_postgres::OrderRepositoryPostgres;
pub use random_payment_codes::RandomPaymentCodes;
