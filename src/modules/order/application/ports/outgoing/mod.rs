pub mod order_query;
pub mod order_repository;
pub mod payment_code_generator;

pub use order_query::{
    CustomerSummary, OrderListFilter, OrderQuery, OrderQueryError, OrderSort, OrderWithCustomer,
};
pub use order_repository::{CreateOrderData, OrderRepository, OrderRepositoryError};
pub use payment_code_generator::PaymentCodeGenerator;
