mod admin_dashboard;
mod admin_get_order;
mod admin_list_orders;
mod completed_orders;
mod confirm_payment;
mod create_order;
mod finance_report;
mod get_order_status;
mod get_queue_info;
mod get_queue_position;
mod list_my_orders;
mod update_order_status;

pub use admin_dashboard::{AdminDashboard, AdminDashboardError, AdminDashboardUseCase};
pub use admin_get_order::{AdminGetOrderError, AdminGetOrderUseCase};
pub use admin_list_orders::{AdminListOrdersError, AdminListOrdersUseCase};
pub use completed_orders::{CompletedOrdersError, CompletedOrdersUseCase};
pub use confirm_payment::{
    ConfirmPaymentError, ConfirmPaymentInput, ConfirmPaymentUseCase, PaymentConfirmation,
};
pub use create_order::{CreateOrderError, CreateOrderInput, CreateOrderUseCase, CreatedOrder};
pub use finance_report::{FinanceReport, FinanceReportError, FinanceReportUseCase};
pub use get_order_status::{GetOrderStatusError, GetOrderStatusUseCase, OrderStatusView};
pub use get_queue_info::GetQueueInfoUseCase;
pub use get_queue_position::{GetQueuePositionError, GetQueuePositionUseCase};
pub use list_my_orders::{ListMyOrdersError, ListMyOrdersUseCase};
pub use update_order_status::{UpdateOrderStatusError, UpdateOrderStatusUseCase};
