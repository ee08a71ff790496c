mod admin_dashboard_service;
mod admin_get_order_service;
mod admin_list_orders_service;
mod completed_orders_service;
mod confirm_payment_service;
mod create_order_service;
mod finance_report_service;
mod get_order_status_service;
mod get_queue_info_service;
mod get_queue_position_service;
mod list_my_orders_service;
mod update_order_status_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use admin_dashboard_service::AdminDashboardService;
pub use admin_get_order_service::AdminGetOrderService;
pub use admin_list_orders_service::AdminListOrdersService;
pub use completed_orders_service::CompletedOrdersService;
pub use confirm_payment_service::ConfirmPaymentService;
pub use create_order_service::CreateOrderService;
pub use finance_report_service::FinanceReportService;
pub use get_order_status_service::GetOrderStatusService;
pub use get_queue_info_service::GetQueueInfoService;
pub use get_queue_position_service::GetQueuePositionService;
pub use list_my_orders_service::ListMyOrdersService;
pub use update_order_status_service::UpdateOrderStatusService;
