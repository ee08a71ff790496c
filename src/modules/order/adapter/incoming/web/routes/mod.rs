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

pub use admin_dashboard::admin_dashboard_handler;
pub use admin_get_order::admin_get_order_handler;
pub use admin_list_orders::admin_list_orders_handler;
pub use completed_orders::completed_orders_handler;
pub use confirm_payment::confirm_payment_handler;
pub use create_order::create_order_handler;
pub use finance_report::finance_report_handler;
pub use get_order_status::get_order_status_handler;
pub use get_queue_info::get_queue_info_handler;
pub use get_queue_position::{get_queue_position_handler, QueuePosition};
pub use list_my_orders::list_my_orders_handler;
pub use update_order_status::{update_order_status_handler, UpdateOrderStatusRequest};

#[doc(hidden)]
pub use create_order::__path_create_order_handler;
#[doc(hidden)]
pub use get_queue_info::__path_get_queue_info_handler;
#[doc(hidden)]
pub use get_order_status::__path_get_order_status_handler;
#[doc(hidden)]
pub use confirm_payment::__path_confirm_payment_handler;
#[doc(hidden)]
pub use update_order_status::__path_update_order_status_handler;
#[doc(hidden)]
pub use get_queue_position::__path_get_queue_position_handler;
#[doc(hidden)]
pub use list_my_orders::__path_list_my_orders_handler;
#[doc(hidden)]
pub use admin_dashboard::__path_admin_dashboard_handler;
#[doc(hidden)]
pub use admin_list_orders::__path_admin_list_orders_handler;
#[doc(hidden)]
pub use admin_get_order::__path_admin_get_order_handler;
#[doc(hidden)]
pub use finance_report::__path_finance_report_handler;
#[doc(hidden)]
pub use completed_orders::__path_completed_orders_handler;
