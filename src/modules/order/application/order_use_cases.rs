use std::sync::Arc;

use crate::modules::order::application::ports::incoming::use_cases::{
    AdminDashboardUseCase, AdminGetOrderUseCase, AdminListOrdersUseCase, CompletedOrdersUseCase,
    ConfirmPaymentUseCase, CreateOrderUseCase, FinanceReportUseCase, GetOrderStatusUseCase,
    GetQueueInfoUseCase, GetQueuePositionUseCase, ListMyOrdersUseCase, UpdateOrderStatusUseCase,
};

#[derive(Clone)]
pub struct OrderUseCases {
    pub create: Arc<dyn CreateOrderUseCase + Send + Sync>,
    pub queue_info: Arc<dyn GetQueueInfoUseCase + Send + Sync>,
    pub queue_position: Arc<dyn GetQueuePositionUseCase + Send + Sync>,
    pub list_mine: Arc<dyn ListMyOrdersUseCase + Send + Sync>,
    pub get_status: Arc<dyn GetOrderStatusUseCase + Send + Sync>,
    pub confirm_payment: Arc<dyn ConfirmPaymentUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateOrderStatusUseCase + Send + Sync>,
    pub admin_list: Arc<dyn AdminListOrdersUseCase + Send + Sync>,
    pub admin_get: Arc<dyn AdminGetOrderUseCase + Send + Sync>,
    pub admin_dashboard: Arc<dyn AdminDashboardUseCase + Send + Sync>,
    pub finance_report: Arc<dyn FinanceReportUseCase + Send + Sync>,
    pub completed: Arc<dyn CompletedOrdersUseCase + Send + Sync>,
}
