use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId, UserRole};
use crate::auth::application::use_cases::complete_profile::{
    CompleteProfileError, CompleteProfileRequest, ICompleteProfileUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput,
};
use crate::modules::order::application::domain::entities::{
    AdminOrderFilter, CustomerOrderFilter, Order, OrderStatus,
};
use crate::modules::order::application::domain::queue::QueueInfo;
use crate::modules::order::application::order_use_cases::OrderUseCases;
use crate::modules::order::application::ports::incoming::use_cases::*;
use crate::modules::order::application::ports::outgoing::OrderWithCustomer;
use std::sync::Arc;

/* --------------------------------------------------
 * Auth
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _input: RegisterUserInput) -> Result<User, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!()
    }
}

#[derive(Default, Clone)]
pub struct StubCompleteProfileUseCase;

#[async_trait]
impl ICompleteProfileUseCase for StubCompleteProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: CompleteProfileRequest,
    ) -> Result<User, CompleteProfileError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Orders
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateOrderUseCase;

#[async_trait]
impl CreateOrderUseCase for StubCreateOrderUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _input: CreateOrderInput,
    ) -> Result<CreatedOrder, CreateOrderError> {
        unimplemented!("Not used in this test")
    }
}

/// Queue info never fails, so the stub answers with the fallback.
#[derive(Default, Clone)]
pub struct StubGetQueueInfoUseCase;

#[async_trait]
impl GetQueueInfoUseCase for StubGetQueueInfoUseCase {
    async fn execute(&self) -> QueueInfo {
        QueueInfo::fallback()
    }
}

#[derive(Default, Clone)]
pub struct StubGetQueuePositionUseCase;

#[async_trait]
impl GetQueuePositionUseCase for StubGetQueuePositionUseCase {
    async fn execute(&self, _order_id: Uuid) -> Result<u64, GetQueuePositionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMyOrdersUseCase;

#[async_trait]
impl ListMyOrdersUseCase for StubListMyOrdersUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _filter: CustomerOrderFilter,
    ) -> Result<Vec<Order>, ListMyOrdersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetOrderStatusUseCase;

#[async_trait]
impl GetOrderStatusUseCase for StubGetOrderStatusUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _order_id: Uuid,
    ) -> Result<OrderStatusView, GetOrderStatusError> {
        Err(GetOrderStatusError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubConfirmPaymentUseCase;

#[async_trait]
impl ConfirmPaymentUseCase for StubConfirmPaymentUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _order_id: Uuid,
        _input: ConfirmPaymentInput,
    ) -> Result<PaymentConfirmation, ConfirmPaymentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateOrderStatusUseCase;

#[async_trait]
impl UpdateOrderStatusUseCase for StubUpdateOrderStatusUseCase {
    async fn execute(
        &self,
        _actor: UserRole,
        _order_id: Uuid,
        _status: OrderStatus,
    ) -> Result<Order, UpdateOrderStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAdminListOrdersUseCase;

#[async_trait]
impl AdminListOrdersUseCase for StubAdminListOrdersUseCase {
    async fn execute(
        &self,
        _filter: AdminOrderFilter,
    ) -> Result<Vec<OrderWithCustomer>, AdminListOrdersError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubAdminGetOrderUseCase;

#[async_trait]
impl AdminGetOrderUseCase for StubAdminGetOrderUseCase {
    async fn execute(&self, _order_id: Uuid) -> Result<OrderWithCustomer, AdminGetOrderError> {
        Err(AdminGetOrderError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubAdminDashboardUseCase;

#[async_trait]
impl AdminDashboardUseCase for StubAdminDashboardUseCase {
    async fn execute(
        &self,
        _filter: AdminOrderFilter,
    ) -> Result<AdminDashboard, AdminDashboardError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFinanceReportUseCase;

#[async_trait]
impl FinanceReportUseCase for StubFinanceReportUseCase {
    async fn execute(&self) -> Result<FinanceReport, FinanceReportError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCompletedOrdersUseCase;

#[async_trait]
impl CompletedOrdersUseCase for StubCompletedOrdersUseCase {
    async fn execute(&self) -> Result<Vec<OrderWithCustomer>, CompletedOrdersError> {
        Ok(vec![])
    }
}

pub fn default_order_use_cases() -> OrderUseCases {
    OrderUseCases {
        create: Arc::new(StubCreateOrderUseCase),
        queue_info: Arc::new(StubGetQueueInfoUseCase),
        queue_position: Arc::new(StubGetQueuePositionUseCase),
        list_mine: Arc::new(StubListMyOrdersUseCase),
        get_status: Arc::new(StubGetOrderStatusUseCase),
        confirm_payment: Arc::new(StubConfirmPaymentUseCase),
        update_status: Arc::new(StubUpdateOrderStatusUseCase),
        admin_list: Arc::new(StubAdminListOrdersUseCase),
        admin_get: Arc::new(StubAdminGetOrderUseCase),
        admin_dashboard: Arc::new(StubAdminDashboardUseCase),
        finance_report: Arc::new(StubFinanceReportUseCase),
        completed: Arc::new(StubCompletedOrdersUseCase),
    }
}
