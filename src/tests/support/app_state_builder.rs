use crate::auth::application::use_cases::complete_profile::ICompleteProfileUseCase;
use crate::auth::application::use_cases::google_login::IGoogleLoginUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::order::application::order_use_cases::OrderUseCases;
use crate::modules::order::application::ports::incoming::use_cases::{
    AdminDashboardUseCase, AdminGetOrderUseCase, AdminListOrdersUseCase, CompletedOrdersUseCase,
    ConfirmPaymentUseCase, CreateOrderUseCase, FinanceReportUseCase, GetOrderStatusUseCase,
    GetQueueInfoUseCase, GetQueuePositionUseCase, ListMyOrdersUseCase, UpdateOrderStatusUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    complete_profile: Arc<dyn ICompleteProfileUseCase + Send + Sync>,
    google_login: Option<Arc<dyn IGoogleLoginUseCase + Send + Sync>>,
    order: OrderUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            complete_profile: Arc::new(StubCompleteProfileUseCase),
            // Google sign-in stays unconfigured unless a test opts in
            google_login: None,
            order: default_order_use_cases(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_complete_profile(
        mut self,
        uc: impl ICompleteProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.complete_profile = Arc::new(uc);
        self
    }

    pub fn with_google_login(
        mut self,
        uc: impl IGoogleLoginUseCase + Send + Sync + 'static,
    ) -> Self {
        self.google_login = Some(Arc::new(uc));
        self
    }

    pub fn with_create_order(mut self, uc: impl CreateOrderUseCase + Send + Sync + 'static) -> Self {
        self.order.create = Arc::new(uc);
        self
    }

    pub fn with_queue_info(mut self, uc: impl GetQueueInfoUseCase + Send + Sync + 'static) -> Self {
        self.order.queue_info = Arc::new(uc);
        self
    }

    pub fn with_queue_position(
        mut self,
        uc: impl GetQueuePositionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.queue_position = Arc::new(uc);
        self
    }

    pub fn with_list_my_orders(
        mut self,
        uc: impl ListMyOrdersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.list_mine = Arc::new(uc);
        self
    }

    pub fn with_order_status(
        mut self,
        uc: impl GetOrderStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.get_status = Arc::new(uc);
        self
    }

    pub fn with_confirm_payment(
        mut self,
        uc: impl ConfirmPaymentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.confirm_payment = Arc::new(uc);
        self
    }

    pub fn with_update_order_status(
        mut self,
        uc: impl UpdateOrderStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.update_status = Arc::new(uc);
        self
    }

    pub fn with_admin_list_orders(
        mut self,
        uc: impl AdminListOrdersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.admin_list = Arc::new(uc);
        self
    }

    pub fn with_admin_get_order(
        mut self,
        uc: impl AdminGetOrderUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.admin_get = Arc::new(uc);
        self
    }

    pub fn with_admin_dashboard(
        mut self,
        uc: impl AdminDashboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.admin_dashboard = Arc::new(uc);
        self
    }

    pub fn with_finance_report(
        mut self,
        uc: impl FinanceReportUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.finance_report = Arc::new(uc);
        self
    }

    pub fn with_completed_orders(
        mut self,
        uc: impl CompletedOrdersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.order.completed = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            complete_profile_use_case: self.complete_profile,
            google_login_use_case: self.google_login,
            order: self.order,
        })
    }
}
