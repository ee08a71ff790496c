use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{RegisterUserRequest, RegisteredUser};
use crate::modules::order::adapter::incoming::web::routes::{QueuePosition, UpdateOrderStatusRequest};
use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::domain::queue::QueueInfo;
use crate::modules::order::application::ports::incoming::use_cases::{
    AdminDashboard, ConfirmPaymentInput, CreateOrderInput, CreatedOrder, FinanceReport,
    OrderStatusView, PaymentConfirmation,
};
use crate::modules::order::application::ports::outgoing::{CustomerSummary, OrderWithCustomer};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "JasaTugas API",
        version = "1.0.0",
        description = "Order intake, queue estimates and payment for the JasaTugas homework service"
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::complete_profile_handler,
        crate::auth::adapter::incoming::web::routes::google_login_handler,
        crate::auth::adapter::incoming::web::routes::google_callback_handler,

        // Order endpoints
        crate::modules::order::adapter::incoming::web::routes::get_queue_info_handler,
        crate::modules::order::adapter::incoming::web::routes::create_order_handler,
        crate::modules::order::adapter::incoming::web::routes::list_my_orders_handler,
        crate::modules::order::adapter::incoming::web::routes::get_queue_position_handler,
        crate::modules::order::adapter::incoming::web::routes::get_order_status_handler,
        crate::modules::order::adapter::incoming::web::routes::confirm_payment_handler,

        // Admin endpoints
        crate::modules::order::adapter::incoming::web::routes::update_order_status_handler,
        crate::modules::order::adapter::incoming::web::routes::admin_dashboard_handler,
        crate::modules::order::adapter::incoming::web::routes::admin_list_orders_handler,
        crate::modules::order::adapter::incoming::web::routes::admin_get_order_handler,
        crate::modules::order::adapter::incoming::web::routes::finance_report_handler,
        crate::modules::order::adapter::incoming::web::routes::completed_orders_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            RegisterUserRequest,
            RegisteredUser,

            Order,
            OrderStatus,
            QueueInfo,
            CreateOrderInput,
            CreatedOrder,
            OrderStatusView,
            ConfirmPaymentInput,
            PaymentConfirmation,
            QueuePosition,
            UpdateOrderStatusRequest,

            OrderWithCustomer,
            CustomerSummary,
            AdminDashboard,
            FinanceReport
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and sign-in"),
        (name = "orders", description = "Customer orders, queue and payment"),
        (name = "admin", description = "Order administration"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
