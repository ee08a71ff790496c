pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::order;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::google::{GoogleOAuthClient, GoogleOAuthConfig};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    bootstrap_admin::{AdminAccount, BootstrapAdminUseCase, BootstrapOutcome},
    complete_profile::{CompleteProfileUseCase, ICompleteProfileUseCase},
    google_login::{GoogleLoginUseCase, IGoogleLoginUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::order::adapter::outgoing::{
    OrderQueryPostgres, OrderRepositoryPostgres, RandomPaymentCodes,
};
use crate::order::application::order_config::OrderConfig;
use crate::order::application::order_use_cases::OrderUseCases;
use crate::order::application::ports::outgoing::PaymentCodeGenerator;
use crate::order::application::service::{
    AdminDashboardService, AdminGetOrderService, AdminListOrdersService, CompletedOrdersService,
    ConfirmPaymentService, CreateOrderService, FinanceReportService, GetOrderStatusService,
    GetQueueInfoService, GetQueuePositionService, ListMyOrdersService, UpdateOrderStatusService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub complete_profile_use_case: Arc<dyn ICompleteProfileUseCase + Send + Sync>,
    /// `None` when the Google credentials are not configured.
    pub google_login_use_case: Option<Arc<dyn IGoogleLoginUseCase + Send + Sync>>,
    pub order: OrderUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::default());

    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));

    if let Some(account) = AdminAccount::from_env() {
        let bootstrap = BootstrapAdminUseCase::new(
            Arc::clone(&user_query),
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        );
        match bootstrap.execute(account).await {
            Ok(BootstrapOutcome::Created(admin)) => {
                info!(email = %admin.email, "Admin account created")
            }
            Ok(BootstrapOutcome::AlreadyPresent) => info!("Admin account already present"),
            Err(e) => error!(error = %e, "Admin bootstrap failed"),
        }
    }

    let google_login_use_case: Option<Arc<dyn IGoogleLoginUseCase + Send + Sync>> =
        match GoogleOAuthConfig::from_env().map(GoogleOAuthClient::new) {
            Some(Ok(client)) => Some(Arc::new(GoogleLoginUseCase::new(
                Arc::clone(&user_query),
                Arc::clone(&user_repo),
                Arc::new(client),
                Arc::clone(&token_provider),
            ))),
            Some(Err(e)) => {
                error!(error = %e, "Google sign-in disabled");
                None
            }
            None => {
                warn!("Google sign-in is not configured");
                None
            }
        };

    let register_user_use_case = RegisterUserUseCase::new(
        Arc::clone(&user_query),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    );
    let login_user_use_case = LoginUserUseCase::new(
        Arc::clone(&user_query),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case =
        RefreshTokenUseCase::new(Arc::clone(&user_query), Arc::clone(&token_provider));
    let complete_profile_use_case = CompleteProfileUseCase::new(
        Arc::clone(&user_query),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    );

    // Orders
    let order_config = OrderConfig::from_env();
    info!(
        base_price = order_config.base_price,
        initial_status = %order_config.initial_status,
        "Order intake configured"
    );

    let order_query = OrderQueryPostgres::new(Arc::clone(&db_arc));
    let order_repo = OrderRepositoryPostgres::new(Arc::clone(&db_arc));
    let codes: Arc<dyn PaymentCodeGenerator> = Arc::new(RandomPaymentCodes);

    let order = OrderUseCases {
        create: Arc::new(CreateOrderService::new(
            order_repo.clone(),
            Arc::clone(&codes),
            order_config,
        )),
        queue_info: Arc::new(GetQueueInfoService::new(order_query.clone())),
        queue_position: Arc::new(GetQueuePositionService::new(order_query.clone())),
        list_mine: Arc::new(ListMyOrdersService::new(order_query.clone())),
        get_status: Arc::new(GetOrderStatusService::new(order_query.clone())),
        confirm_payment: Arc::new(ConfirmPaymentService::new(order_repo.clone(), codes)),
        update_status: Arc::new(UpdateOrderStatusService::new(order_repo)),
        admin_list: Arc::new(AdminListOrdersService::new(order_query.clone())),
        admin_get: Arc::new(AdminGetOrderService::new(order_query.clone())),
        admin_dashboard: Arc::new(AdminDashboardService::new(order_query.clone())),
        finance_report: Arc::new(FinanceReportService::new(order_query.clone())),
        completed: Arc::new(CompletedOrdersService::new(order_query)),
    };

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        complete_profile_use_case: Arc::new(complete_profile_use_case),
        google_login_use_case,
        order,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::order::adapter::incoming::web::routes as order_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::complete_profile_handler);
    cfg.service(auth_routes::google_login_handler);
    cfg.service(auth_routes::google_callback_handler);
    // Orders; the queue route must precede `/api/orders/{order_id}`
    cfg.service(order_routes::get_queue_info_handler);
    cfg.service(order_routes::create_order_handler);
    cfg.service(order_routes::list_my_orders_handler);
    cfg.service(order_routes::get_queue_position_handler);
    cfg.service(order_routes::get_order_status_handler);
    cfg.service(order_routes::confirm_payment_handler);
    // Admin
    cfg.service(order_routes::admin_dashboard_handler);
    cfg.service(order_routes::admin_list_orders_handler);
    cfg.service(order_routes::admin_get_order_handler);
    cfg.service(order_routes::update_order_status_handler);
    cfg.service(order_routes::finance_report_handler);
    cfg.service(order_routes::completed_orders_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
