use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::order::application::domain::entities::{CustomerOrderFilter, Order};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListMyOrdersQuery {
    pub filter: Option<String>,
}

/// Customer dashboard: own orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    params(("filter" = Option<String>, Query, description = "`pending`, `process` or `completed`; anything else lists all")),
    responses(
        (status = 200, description = "The caller's orders", body = inline(SuccessResponse<Vec<Order>>)),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/orders")]
pub async fn list_my_orders_handler(
    user: AuthenticatedUser,
    query: web::Query<ListMyOrdersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = CustomerOrderFilter::parse(query.filter.as_deref());

    match data.order.list_mine.execute(user.id(), filter).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Listing orders failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::modules::order::application::domain::entities::{Order, OrderStatus};
    use crate::modules::order::application::ports::incoming::use_cases::{
        ListMyOrdersError, ListMyOrdersUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::order_fixtures::sample_order;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    /// Echoes one order per call and remembers the filter it saw.
    #[derive(Clone, Default)]
    struct RecordingList {
        seen: Arc<Mutex<Option<CustomerOrderFilter>>>,
    }

    #[async_trait]
    impl ListMyOrdersUseCase for RecordingList {
        async fn execute(
            &self,
            owner: UserId,
            filter: CustomerOrderFilter,
        ) -> Result<Vec<Order>, ListMyOrdersError> {
            *self.seen.lock().unwrap() = Some(filter);
            Ok(vec![sample_order(owner.value(), OrderStatus::Paid)])
        }
    }

    async fn call(uri: &str, uc: RecordingList) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_list_my_orders(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(list_my_orders_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(Uuid::new_v4(), UserRole::User))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_list_defaults_to_all() {
        let uc = RecordingList::default();
        let resp = call("/api/orders", uc.clone()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*uc.seen.lock().unwrap(), Some(CustomerOrderFilter::All));

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_list_passes_filter() {
        let uc = RecordingList::default();
        call("/api/orders?filter=process", uc.clone()).await;
        assert_eq!(*uc.seen.lock().unwrap(), Some(CustomerOrderFilter::Process));
    }

    #[actix_web::test]
    async fn test_unknown_filter_means_all() {
        let uc = RecordingList::default();
        call("/api/orders?filter=bogus", uc.clone()).await;
        assert_eq!(*uc.seen.lock().unwrap(), Some(CustomerOrderFilter::All));
    }
}
