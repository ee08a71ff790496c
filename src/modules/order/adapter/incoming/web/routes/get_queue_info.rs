use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::order::application::domain::queue::QueueInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Next queue number and estimated turnaround for a new order
#[utoipa::path(
    get,
    path = "/api/orders/queue",
    tag = "orders",
    responses(
        (status = 200, description = "Current queue estimate", body = inline(SuccessResponse<QueueInfo>))
    )
)]
#[get("/api/orders/queue")]
pub async fn get_queue_info_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.order.queue_info.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::order::application::ports::incoming::use_cases::GetQueueInfoUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct FixedQueue(QueueInfo);

    #[async_trait]
    impl GetQueueInfoUseCase for FixedQueue {
        async fn execute(&self) -> QueueInfo {
            self.0
        }
    }

    #[actix_web::test]
    async fn test_queue_info_is_public() {
        let state = TestAppStateBuilder::default()
            .with_queue_info(FixedQueue(QueueInfo::from_active_count(40)))
            .build();
        let app = test::init_service(App::new().app_data(state).service(get_queue_info_handler))
            .await;

        let req = test::TestRequest::get().uri("/api/orders/queue").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["next_queue_number"], 41);
        assert_eq!(body["data"]["estimated_days"], 3);
    }
}
