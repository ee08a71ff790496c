use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::order::adapter::outgoing::sea_orm_entity::orders::{
    self, ActiveModel, Column, Entity, OrderStatusColumn,
};
use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::ports::outgoing::{
    CreateOrderData, OrderRepository, OrderRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_where(
        &self,
        model: ActiveModel,
        order_id: Uuid,
        owner: Option<UserId>,
    ) -> Result<Order, OrderRepositoryError> {
        let mut update = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(order_id));

        if let Some(owner) = owner {
            update = update.filter(Column::UserId.eq(owner.value()));
        }

        let results = update
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_order)
            .ok_or(OrderRepositoryError::NotFound)
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(&self, data: CreateOrderData) -> Result<Order, OrderRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            student_name: Set(data.student_name),
            student_id: Set(data.student_id),
            university: Set(data.university),
            program: Set(data.program),
            semester: Set(data.semester),
            task_link: Set(data.task_link),
            sso_username: Set(data.sso_username),
            sso_password: Set(data.sso_password),
            course_name: Set(data.course_name),
            title: Set(data.title),
            instructions: Set(data.instructions),
            status: Set(data.status.into()),
            price: Set(data.price),
            payment_proof: Set(data.payment_proof),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_order(inserted))
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrderRepositoryError> {
        let model = ActiveModel {
            status: Set(status.into()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..<ActiveModel as Default>::default()
        };

        self.update_where(model, order_id, None).await
    }

    async fn record_payment(
        &self,
        order_id: Uuid,
        owner: UserId,
        payment_proof: String,
    ) -> Result<Order, OrderRepositoryError> {
        let model = ActiveModel {
            status: Set(OrderStatusColumn::Paid),
            payment_proof: Set(Some(payment_proof)),
            updated_at: Set(Utc::now().fixed_offset()),
            ..<ActiveModel as Default>::default()
        };

        self.update_where(model, order_id, Some(owner)).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(super) fn model_to_order(model: orders::Model) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        student_name: model.student_name,
        student_id: model.student_id,
        university: model.university,
        program: model.program,
        semester: model.semester,
        task_link: model.task_link,
        sso_username: model.sso_username,
        sso_password: model.sso_password,
        course_name: model.course_name,
        title: model.title,
        instructions: model.instructions,
        status: model.status.into(),
        price: model.price,
        payment_proof: model.payment_proof,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> OrderRepositoryError {
    OrderRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_mock_order_model(
        id: Uuid,
        user_id: Uuid,
        status: OrderStatusColumn,
    ) -> orders::Model {
        let now = Utc::now().fixed_offset();
        orders::Model {
            id,
            user_id,
            student_name: "Budi".to_string(),
            student_id: "2201001".to_string(),
            university: "UT".to_string(),
            program: "Manajemen".to_string(),
            semester: "3".to_string(),
            task_link: "https://elearning.ut.ac.id/t/1".to_string(),
            sso_username: String::new(),
            sso_password: String::new(),
            course_name: "Statistika".to_string(),
            title: "Tugas 1".to_string(),
            instructions: String::new(),
            status,
            price: 7,
            payment_proof: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn create_data(owner: Uuid) -> CreateOrderData {
        CreateOrderData {
            owner: UserId::from(owner),
            student_name: "Budi".to_string(),
            student_id: "2201001".to_string(),
            university: "UT".to_string(),
            program: "Manajemen".to_string(),
            semester: "3".to_string(),
            task_link: "https://elearning.ut.ac.id/t/1".to_string(),
            sso_username: String::new(),
            sso_password: String::new(),
            course_name: "Statistika".to_string(),
            title: "Tugas 1".to_string(),
            instructions: String::new(),
            status: OrderStatus::Pending,
            price: 7,
            payment_proof: None,
        }
    }

    // ========================================================================
    // create_order Tests
    // ========================================================================

    #[tokio::test]
    async fn test_create_order_success() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_order_model(
                Uuid::new_v4(),
                owner,
                OrderStatusColumn::Pending,
            )]])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let order = repo.create_order(create_data(owner)).await.unwrap();

        assert_eq!(order.user_id, owner);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.price, 7);
    }

    #[tokio::test]
    async fn test_create_order_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("insert failed".to_string())])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_order(create_data(Uuid::new_v4())).await;

        assert!(matches!(result, Err(OrderRepositoryError::DatabaseError(_))));
    }

    // ========================================================================
    // update_status Tests
    // ========================================================================

    #[tokio::test]
    async fn test_update_status_returns_updated_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_order_model(
                id,
                Uuid::new_v4(),
                OrderStatusColumn::Completed,
            )]])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let order = repo
            .update_status(id, OrderStatus::Completed)
            .await
            .unwrap();

        assert_eq!(order.id, id);
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_status_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<orders::Model>::new()])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_status(Uuid::new_v4(), OrderStatus::Paid).await;

        assert!(matches!(result, Err(OrderRepositoryError::NotFound)));
    }

    // ========================================================================
    // record_payment Tests
    // ========================================================================

    #[tokio::test]
    async fn test_record_payment_sets_proof() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let mut paid = create_mock_order_model(id, owner, OrderStatusColumn::Paid);
        paid.payment_proof = Some("DANA-SIMULATION-42".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![paid]])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let order = repo
            .record_payment(id, UserId::from(owner), "DANA-SIMULATION-42".to_string())
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.payment_proof.as_deref(), Some("DANA-SIMULATION-42"));
    }

    #[tokio::test]
    async fn test_record_payment_for_foreign_order_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<orders::Model>::new()])
            .into_connection();

        let repo = OrderRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .record_payment(
                Uuid::new_v4(),
                UserId::from(Uuid::new_v4()),
                "DANA-SIMULATION-1".to_string(),
            )
            .await;

        assert!(matches!(result, Err(OrderRepositoryError::NotFound)));
    }
}
