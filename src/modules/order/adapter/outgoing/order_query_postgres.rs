// src/modules/order/adapter/outgoing/order_query_postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::order::adapter::outgoing::order_repository_postgres::model_to_order;
use crate::modules::order::adapter::outgoing::sea_orm_entity::orders::{
    self, Column, Entity, OrderStatusColumn,
};
use crate::modules::order::application::domain::entities::{Order, OrderStatus};
use crate::modules::order::application::ports::outgoing::{
    CustomerSummary, OrderListFilter, OrderQuery, OrderQueryError, OrderSort, OrderWithCustomer,
};

#[derive(Debug, FromQueryResult)]
struct PriceTotal {
    total: i64,
}

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Looks up the owners of `models` in one query and pairs them up.
    async fn attach_customers(
        &self,
        models: Vec<orders::Model>,
    ) -> Result<Vec<OrderWithCustomer>, OrderQueryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let mut user_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let customers: HashMap<Uuid, CustomerSummary> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| (u.id, user_to_customer(u)))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| OrderWithCustomer {
                customer: customers.get(&m.user_id).cloned(),
                order: model_to_order(m),
            })
            .collect())
    }
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn get_by_id(&self, order_id: Uuid) -> Result<Option<Order>, OrderQueryError> {
        let order = Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(order.map(model_to_order))
    }

    async fn get_owned(
        &self,
        owner: UserId,
        order_id: Uuid,
    ) -> Result<Option<Order>, OrderQueryError> {
        let order = Entity::find_by_id(order_id)
            .filter(Column::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(order.map(model_to_order))
    }

    async fn get_with_customer(
        &self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithCustomer>, OrderQueryError> {
        let Some(model) = Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.attach_customers(vec![model]).await?.into_iter().next())
    }

    async fn list(&self, filter: OrderListFilter) -> Result<Vec<Order>, OrderQueryError> {
        let models = filtered(&filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_order).collect())
    }

    async fn list_with_customer(
        &self,
        filter: OrderListFilter,
    ) -> Result<Vec<OrderWithCustomer>, OrderQueryError> {
        let models = filtered(&filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.attach_customers(models).await
    }

    async fn count_by_status(
        &self,
        statuses: &[OrderStatus],
        created_before: Option<DateTime<Utc>>,
    ) -> Result<u64, OrderQueryError> {
        let mut query = Entity::find().filter(status_in(statuses));

        if let Some(before) = created_before {
            query = query.filter(Column::CreatedAt.lt(before.fixed_offset()));
        }

        query.count(&*self.db).await.map_err(map_db_err)
    }

    async fn sum_price(&self, statuses: &[OrderStatus]) -> Result<i64, OrderQueryError> {
        // SUM(bigint) is NUMERIC in Postgres
        let row = Entity::find()
            .select_only()
            .column_as(Expr::cust("COALESCE(SUM(\"price\"), 0)::BIGINT"), "total")
            .filter(status_in(statuses))
            .into_model::<PriceTotal>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map_or(0, |r| r.total))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn status_in(statuses: &[OrderStatus]) -> sea_orm::sea_query::SimpleExpr {
    Column::Status.is_in(statuses.iter().copied().map(OrderStatusColumn::from))
}

fn filtered(filter: &OrderListFilter) -> Select<Entity> {
    let mut query = Entity::find();

    if let Some(owner) = filter.owner {
        query = query.filter(Column::UserId.eq(owner.value()));
    }

    if let Some(statuses) = &filter.statuses {
        query = query.filter(status_in(statuses));
    }

    query = match filter.sort {
        OrderSort::Newest => query.order_by_desc(Column::CreatedAt),
        OrderSort::Oldest => query.order_by_asc(Column::CreatedAt),
        OrderSort::RecentlyUpdated => query.order_by_desc(Column::UpdatedAt),
    };

    if let Some(limit) = filter.limit {
        query = query.limit(limit);
    }

    query
}

fn user_to_customer(user: users::Model) -> CustomerSummary {
    CustomerSummary {
        id: user.id,
        email: user.email,
        username: user.username,
        name: user.name,
    }
}

fn map_db_err(e: DbErr) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}
