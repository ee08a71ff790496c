use sea_orm::entity::prelude::*;

use crate::modules::order::application::domain::entities::OrderStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub student_name: String,
    #[sea_orm(column_type = "Text")]
    pub student_id: String,
    #[sea_orm(column_type = "Text")]
    pub university: String,
    #[sea_orm(column_type = "Text")]
    pub program: String,
    #[sea_orm(column_type = "Text")]
    pub semester: String,
    #[sea_orm(column_type = "Text")]
    pub task_link: String,
    #[sea_orm(column_type = "Text")]
    pub sso_username: String,
    #[sea_orm(column_type = "Text")]
    pub sso_password: String,
    #[sea_orm(column_type = "Text")]
    pub course_name: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub instructions: String,
    pub status: OrderStatusColumn,
    pub price: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub payment_proof: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatusColumn {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PAID")]
    Paid,
    #[sea_orm(string_value = "PROCESSED")]
    Processed,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "UNPAID")]
    Unpaid,
}

impl From<OrderStatus> for OrderStatusColumn {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Draft => OrderStatusColumn::Draft,
            OrderStatus::Pending => OrderStatusColumn::Pending,
            OrderStatus::Paid => OrderStatusColumn::Paid,
            OrderStatus::Processed => OrderStatusColumn::Processed,
            OrderStatus::Completed => OrderStatusColumn::Completed,
            OrderStatus::Unpaid => OrderStatusColumn::Unpaid,
        }
    }
}

impl From<OrderStatusColumn> for OrderStatus {
    fn from(column: OrderStatusColumn) -> Self {
        match column {
            OrderStatusColumn::Draft => OrderStatus::Draft,
            OrderStatusColumn::Pending => OrderStatus::Pending,
            OrderStatusColumn::Paid => OrderStatus::Paid,
            OrderStatusColumn::Processed => OrderStatus::Processed,
            OrderStatusColumn::Completed => OrderStatus::Completed,
            OrderStatusColumn::Unpaid => OrderStatus::Unpaid,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
