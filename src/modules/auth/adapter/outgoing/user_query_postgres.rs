use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::user_query::UserQueryError;
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl UserQueryPostgres {
    /// Helper to map SeaORM model to UserQueryResult
    fn map_to_query_result(model: UserModel) -> Result<UserQueryResult, UserQueryError> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|e| UserQueryError::CorruptRow(e.to_string()))?;

        Ok(UserQueryResult {
            id: model.id,
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            name: model.name,
            role,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }

    async fn find_one(
        &self,
        condition: Condition,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(condition)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_query_result).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find_one(Condition::all().add(UserColumn::Email.eq(email)))
            .await
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find_one(Condition::all().add(UserColumn::Username.eq(username)))
            .await
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find_one(
            Condition::any()
                .add(UserColumn::Email.eq(identifier))
                .add(UserColumn::Username.eq(identifier)),
        )
        .await
    }
}
