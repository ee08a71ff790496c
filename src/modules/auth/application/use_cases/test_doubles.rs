//! In-memory ports shared by the auth use case tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, UserQuery, UserQueryError, UserQueryResult,
    UserRepository, UserRepositoryError,
};

#[derive(Default)]
pub struct InMemoryUsers {
    pub users: Mutex<Vec<User>>,
    pub fail_queries: bool,
}

impl InMemoryUsers {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            fail_queries: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            users: Mutex::new(vec![]),
            fail_queries: true,
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    fn find(&self, pred: impl Fn(&User) -> bool) -> Result<Option<UserQueryResult>, UserQueryError> {
        if self.fail_queries {
            return Err(UserQueryError::DatabaseError("connection refused".to_string()));
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| pred(u))
            .map(to_result))
    }
}

fn to_result(u: &User) -> UserQueryResult {
    UserQueryResult {
        id: u.id,
        email: u.email.clone(),
        username: u.username.clone(),
        password_hash: u.password_hash.clone(),
        name: u.name.clone(),
        role: u.role,
        created_at: u.created_at,
        updated_at: u.updated_at,
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find(|u| u.id == id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find(|u| u.email == email)
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find(|u| u.username.as_deref() == Some(username))
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.find(|u| u.email == identifier || u.username.as_deref() == Some(identifier))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| {
            u.email == data.email || (data.username.is_some() && u.username == data.username)
        }) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: data.email,
            username: data.username,
            password_hash: data.password_hash,
            name: data.name,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn set_credentials(
        &self,
        user_id: Uuid,
        username: String,
        password_hash: String,
    ) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        user.username = Some(username);
        user.password_hash = Some(password_hash);
        Ok(user.clone())
    }
}

/// Prefixes the password with `hashed:`; verification compares against that.
pub struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub struct BrokenHasher;

#[async_trait]
impl PasswordHasher for BrokenHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

pub fn user(email: &str, username: Option<&str>, password: Option<&str>, role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: username.map(str::to_string),
        password_hash: password.map(|p| format!("hashed:{p}")),
        name: username.map(str::to_string),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
