use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User operations
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Store `input` as a new record; any id it carries is discarded
    pub async fn create_user(&self, mut input: User) -> UserResult<User> {
        input.id = None;
        let user = self.repository.save(input).await?;
        tracing::info!(user_id = ?user.id, "Created user");
        Ok(user)
    }

    /// Merge `changes` into an existing user; absent fields are kept
    pub async fn update_user(&self, id: i64, changes: UpdateUser) -> UserResult<User> {
        let mut user = self.get_user(id).await?;
        user.apply_update(changes);
        self.repository.save(user).await
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        let user = self.get_user(id).await?;
        self.repository.delete(&user).await
    }
}
