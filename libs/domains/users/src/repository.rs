use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in the store's natural order
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Insert when `user.id` is empty (assigning one), otherwise overwrite that record
    async fn save(&self, user: User) -> UserResult<User>;

    async fn delete(&self, user: &User) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Ids are assigned from 1 upwards and never reused; listing is in id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn save(&self, mut user: User) -> UserResult<User> {
        let mut store = self.store.write().await;

        let id = match user.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id += 1;
                store.last_id
            }
        };
        user.id = Some(id);
        store.users.insert(id, user.clone());

        tracing::debug!(user_id = id, "Saved user");
        Ok(user)
    }

    async fn delete(&self, user: &User) -> UserResult<()> {
        if let Some(id) = user.id {
            self.store.write().await.users.remove(&id);
            tracing::debug!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}
