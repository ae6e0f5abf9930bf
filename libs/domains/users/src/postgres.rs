use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::{entity, error::UserResult, models::User, repository::UserRepository};

/// PostgreSQL-backed [`UserRepository`]; ids come from the `BIGSERIAL` column
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn save(&self, user: User) -> UserResult<User> {
        let is_new = user.id.is_none();
        let active_model: entity::ActiveModel = user.into();

        let model = if is_new {
            self.base.insert(active_model).await?
        } else {
            self.base.update(active_model).await?
        };

        tracing::info!(user_id = model.id, created = is_new, "Saved user");
        Ok(model.into())
    }

    async fn delete(&self, user: &User) -> UserResult<()> {
        if let Some(id) = user.id {
            let rows = self.base.delete_by_id(id).await?;
            tracing::info!(user_id = id, rows, "Deleted user");
        }
        Ok(())
    }
}
