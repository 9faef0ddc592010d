pub mod actor;
pub mod memory;
pub mod season;
pub mod show;

use async_trait::async_trait;
use sqlx::{PgPool, Pool, Postgres};

use crate::models::listing::{SortDirection, SortField};

pub type Result<T> = std::result::Result<T, DatabaseError>;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Catalog store is unavailable: {0}")]
    Unavailable(String),
}

/// Read and write operations the web layer needs from the show catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Total number of shows in the catalog
    async fn count(&self) -> Result<i64>;

    /// One page of shows in the requested order. A negative offset or one past the end yields no rows.
    async fn list_page(
        &self,
        order_by: SortField,
        order: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<show::Model>>;

    /// Every show, by title
    async fn all_shows(&self) -> Result<Vec<show::Model>>;

    async fn get_show(&self, id: i32) -> Result<Option<show::Detail>>;

    /// Characters of a show in billing order, at most `limit` of them
    async fn get_characters(&self, show_id: i32, limit: i64) -> Result<Vec<actor::Character>>;

    async fn get_seasons(&self, show_id: i32) -> Result<Vec<season::Model>>;

    async fn get_actor(&self, id: i32) -> Result<Option<actor::Model>>;

    /// Renames an actor, returning the updated record or `None` when the actor does not exist
    async fn update_actor_name(&self, id: i32, name: &str) -> Result<Option<actor::Model>>;
}

/// Catalog backed by the Postgres series database
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pub pool: Pool<Postgres>,
}

impl PgCatalog {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|err| DatabaseError::Unavailable(err.to_string()))?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Catalog for PgCatalog {
    async fn count(&self) -> Result<i64> {
        show::Model::total_count(&self.pool).await
    }

    async fn list_page(
        &self,
        order_by: SortField,
        order: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<show::Model>> {
        show::Model::fetch_page(&self.pool, order_by, order, limit, offset).await
    }

    async fn all_shows(&self) -> Result<Vec<show::Model>> {
        show::Model::fetch_all(&self.pool).await
    }

    async fn get_show(&self, id: i32) -> Result<Option<show::Detail>> {
        show::Detail::fetch_by_id(&self.pool, id).await
    }

    async fn get_characters(&self, show_id: i32, limit: i64) -> Result<Vec<actor::Character>> {
        actor::Character::fetch_by_show(&self.pool, show_id, limit).await
    }

    async fn get_seasons(&self, show_id: i32) -> Result<Vec<season::Model>> {
        season::Model::fetch_by_show(&self.pool, show_id).await
    }

    async fn get_actor(&self, id: i32) -> Result<Option<actor::Model>> {
        actor::Model::fetch_by_id(&self.pool, id).await
    }

    async fn update_actor_name(&self, id: i32, name: &str) -> Result<Option<actor::Model>> {
        actor::Model::update_name(&self.pool, id, name).await
    }
}
