use sqlx::{Executor, Postgres};

use crate::database::{DatabaseError, Result};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Model {
    pub id: i32,
    pub season_number: i32,
    pub title: Option<String>,
    pub overview: Option<String>,
}

impl<'q> Model {
    /// All seasons of a show, first season first
    pub async fn fetch_by_show<E>(pool: E, show_id: i32) -> Result<Vec<Model>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let q = "SELECT id, season_number::integer AS season_number, title, overview \
                 FROM seasons WHERE show_id = $1 ORDER BY season_number ASC";

        sqlx::query_as(q)
            .bind(show_id)
            .fetch_all(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }
}
