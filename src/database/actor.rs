use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::database::{DatabaseError, Result};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Model {
    pub id: i32,
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub death: Option<NaiveDate>,
    pub biography: Option<String>,
}

/// An actor together with the character they play in one show
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Character {
    pub actor_id: i32,
    pub actor_name: String,
    pub character_name: String,
}

impl<'q> Model {
    pub async fn fetch_by_id<E>(pool: E, id: i32) -> Result<Option<Model>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let q = "SELECT id, name, birthday, death, biography FROM actors WHERE id = $1";

        sqlx::query_as(q)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }

    pub async fn update_name<E>(pool: E, id: i32, name: &str) -> Result<Option<Model>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let q = "UPDATE actors SET name = $2 WHERE id = $1 \
                 RETURNING id, name, birthday, death, biography";

        sqlx::query_as(q)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }
}

impl<'q> Character {
    /// Characters of a show in the order they were cast
    pub async fn fetch_by_show<E>(pool: E, show_id: i32, limit: i64) -> Result<Vec<Character>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let limit = limit.clamp(1, 1000);
        let q = "SELECT a.id AS actor_id, a.name AS actor_name, sc.character_name \
                 FROM show_characters sc JOIN actors a ON a.id = sc.actor_id \
                 WHERE sc.show_id = $1 ORDER BY sc.id ASC LIMIT $2";

        sqlx::query_as(q)
            .bind(show_id)
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }
}
