use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};

use crate::database::{DatabaseError, Result};
use crate::models::listing::{SortDirection, SortField};

const SUMMARY_COLUMNS: &str = r#"s.id, s.title, s.year, s.runtime::integer AS runtime,
    s.rating::numeric AS rating, s.trailer, s.homepage,
    COALESCE(string_agg(g.name, ', ' ORDER BY g.name), '') AS genres"#;

const GENRE_JOINS: &str = r#"LEFT JOIN show_genres sg ON sg.show_id = s.id
    LEFT JOIN genres g ON g.id = sg.genre_id"#;

/// A row of the show listing
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Model {
    pub id: i32,
    pub title: String,
    pub year: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub rating: Option<Decimal>,
    pub trailer: Option<String>,
    pub homepage: Option<String>,
    pub genres: String,
}

/// A show with everything the detail page needs
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Detail {
    #[sqlx(flatten)]
    pub summary: Model,
    pub overview: Option<String>,
}

impl<'q> Model {
    pub async fn total_count<E>(pool: E) -> Result<i64>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let q = "SELECT COUNT(*) FROM shows";
        let result: i64 = sqlx::query_scalar(q).fetch_one(pool).await?;

        Ok(result)
    }

    /// Fetches one page of shows. The ORDER BY clause is assembled only from the
    /// fixed column and keyword strings of [`SortField`] and [`SortDirection`].
    pub async fn fetch_page<E>(
        pool: E,
        order_by: SortField,
        order: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Model>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        if offset < 0 {
            return Ok(Vec::new());
        }
        let limit = limit.clamp(1, 1000);
        let q = format!(
            "SELECT {SUMMARY_COLUMNS} FROM shows s {GENRE_JOINS} GROUP BY s.id \
             ORDER BY {} {} NULLS LAST, s.id ASC LIMIT $1 OFFSET $2",
            order_by.column(),
            order.as_sql(),
        );

        sqlx::query_as(&q)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }

    pub async fn fetch_all<E>(pool: E) -> Result<Vec<Model>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let q = format!(
            "SELECT {SUMMARY_COLUMNS} FROM shows s {GENRE_JOINS} GROUP BY s.id ORDER BY s.title ASC"
        );

        sqlx::query_as(&q)
            .fetch_all(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }
}

impl<'q> Detail {
    pub async fn fetch_by_id<E>(pool: E, id: i32) -> Result<Option<Detail>>
    where
        E: 'q + Executor<'q, Database = Postgres>,
    {
        let q = format!(
            "SELECT {SUMMARY_COLUMNS}, s.overview FROM shows s {GENRE_JOINS} \
             WHERE s.id = $1 GROUP BY s.id"
        );

        sqlx::query_as(&q)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DatabaseError::Sqlx)
    }
}
