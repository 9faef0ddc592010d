//! In-process catalog kept in concurrent maps, used as a stand-in for Postgres.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::database::{Catalog, Result, actor, season, show};
use crate::models::listing::{SortDirection, SortField};

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    pub shows: Arc<DashMap<i32, show::Detail>>,
    pub seasons: Arc<DashMap<i32, Vec<season::Model>>>,
    pub actors: Arc<DashMap<i32, actor::Model>>,
    /// show id -> (actor id, character name) in casting order
    pub casts: Arc<DashMap<i32, Vec<(i32, String)>>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_show(&self, show: show::Detail) {
        self.shows.insert(show.summary.id, show);
    }

    pub fn insert_season(&self, show_id: i32, season: season::Model) {
        self.seasons.entry(show_id).or_default().push(season);
    }

    pub fn insert_actor(&self, actor: actor::Model) {
        self.actors.insert(actor.id, actor);
    }

    pub fn cast(&self, show_id: i32, actor_id: i32, character_name: impl Into<String>) {
        self.casts
            .entry(show_id)
            .or_default()
            .push((actor_id, character_name.into()));
    }

    fn summaries(&self) -> Vec<show::Model> {
        self.shows
            .iter()
            .map(|entry| entry.value().summary.clone())
            .collect()
    }
}

/// Orders missing values last in both directions, like `NULLS LAST`
fn compare_nullable<T: Ord>(a: &Option<T>, b: &Option<T>, order: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => order.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_shows(
    a: &show::Model,
    b: &show::Model,
    order_by: SortField,
    order: SortDirection,
) -> Ordering {
    let primary = match order_by {
        SortField::Id => order.apply(a.id.cmp(&b.id)),
        SortField::Title => order.apply(a.title.cmp(&b.title)),
        SortField::Year => compare_nullable(&a.year, &b.year, order),
        SortField::Runtime => compare_nullable(&a.runtime, &b.runtime, order),
        SortField::Rating => compare_nullable(&a.rating, &b.rating, order),
        SortField::Genres => order.apply(a.genres.cmp(&b.genres)),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn count(&self) -> Result<i64> {
        Ok(self.shows.len() as i64)
    }

    async fn list_page(
        &self,
        order_by: SortField,
        order: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<show::Model>> {
        let Ok(offset) = usize::try_from(offset) else {
            return Ok(Vec::new());
        };
        let mut shows = self.summaries();
        shows.sort_by(|a, b| compare_shows(a, b, order_by, order));

        let limit = usize::try_from(limit.clamp(1, 1000)).unwrap_or(1);

        Ok(shows.into_iter().skip(offset).take(limit).collect())
    }

    async fn all_shows(&self) -> Result<Vec<show::Model>> {
        let mut shows = self.summaries();
        shows.sort_by(|a, b| compare_shows(a, b, SortField::Title, SortDirection::Asc));

        Ok(shows)
    }

    async fn get_show(&self, id: i32) -> Result<Option<show::Detail>> {
        Ok(self.shows.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_characters(&self, show_id: i32, limit: i64) -> Result<Vec<actor::Character>> {
        let limit = usize::try_from(limit.clamp(1, 1000)).unwrap_or(1);
        let Some(cast) = self.casts.get(&show_id) else {
            return Ok(Vec::new());
        };

        let characters = cast
            .iter()
            .filter_map(|(actor_id, character_name)| {
                self.actors.get(actor_id).map(|actor| actor::Character {
                    actor_id: *actor_id,
                    actor_name: actor.name.clone(),
                    character_name: character_name.clone(),
                })
            })
            .take(limit)
            .collect();

        Ok(characters)
    }

    async fn get_seasons(&self, show_id: i32) -> Result<Vec<season::Model>> {
        let mut seasons = self
            .seasons
            .get(&show_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        seasons.sort_by_key(|season| season.season_number);

        Ok(seasons)
    }

    async fn get_actor(&self, id: i32) -> Result<Option<actor::Model>> {
        Ok(self.actors.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_actor_name(&self, id: i32, name: &str) -> Result<Option<actor::Model>> {
        Ok(self.actors.get_mut(&id).map(|mut entry| {
            entry.name = name.to_owned();
            entry.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn show(id: i32, title: &str, rating: Option<rust_decimal::Decimal>) -> show::Detail {
        show::Detail {
            summary: show::Model {
                id,
                title: title.to_owned(),
                year: None,
                runtime: None,
                rating,
                trailer: None,
                homepage: None,
                genres: String::new(),
            },
            overview: None,
        }
    }

    #[tokio::test]
    async fn test_list_page_orders_and_slices() {
        let catalog = MemoryCatalog::new();
        catalog.insert_show(show(1, "Breaking Bad", Some(dec!(9.5))));
        catalog.insert_show(show(2, "Atlanta", Some(dec!(8.6))));
        catalog.insert_show(show(3, "Unrated", None));
        catalog.insert_show(show(4, "Chernobyl", Some(dec!(9.4))));

        let by_rating = catalog
            .list_page(SortField::Rating, SortDirection::Desc, 10, 0)
            .await
            .unwrap();
        let ids: Vec<i32> = by_rating.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);

        let by_rating_asc = catalog
            .list_page(SortField::Rating, SortDirection::Asc, 10, 0)
            .await
            .unwrap();
        let ids: Vec<i32> = by_rating_asc.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        let second_page = catalog
            .list_page(SortField::Title, SortDirection::Asc, 2, 2)
            .await
            .unwrap();
        let titles: Vec<&str> = second_page.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Chernobyl", "Unrated"]);

        let past_end = catalog
            .list_page(SortField::Title, SortDirection::Asc, 2, 40)
            .await
            .unwrap();
        assert!(past_end.is_empty());

        let before_start = catalog
            .list_page(SortField::Title, SortDirection::Asc, 2, -2)
            .await
            .unwrap();
        assert!(before_start.is_empty());
    }

    #[tokio::test]
    async fn test_characters_follow_cast_order_and_renames() {
        let catalog = MemoryCatalog::new();
        catalog.insert_show(show(1, "Star Wars: Andor", None));
        for (id, name) in [(10, "Diego Luna"), (11, "Stellan Skarsgard"), (12, "Adria Arjona")] {
            catalog.insert_actor(actor::Model {
                id,
                name: name.to_owned(),
                birthday: None,
                death: None,
                biography: None,
            });
        }
        catalog.cast(1, 11, "Luthen Rael");
        catalog.cast(1, 10, "Cassian Andor");
        catalog.cast(1, 12, "Bix Caleen");

        let characters = catalog.get_characters(1, 2).await.unwrap();
        let names: Vec<&str> = characters.iter().map(|c| c.actor_name.as_str()).collect();
        assert_eq!(names, vec!["Stellan Skarsgard", "Diego Luna"]);

        let renamed = catalog.update_actor_name(10, "D. Luna").await.unwrap();
        assert_eq!(renamed.map(|a| a.name), Some("D. Luna".to_owned()));
        let characters = catalog.get_characters(1, 3).await.unwrap();
        assert_eq!(characters[1].actor_name, "D. Luna");

        assert!(catalog.update_actor_name(99, "Nobody").await.unwrap().is_none());
        assert!(catalog.get_characters(2, 3).await.unwrap().is_empty());
    }
}
