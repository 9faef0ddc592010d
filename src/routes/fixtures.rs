use std::sync::Arc;

use actix_web::web;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::AppState;
use crate::config::ListingSettings;
use crate::database::memory::MemoryCatalog;
use crate::database::{actor, season, show};
use crate::views::html::HtmlRenderer;

/// Builds an app around the given state with the same middleware as the server
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($state)
                .wrap(actix_web::middleware::NormalizePath::trim())
                .configure(crate::routes::config)
                .default_service(actix_web::web::route().to(crate::routes::not_found::not_found)),
        )
        .await
    };
}

pub(crate) use init_app;

pub fn state(catalog: MemoryCatalog) -> web::Data<AppState> {
    web::Data::new(AppState {
        catalog: Arc::new(catalog),
        renderer: Arc::new(HtmlRenderer),
        listing: ListingSettings::default(),
    })
}

/// `count` shows titled "Show 001".. with ratings rising with their id
pub fn catalog_with_shows(count: i32) -> MemoryCatalog {
    let catalog = MemoryCatalog::new();
    for id in 1..=count {
        catalog.insert_show(show::Detail {
            summary: show::Model {
                id,
                title: format!("Show {id:03}"),
                year: NaiveDate::from_ymd_opt(1990 + id % 30, 1, 1),
                runtime: Some(20 + id),
                rating: Some(Decimal::new(i64::from(id), 1)),
                trailer: None,
                homepage: None,
                genres: "Drama".to_owned(),
            },
            overview: None,
        });
    }
    catalog
}

/// A single well-known show with cast and seasons
pub fn breaking_bad() -> MemoryCatalog {
    let catalog = MemoryCatalog::new();
    catalog.insert_show(show::Detail {
        summary: show::Model {
            id: 1396,
            title: "Breaking Bad".to_owned(),
            year: NaiveDate::from_ymd_opt(2008, 1, 20),
            runtime: Some(49),
            rating: Some(Decimal::new(95, 1)),
            trailer: Some("https://www.youtube.com/watch?v=XZ8daibM3AE".to_owned()),
            homepage: Some("http://www.amc.com/shows/breaking-bad".to_owned()),
            genres: "Crime, Drama, Thriller".to_owned(),
        },
        overview: Some("A chemistry teacher turns to crime.".to_owned()),
    });

    let cast = [
        (17419, "Bryan Cranston", "Walter White"),
        (84497, "Aaron Paul", "Jesse Pinkman"),
        (134531, "Anna Gunn", "Skyler White"),
        (14329, "Dean Norris", "Hank Schrader"),
    ];
    for (id, name, character) in cast {
        catalog.insert_actor(actor::Model {
            id,
            name: name.to_owned(),
            birthday: None,
            death: None,
            biography: None,
        });
        catalog.cast(1396, id, character);
    }

    for number in [2, 1] {
        catalog.insert_season(
            1396,
            season::Model {
                id: 3570 + number,
                season_number: number,
                title: Some(format!("Season {number}")),
                overview: None,
            },
        );
    }

    catalog
}
