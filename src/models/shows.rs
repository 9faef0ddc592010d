use chrono::{Datelike, NaiveDate};

use crate::database::{actor::Character, season, show};

/// How many characters the detail page names in its cast line
pub const DETAIL_CHARACTER_LIMIT: i64 = 3;
/// How many characters the cast page lists
pub const CAST_CHARACTER_LIMIT: i64 = 100;

/// Video id embedded in a trailer URL: everything after the first `=`.
/// A URL without `=` is returned whole.
pub fn trailer_id(trailer: Option<&str>) -> &str {
    match trailer {
        Some(url) if !url.is_empty() => url.split_once('=').map_or(url, |(_, id)| id),
        _ => "",
    }
}

/// Formats a runtime as `"1h 30min"`, leaving out whichever part is zero
pub fn runtime_label(minutes: Option<i32>) -> String {
    let minutes = minutes.unwrap_or(0).max(0);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}min"));
    }

    parts.join(" ")
}

/// Actor names joined for display, in the order given
pub fn actor_names(characters: &[Character]) -> String {
    characters
        .iter()
        .map(|character| character.actor_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn year_label(year: Option<NaiveDate>) -> String {
    year.map(|date| date.year().to_string()).unwrap_or_default()
}

/// Everything shown on a show's detail page
#[derive(Debug, Clone, PartialEq)]
pub struct ShowPage {
    pub show: show::Detail,
    pub trailer_id: String,
    pub runtime: String,
    pub characters: String,
    pub seasons: Vec<season::Model>,
}

impl ShowPage {
    pub fn new(show: show::Detail, characters: &[Character], seasons: Vec<season::Model>) -> Self {
        let trailer_id = trailer_id(show.summary.trailer.as_deref()).to_owned();
        let runtime = runtime_label(show.summary.runtime);

        Self {
            show,
            trailer_id,
            runtime,
            characters: actor_names(characters),
            seasons,
        }
    }
}
