use std::env;

use crate::errors::config::ConfigError;
use crate::errors::pagination::PaginationError;
use crate::pagination::{self, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE};

/// Shape of the paged show listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSettings {
    /// Shows per page
    pub page_size: i64,
    /// Page numbers shown in the pagination bar, always odd
    pub window_size: i64,
}

impl ListingSettings {
    pub fn new(page_size: i64, window_size: i64) -> Result<Self, PaginationError> {
        pagination::validate_page_size(page_size)?;
        pagination::validate_window_size(window_size)?;

        Ok(Self {
            page_size,
            window_size,
        })
    }
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub database_url: String,
    pub listing: ListingSettings,
}

impl Settings {
    /// Reads settings from the process environment (after `.env` has been loaded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup("SERVER_URL").ok_or(ConfigError::Missing("SERVER_URL"))?;
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let page_size = integer_or(&lookup, "SHOWS_PER_PAGE", DEFAULT_PAGE_SIZE)?;
        let window_size = integer_or(&lookup, "SHOWN_PAGE_NUMBERS", DEFAULT_WINDOW_SIZE)?;

        Ok(Self {
            server_url,
            database_url,
            listing: ListingSettings::new(page_size, window_size)?,
        })
    }
}

fn integer_or<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotAnInteger { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("SERVER_URL", "127.0.0.1:8080"),
        ("DATABASE_URL", "postgres://localhost/codecool_series"),
    ];

    #[test]
    fn test_defaults() {
        let settings = settings(&REQUIRED).unwrap();
        assert_eq!(settings.server_url, "127.0.0.1:8080");
        assert_eq!(settings.listing, ListingSettings::default());
        assert_eq!(settings.listing.page_size, 15);
        assert_eq!(settings.listing.window_size, 5);
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SHOWS_PER_PAGE", "20"));
        vars.push(("SHOWN_PAGE_NUMBERS", " 7 "));

        let settings = settings(&vars).unwrap();
        assert_eq!(settings.listing, ListingSettings::new(20, 7).unwrap());
    }

    #[test]
    fn test_missing_required() {
        assert!(matches!(
            settings(&[("SERVER_URL", "127.0.0.1:8080")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));
    }

    #[test]
    fn test_rejects_bad_listing_values() {
        let mut even = REQUIRED.to_vec();
        even.push(("SHOWN_PAGE_NUMBERS", "4"));
        assert!(matches!(
            settings(&even),
            Err(ConfigError::Pagination(PaginationError::InvalidWindowSize(4)))
        ));

        let mut garbage = REQUIRED.to_vec();
        garbage.push(("SHOWS_PER_PAGE", "lots"));
        assert!(matches!(
            settings(&garbage),
            Err(ConfigError::NotAnInteger {
                key: "SHOWS_PER_PAGE",
                ..
            })
        ));

        let mut empty_pages = REQUIRED.to_vec();
        empty_pages.push(("SHOWS_PER_PAGE", "0"));
        assert!(matches!(
            settings(&empty_pages),
            Err(ConfigError::Pagination(PaginationError::InvalidPageSize(0)))
        ));
    }
}
