use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::database::show;
use crate::errors::show::ShowError;
use crate::pagination::PageWindow;

/// Columns the show listing can be ordered by
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Title,
    Year,
    Runtime,
    #[default]
    Rating,
    Genres,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Title,
        SortField::Year,
        SortField::Runtime,
        SortField::Rating,
        SortField::Genres,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Year => "year",
            SortField::Runtime => "runtime",
            SortField::Rating => "rating",
            SortField::Genres => "genres",
        }
    }

    /// SQL expression of the column in the listing query
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "s.id",
            SortField::Title => "s.title",
            SortField::Year => "s.year",
            SortField::Runtime => "s.runtime",
            SortField::Rating => "s.rating",
            SortField::Genres => "genres",
        }
    }
}

impl FromStr for SortField {
    type Err = ShowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShowError::InvalidSortField(s.to_owned()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Turns an ascending comparison into one for this direction
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ShowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(ShowError::InvalidSortDirection(s.to_owned()))
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: i64,
    pub order_by: SortField,
    pub order: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            order_by: SortField::default(),
            order: SortDirection::default(),
        }
    }
}

impl PageRequest {
    /// Builds a request from the optional route segments, falling back to the defaults
    pub fn from_segments(
        page_number: Option<&str>,
        order_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, ShowError> {
        let defaults = Self::default();

        let page_number = match page_number {
            Some(raw) => raw
                .parse()
                .map_err(|_| ShowError::InvalidPageNumber(raw.to_owned()))?,
            None => defaults.page_number,
        };
        let order_by = match order_by {
            Some(raw) => raw.parse()?,
            None => defaults.order_by,
        };
        let order = match order {
            Some(raw) => raw.parse()?,
            None => defaults.order,
        };

        Ok(Self {
            page_number,
            order_by,
            order,
        })
    }
}

/// One page of the show listing along with what the pagination bar needs
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<show::Model>,
    pub total_count: i64,
    pub total_pages: i64,
    pub window: PageWindow,
    pub page_number: i64,
    pub order_by: SortField,
    pub order: SortDirection,
}

impl CatalogPage {
    pub fn has_prev(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}
