pub mod actors;
pub mod listing;
pub mod shows;
