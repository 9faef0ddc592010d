use serde::Deserialize;

use crate::database::{actor, show};

/// Body of the actor edit form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActorForm {
    pub name: String,
}

/// A show's full cast, sorted by actor name
#[derive(Debug, Clone, PartialEq)]
pub struct CastPage {
    pub show: show::Detail,
    pub characters: Vec<actor::Character>,
}

impl CastPage {
    pub fn new(show: show::Detail, mut characters: Vec<actor::Character>) -> Self {
        characters.sort_by(|a, b| {
            a.actor_name
                .cmp(&b.actor_name)
                .then_with(|| a.character_name.cmp(&b.character_name))
        });

        Self { show, characters }
    }
}
