use once_cell::sync::Lazy;
use regex::Regex;

pub const ACTOR_NAME_MAX_CHARS: usize = 128;

static ACTOR_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\p{Cc}]+$").unwrap());

/// Trims a submitted actor name, returning it when it is fit to store
pub fn normalize_actor_name(name: &str) -> Option<String> {
    let name = name.trim();

    let valid = !name.is_empty()
        && name.chars().count() <= ACTOR_NAME_MAX_CHARS
        && ACTOR_NAME_RE.is_match(name);

    valid.then(|| name.to_owned())
}
