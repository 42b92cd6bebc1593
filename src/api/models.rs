use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines character data structure.
///
/// Immutable value type; two characters with the same fields are equal.
/// Instances are created only by deserializing API responses or navigation
/// payloads.
#[derive(Clone, Debug, Serialize, Deserialize, Dummy, PartialEq, Eq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
}

/// Defines the response envelope for the character collection endpoint.
///
/// Lives only for the duration of a fetch; its contents are moved into
/// store state.
#[derive(Debug, Deserialize)]
pub struct CharactersResponse {
    pub results: Vec<Character>,
}
