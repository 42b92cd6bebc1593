//! Route types and the navigation payload codec.
//!
//! A selected character travels from the list screen to the detail screen as
//! a single string route segment: the record serialized to JSON and then
//! percent-escaped. The detail screen decodes the payload back into a typed
//! character before its first render, so no re-fetch by id is needed and the
//! detail view can never show a different version of the record than the one
//! that was selected.

use crate::api::Character;
use std::fmt;
use std::str::FromStr;

/// Errors produced when decoding a navigation payload.
///
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Payload contains percent-escapes that do not decode to UTF-8
    #[error("Payload is not valid percent-encoded UTF-8: {0}")]
    Escape(#[from] std::string::FromUtf8Error),

    /// Payload is not a JSON character record with all required fields
    #[error("Payload is not a valid character record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Route string does not name a known screen
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// Serialize one character into a URL-safe path segment.
///
/// The result is free of path-delimiting characters and round-trips all six
/// fields through [`decode_character`] without loss.
///
/// # Panics
/// Panics if the character cannot be serialized to JSON, which cannot happen
/// for this field set.
pub fn encode_character(character: &Character) -> String {
    let json = serde_json::to_string(character)
        .expect("Failed to serialize character - this should never happen");
    urlencoding::encode(&json).into_owned()
}

/// Rebuild a character from an encoded payload.
///
/// Exact left inverse of [`encode_character`] for anything it can produce.
/// A malformed payload, a missing field, or a wrongly-typed field is an
/// error; no field is ever silently defaulted.
///
pub fn decode_character(payload: &str) -> Result<Character, PayloadError> {
    let json = urlencoding::decode(payload)?;
    Ok(serde_json::from_str(&json)?)
}

/// Specifying the different routes.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Route {
    CharacterList,
    CharacterDetail { payload: String },
}

impl Route {
    /// Return the detail route carrying the given character.
    ///
    pub fn detail(character: &Character) -> Route {
        Route::CharacterDetail {
            payload: encode_character(character),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::CharacterList => write!(f, "characters"),
            Route::CharacterDetail { payload } => write!(f, "characters/{}", payload),
        }
    }
}

impl FromStr for Route {
    type Err = PayloadError;

    /// Parse a rendered route back into its typed form.
    ///
    /// Inverse of [`Route`]'s `Display`. The detail payload is kept opaque
    /// here; [`decode_character`] validates it when the screen opens.
    fn from_str(s: &str) -> Result<Route, PayloadError> {
        match s.split_once('/') {
            None if s == "characters" => Ok(Route::CharacterList),
            Some(("characters", payload)) if !payload.is_empty() => {
                Ok(Route::CharacterDetail {
                    payload: payload.to_string(),
                })
            }
            _ => Err(PayloadError::UnknownRoute(s.to_string())),
        }
    }
}
