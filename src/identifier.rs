//! Parsing of player UUIDs found in lookup responses.
//!
//! Sources hand back UUID text in either the 36-character hyphenated form or
//! the 32-character bare hex form. Both parse into a [`Uuid`], whose `Display`
//! is the canonical lowercase hyphenated rendering.

use crate::constants::{HYPHENATED_UUID_LEN, SIMPLE_UUID_LEN};
use crate::error::AppError;
use uuid::Uuid;

/// Parses a player UUID from its textual form.
///
/// Only the hyphenated (`8-4-4-4-12`) and bare 32-digit hex forms are accepted.
/// Braced and `urn:uuid:` forms, which the `uuid` crate would otherwise take,
/// are rejected so that every accepted value came from one of the two shapes
/// the lookup services actually emit.
///
/// # Example
/// ```
/// use custom_whitelist::identifier::parse_identifier;
///
/// let id = parse_identifier("069a79f444e94726a5befca90e38aaf5").unwrap();
/// assert_eq!(id.to_string(), "069a79f4-44e9-4726-a5be-fca90e38aaf5");
/// ```
pub fn parse_identifier(text: &str) -> Result<Uuid, AppError> {
    if text.len() != HYPHENATED_UUID_LEN && text.len() != SIMPLE_UUID_LEN {
        return Err(AppError::malformed_identifier(
            text,
            format!(
                "expected {HYPHENATED_UUID_LEN} or {SIMPLE_UUID_LEN} characters, got {}",
                text.len()
            ),
        ));
    }

    Uuid::try_parse(text).map_err(|e| AppError::malformed_identifier(text, e.to_string()))
}

/// Renders a UUID in canonical hyphenated lowercase form.
pub fn to_canonical(id: &Uuid) -> String {
    id.hyphenated().to_string()
}
