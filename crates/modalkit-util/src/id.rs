//! ULID-based presentation identifiers.
//!
//! Every dialog presentation gets a stable identity token of the form
//! `prs_<ulid>` at construction time. The token is the correlation key between
//! a descriptor, its persisted state, and the eventual choice callback, so it
//! must survive serialization unchanged.

use ulid::Ulid;

/// Prefix carried by every presentation identifier.
pub const PRESENTATION_PREFIX: &str = "prs";

/// Generate a fresh presentation identifier.
///
/// Identifiers are ascending (newer = larger), so logs and persisted blobs
/// sort chronologically.
pub fn presentation_id() -> String {
    with_ulid(Ulid::new())
}

/// Build a presentation identifier from a specific ULID (tests, imports).
pub fn with_ulid(ulid: Ulid) -> String {
    format!(
        "{}_{}",
        PRESENTATION_PREFIX,
        ulid.to_string().to_lowercase()
    )
}

/// Extract the ULID from a presentation identifier, if well-formed.
pub fn parse(id: &str) -> Option<Ulid> {
    let rest = id.strip_prefix(PRESENTATION_PREFIX)?.strip_prefix('_')?;
    Ulid::from_string(rest).ok()
}

/// Check whether a string is a well-formed presentation identifier.
pub fn is_presentation_id(id: &str) -> bool {
    parse(id).is_some()
}
