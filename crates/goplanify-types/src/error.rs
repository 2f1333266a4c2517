use std::fmt;

use crate::domain::{ItemId, TripId};

/// Result type for goplanify-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lookup found no matching record
    NotFound(String),

    /// Operation exists as a placeholder only
    NotImplemented(&'static str),

    /// Field value rejected by validation
    InvalidInput(String),

    /// Itinerary item does not reference the trip that holds it
    OrphanedItem {
        item_id: ItemId,
        owner: TripId,
        expected: TripId,
    },

    /// Two trips in one catalog share an id
    DuplicateTrip(TripId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::NotImplemented(what) => write!(f, "Not implemented: {}", what),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::OrphanedItem {
                item_id,
                owner,
                expected,
            } => write!(
                f,
                "Itinerary item {} references trip {} but is held by trip {}",
                item_id, owner, expected
            ),
            Error::DuplicateTrip(id) => write!(f, "Duplicate trip id: {}", id),
        }
    }
}

impl std::error::Error for Error {}
