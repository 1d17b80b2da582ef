//! Domain DTOs for the book store wire format.
//!
//! # Design
//! These types mirror the store's schema but are defined independently from
//! the mock-server crate; integration tests catch schema drift. `book_id` is
//! an opaque `String` — the store mints and validates identifiers, the
//! client only carries them.
//!
//! The store represents "never returned" as an empty `returned_date` string,
//! so `Book` normalizes `""` to `None` on deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// A single book record returned by the store.
///
/// A book with no `returned_date` is outstanding (still on loan).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub borrower: String,
    pub borrowed_date: String,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub returned_date: Option<String>,
}

impl Book {
    /// True while the book is on loan, i.e. no returned date recorded.
    pub fn is_outstanding(&self) -> bool {
        self.returned_date.is_none()
    }
}

/// The store encodes "never returned" as `""`; treat both as absent.
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// The client-held form buffer: scratch values for the four editable fields.
///
/// Empty string means "field is blank". A single instance backs both the
/// create form and the edit action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub borrower: String,
    pub borrowed_date: String,
    pub returned_date: String,
}

impl BookDraft {
    /// Reset every field to blank.
    pub fn clear(&mut self) {
        *self = BookDraft::default();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.borrower.is_empty()
            && self.borrowed_date.is_empty()
            && self.returned_date.is_empty()
    }
}

/// A write request as sent to the multiplexed store endpoint.
///
/// The store distinguishes the three writes by the `operation` field in the
/// JSON body. Create and update forward all four editable fields verbatim,
/// including an empty `returned_date` — supplying a field as empty is a
/// deliberate instruction to clear it, not a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "lowercase")]
pub enum WriteOp {
    Create {
        title: String,
        borrower: String,
        borrowed_date: String,
        returned_date: String,
    },
    Update {
        book_id: String,
        title: String,
        borrower: String,
        borrowed_date: String,
        returned_date: String,
    },
    Delete {
        book_id: String,
    },
}

/// Acknowledgement body returned by the store for a successful write.
///
/// The store echoes the minted `book_id` on create; the core does not rely
/// on it being present.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WriteAck {
    pub message: String,
    #[serde(default)]
    pub book_id: Option<String>,
}

/// Error body returned by the store for a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreErrorBody {
    pub error: String,
}
