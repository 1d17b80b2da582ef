//! Client core for the lending-library book store.
//!
//! # Overview
//! Tracks a small lending library: books, who borrowed them, and when they
//! were borrowed and returned. The store is remote; this crate owns the
//! client side of the contract — the `Book` data model, the four semantic
//! operations on it (list, create, update, delete), and the rules mapping
//! client-held form state onto those operations.
//!
//! # Design
//! - Host-does-IO: `BookStoreClient` builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network. The caller executes
//!   the actual round-trip, making the core fully deterministic and testable.
//! - `BookStoreClient` is stateless — it holds only `base_url`. All local
//!   state (the shared form buffer and the cached book list) lives in
//!   `BookFormController`, which wraps the client with per-action
//!   `start_*` / `finish_*` pairs.
//! - Writes multiplex through one POST endpoint discriminated by an
//!   `operation` field; list is a separate GET path.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;

pub use client::BookStoreClient;
pub use controller::{BookFormController, FetchOutcome};
pub use error::{FailureKind, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Book, BookDraft, WriteAck, WriteOp};
