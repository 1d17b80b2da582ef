//! Form state and cache reconciliation for the book view.
//!
//! # Design
//! `BookFormController` owns the two pieces of client-side state: the single
//! shared form buffer (`BookDraft`) and the cached book list. Each user
//! action is a `start_*` / `finish_*` pair around one store round-trip; the
//! host executes the IO in between, may keep any number of requests in
//! flight, and applies completions in arrival order. The controller itself
//! tracks nothing about in-flight requests.
//!
//! One form buffer backs both the create form and every row's edit action:
//! "edit book X" sends whatever is in the buffer at that moment, not X's
//! stored values. This is the original manual-overwrite workflow, kept for
//! wire compatibility with the existing store.
//!
//! Reconciliation policy:
//! - refresh: success replaces the cached list wholesale; failure leaves it.
//! - add: success clears the form; failure leaves it so the user can retry.
//! - edit/delete: no local state changes at all.
//! The cache is never patched after a write — a created or deleted book
//! stays invisible/visible until the next refresh. That staleness window is
//! deliberate, not an oversight.
//!
//! Every failure is logged through `tracing` and swallowed; nothing
//! propagates to the rendering surface, which stays interactive in its
//! pre-action state.

use crate::client::BookStoreClient;
use crate::error::StoreError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Book, BookDraft};

/// What the host hands back after attempting one round-trip: the response,
/// or `StoreError::Transport` if the round-trip itself failed.
pub type FetchOutcome = Result<HttpResponse, StoreError>;

/// Client-side state holder for the book view.
#[derive(Debug)]
pub struct BookFormController {
    client: BookStoreClient,
    form: BookDraft,
    books: Vec<Book>,
}

impl BookFormController {
    pub fn new(client: BookStoreClient) -> Self {
        Self {
            client,
            form: BookDraft::default(),
            books: Vec::new(),
        }
    }

    /// The shared form buffer, as last typed.
    pub fn form(&self) -> &BookDraft {
        &self.form
    }

    /// The cached book list, valid as of the last successful refresh.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_borrower(&mut self, borrower: impl Into<String>) {
        self.form.borrower = borrower.into();
    }

    pub fn set_borrowed_date(&mut self, borrowed_date: impl Into<String>) {
        self.form.borrowed_date = borrowed_date.into();
    }

    pub fn set_returned_date(&mut self, returned_date: impl Into<String>) {
        self.form.returned_date = returned_date.into();
    }

    /// Begin a full list fetch (initial load or explicit refresh).
    pub fn start_refresh(&self) -> HttpRequest {
        self.client.build_list_books()
    }

    /// Apply the outcome of a refresh. On success the cached list is
    /// replaced wholesale; on failure it keeps its previous value.
    pub fn finish_refresh(&mut self, outcome: FetchOutcome) {
        match outcome.and_then(|resp| self.client.parse_list_books(resp)) {
            Ok(books) => {
                tracing::debug!(count = books.len(), "book list refreshed");
                self.books = books;
            }
            Err(err) => report("listing books", &err),
        }
    }

    /// Begin creating a book from the current form values. Returns `None`
    /// (with the failure logged) if the request could not be built.
    pub fn start_add(&self) -> Option<HttpRequest> {
        match self.client.build_create_book(&self.form) {
            Ok(req) => Some(req),
            Err(err) => {
                report("creating book", &err);
                None
            }
        }
    }

    /// Apply the outcome of a create. On success the form is cleared; on
    /// failure it is left intact for retry. The cached list is untouched
    /// either way — the new book appears at the next refresh.
    pub fn finish_add(&mut self, outcome: FetchOutcome) {
        match outcome.and_then(|resp| self.client.parse_create_book(resp)) {
            Ok(ack) => {
                tracing::debug!(book_id = ack.book_id.as_deref(), "book created");
                self.form.clear();
            }
            Err(err) => report("creating book", &err),
        }
    }

    /// Begin updating book `book_id` with the current form values — the
    /// buffer's contents right now, not the row's stored fields. An empty id
    /// never reaches the store: the precondition failure is logged and no
    /// request is produced.
    pub fn start_edit(&self, book_id: &str) -> Option<HttpRequest> {
        match self.client.build_update_book(book_id, &self.form) {
            Ok(req) => Some(req),
            Err(err) => {
                report("updating book", &err);
                None
            }
        }
    }

    /// Apply the outcome of an update. No local state changes either way.
    pub fn finish_edit(&mut self, outcome: FetchOutcome) {
        match outcome.and_then(|resp| self.client.parse_update_book(resp)) {
            Ok(_) => tracing::debug!("book updated"),
            Err(err) => report("updating book", &err),
        }
    }

    /// Begin deleting book `book_id`. Same empty-id precondition as edit.
    pub fn start_delete(&self, book_id: &str) -> Option<HttpRequest> {
        match self.client.build_delete_book(book_id) {
            Ok(req) => Some(req),
            Err(err) => {
                report("deleting book", &err);
                None
            }
        }
    }

    /// Apply the outcome of a delete. The cached list still shows the row
    /// until the next refresh.
    pub fn finish_delete(&mut self, outcome: FetchOutcome) {
        match outcome.and_then(|resp| self.client.parse_delete_book(resp)) {
            Ok(_) => tracing::debug!("book deleted"),
            Err(err) => report("deleting book", &err),
        }
    }
}

fn report(action: &str, err: &StoreError) {
    tracing::warn!(kind = ?err.kind(), error = %err, "{action} failed");
}
