//! Stateless request builder and response parser for the book store.
//!
//! # Design
//! `BookStoreClient` holds only a `base_url` and carries no mutable state
//! between calls. Each semantic operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the caller executes the round-trip in between. All
//! reconciliation of local state lives in the controller, never here.
//!
//! List is a plain GET on the read path; create/update/delete multiplex
//! through one POST endpoint distinguished by the `operation` field in the
//! body. Update and delete refuse an empty `book_id` before building
//! anything — that check never reaches the store.

use crate::error::StoreError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, BookDraft, StoreErrorBody, WriteAck, WriteOp};

/// Stateless client for the book store.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct BookStoreClient {
    base_url: String,
}

impl BookStoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_books(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/books", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// All four draft fields are forwarded verbatim, including an empty
    /// `returned_date`.
    pub fn build_create_book(&self, draft: &BookDraft) -> Result<HttpRequest, StoreError> {
        self.build_write(&WriteOp::Create {
            title: draft.title.clone(),
            borrower: draft.borrower.clone(),
            borrowed_date: draft.borrowed_date.clone(),
            returned_date: draft.returned_date.clone(),
        })
    }

    /// Fails with `EmptyBookId` before any request is built if `book_id` is
    /// empty. The store replaces all four editable fields wholesale, so an
    /// empty field in the draft clears it on the record.
    pub fn build_update_book(
        &self,
        book_id: &str,
        draft: &BookDraft,
    ) -> Result<HttpRequest, StoreError> {
        if book_id.is_empty() {
            return Err(StoreError::EmptyBookId);
        }
        self.build_write(&WriteOp::Update {
            book_id: book_id.to_string(),
            title: draft.title.clone(),
            borrower: draft.borrower.clone(),
            borrowed_date: draft.borrowed_date.clone(),
            returned_date: draft.returned_date.clone(),
        })
    }

    /// Fails with `EmptyBookId` before any request is built if `book_id` is
    /// empty. Deleting an id the store no longer has is not an error.
    pub fn build_delete_book(&self, book_id: &str) -> Result<HttpRequest, StoreError> {
        if book_id.is_empty() {
            return Err(StoreError::EmptyBookId);
        }
        self.build_write(&WriteOp::Delete {
            book_id: book_id.to_string(),
        })
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, StoreError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| StoreError::Deserialization(e.to_string()))
    }

    pub fn parse_create_book(&self, response: HttpResponse) -> Result<WriteAck, StoreError> {
        parse_ack(response)
    }

    pub fn parse_update_book(&self, response: HttpResponse) -> Result<WriteAck, StoreError> {
        parse_ack(response)
    }

    pub fn parse_delete_book(&self, response: HttpResponse) -> Result<WriteAck, StoreError> {
        parse_ack(response)
    }

    fn build_write(&self, op: &WriteOp) -> Result<HttpRequest, StoreError> {
        let body = serde_json::to_string(op).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/books", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn parse_ack(response: HttpResponse) -> Result<WriteAck, StoreError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| StoreError::Deserialization(e.to_string()))
}

/// Map non-200 statuses to the appropriate `StoreError` variant. A 400 is a
/// store-side rejection of the field contents; its `{"error": ...}` body
/// becomes the message when it parses, the raw body otherwise.
fn check_status(response: &HttpResponse) -> Result<(), StoreError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 400 {
        let message = serde_json::from_str::<StoreErrorBody>(&response.body)
            .map(|b| b.error)
            .unwrap_or_else(|_| response.body.clone());
        return Err(StoreError::Rejected {
            status: response.status,
            message,
        });
    }
    Err(StoreError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn client() -> BookStoreClient {
        BookStoreClient::new("http://localhost:3000")
    }

    fn draft() -> BookDraft {
        BookDraft {
            title: "Dune".to_string(),
            borrower: "Amy".to_string(),
            borrowed_date: "2024-01-01".to_string(),
            returned_date: String::new(),
        }
    }

    #[test]
    fn build_list_books_produces_correct_request() {
        let req = client().build_list_books();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/books");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_book_produces_correct_request() {
        let req = client().build_create_book(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/books");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["operation"], "create");
        assert_eq!(body["title"], "Dune");
        assert_eq!(body["borrower"], "Amy");
        assert_eq!(body["borrowed_date"], "2024-01-01");
        // Empty returned_date is forwarded verbatim, not omitted.
        assert_eq!(body["returned_date"], "");
        assert!(body.get("book_id").is_none());
    }

    #[test]
    fn build_update_book_produces_correct_request() {
        let req = client().build_update_book("abc-123", &draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/books");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["operation"], "update");
        assert_eq!(body["book_id"], "abc-123");
        assert_eq!(body["title"], "Dune");
        assert_eq!(body["returned_date"], "");
    }

    #[test]
    fn build_update_book_rejects_empty_id() {
        let err = client().build_update_book("", &draft()).unwrap_err();
        assert!(matches!(err, StoreError::EmptyBookId));
        assert_eq!(err.kind(), FailureKind::Precondition);
    }

    #[test]
    fn build_delete_book_produces_correct_request() {
        let req = client().build_delete_book("abc-123").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["operation"], "delete");
        assert_eq!(body["book_id"], "abc-123");
        assert!(body.get("title").is_none());
    }

    #[test]
    fn build_delete_book_rejects_empty_id() {
        let err = client().build_delete_book("").unwrap_err();
        assert!(matches!(err, StoreError::EmptyBookId));
    }

    #[test]
    fn parse_list_books_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"book_id":"1","title":"Dune","borrower":"Amy","borrowed_date":"2024-01-01","returned_date":""}]"#
                .to_string(),
        };
        let books = client().parse_list_books(response).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert!(books[0].is_outstanding());
    }

    #[test]
    fn parse_list_books_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_books(response).unwrap_err();
        assert!(matches!(err, StoreError::Deserialization(_)));
    }

    #[test]
    fn parse_create_book_success_echoes_id() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"message":"Book created","book_id":"abc-123"}"#.to_string(),
        };
        let ack = client().parse_create_book(response).unwrap();
        assert_eq!(ack.message, "Book created");
        assert_eq!(ack.book_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn parse_create_book_rejection_carries_store_message() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"error":"Missing required field"}"#.to_string(),
        };
        let err = client().parse_create_book(response).unwrap_err();
        match err {
            StoreError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Missing required field");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn parse_update_book_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_update_book(response).unwrap_err();
        assert!(matches!(err, StoreError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_delete_book_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"message":"Book deleted"}"#.to_string(),
        };
        let ack = client().parse_delete_book(response).unwrap();
        assert_eq!(ack.message, "Book deleted");
        assert_eq!(ack.book_id, None);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BookStoreClient::new("http://localhost:3000/");
        let req = client.build_list_books();
        assert_eq!(req.path, "http://localhost:3000/books");
    }
}
