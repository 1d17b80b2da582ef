//! In-memory stand-in for the remote book store.
//!
//! One read path (`GET /books`) and one multiplexed write endpoint
//! (`POST /books`) that dispatches on the `operation` field in the JSON
//! body. Writes answer 200 with a `{"message": ...}` body, rejections
//! answer 400 with `{"error": ...}`. A required field supplied as the
//! empty string counts as missing. `returned_date` is stored as `""` when
//! absent, update applies exactly the fields present in the request and
//! upserts unknown ids, and delete is an idempotent no-op for ids the
//! store does not have.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub borrower: String,
    pub borrowed_date: String,
    #[serde(default)]
    pub returned_date: String,
}

pub type Db = Arc<RwLock<HashMap<String, Book>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/books", get(list_books).post(write_books))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    let books = db.read().await;
    Json(books.values().cloned().collect())
}

async fn write_books(
    State(db): State<Db>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    match field(&body, "operation") {
        None => error_response("Missing operation"),
        Some("create") => create_book(&db, &body).await,
        Some("update") => update_book(&db, &body).await,
        Some("delete") => delete_book(&db, &body).await,
        Some(_) => error_response("Invalid operation"),
    }
}

/// A string field that is present and non-empty; `""` counts as missing.
fn field<'a>(body: &'a Value, name: &str) -> Option<&'a str> {
    body.get(name).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn error_response(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

async fn create_book(db: &Db, body: &Value) -> (StatusCode, Json<Value>) {
    let (Some(title), Some(borrower), Some(borrowed_date)) = (
        field(body, "title"),
        field(body, "borrower"),
        field(body, "borrowed_date"),
    ) else {
        return error_response("Missing required field");
    };

    let book = Book {
        book_id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        borrower: borrower.to_string(),
        borrowed_date: borrowed_date.to_string(),
        returned_date: body
            .get("returned_date")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    };
    db.write().await.insert(book.book_id.clone(), book.clone());
    (
        StatusCode::OK,
        Json(json!({ "message": "Book created", "book_id": book.book_id })),
    )
}

async fn update_book(db: &Db, body: &Value) -> (StatusCode, Json<Value>) {
    let Some(book_id) = field(body, "book_id") else {
        return error_response("Missing required field");
    };
    if field(body, "title").is_none()
        && field(body, "borrower").is_none()
        && field(body, "borrowed_date").is_none()
    {
        return error_response("Missing required field");
    }

    let mut books = db.write().await;
    // Unknown ids are upserted, matching the original store's update_item.
    let book = books.entry(book_id.to_string()).or_insert_with(|| Book {
        book_id: book_id.to_string(),
        title: String::new(),
        borrower: String::new(),
        borrowed_date: String::new(),
        returned_date: String::new(),
    });
    // Fields present in the request are applied verbatim, empty included;
    // absent fields keep their stored value.
    if let Some(title) = body.get("title").and_then(Value::as_str) {
        book.title = title.to_string();
    }
    if let Some(borrower) = body.get("borrower").and_then(Value::as_str) {
        book.borrower = borrower.to_string();
    }
    if let Some(borrowed_date) = body.get("borrowed_date").and_then(Value::as_str) {
        book.borrowed_date = borrowed_date.to_string();
    }
    if let Some(returned_date) = body.get("returned_date").and_then(Value::as_str) {
        book.returned_date = returned_date.to_string();
    }

    (StatusCode::OK, Json(json!({ "message": "Book updated" })))
}

async fn delete_book(db: &Db, body: &Value) -> (StatusCode, Json<Value>) {
    let Some(book_id) = field(body, "book_id") else {
        return error_response("Missing required field");
    };
    db.write().await.remove(book_id);
    (StatusCode::OK, Json(json!({ "message": "Book deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_to_json() {
        let book = Book {
            book_id: "1".to_string(),
            title: "Dune".to_string(),
            borrower: "Amy".to_string(),
            borrowed_date: "2024-01-01".to_string(),
            returned_date: String::new(),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["book_id"], "1");
        assert_eq!(json["title"], "Dune");
        // Never-returned books keep an empty returned_date on the wire.
        assert_eq!(json["returned_date"], "");
    }

    #[test]
    fn book_roundtrips_through_json() {
        let book = Book {
            book_id: "abc".to_string(),
            title: "Emma".to_string(),
            borrower: "Joe".to_string(),
            borrowed_date: "2024-03-01".to_string(),
            returned_date: "2024-04-01".to_string(),
        };
        let json = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(back.book_id, book.book_id);
        assert_eq!(back.returned_date, book.returned_date);
    }

    #[test]
    fn book_defaults_missing_returned_date_to_empty() {
        let book: Book = serde_json::from_str(
            r#"{"book_id":"1","title":"Dune","borrower":"Amy","borrowed_date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(book.returned_date, "");
    }

    #[test]
    fn field_treats_empty_string_as_missing() {
        let body = json!({ "title": "", "borrower": "Amy" });
        assert_eq!(field(&body, "title"), None);
        assert_eq!(field(&body, "borrower"), Some("Amy"));
        assert_eq!(field(&body, "borrowed_date"), None);
    }
}
