use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occured whilst trying to access the database: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("The origin '{0}' is not allowed to access this resource")]
    OriginNotAllowed(String),
}

pub trait ErrorResponder {
    fn response(&self) -> (Status, Value);
}

impl ErrorResponder for Error {
    fn response(&self) -> (Status, Value) {
        match self {
            Error::DatabaseError(e) => (
                Status::InternalServerError,
                json!({ "error": "DB_ERROR", "detail": e.to_string() }),
            ),
            Error::OriginNotAllowed(_) => (
                Status::Forbidden,
                json!({ "error": "ORIGIN_NOT_ALLOWED" }),
            ),
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = self.response();
        json_response(status, &body)
    }
}

pub fn json_response(status: Status, body: &Value) -> response::Result<'static> {
    let body = body.to_string();
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
