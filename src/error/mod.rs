//! Error types returned throughout the application.
//!
//! The aggregate [`Error`] wraps the domain-specific errors and classifies
//! database failures, so handlers can return a single type and still map each
//! failure to the right status code.

pub mod checkout;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

use crate::{
    error::{checkout::CheckoutError, config::ConfigError},
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    CheckoutError(#[from] CheckoutError),
    #[error("Record not found")]
    NotFound,
    #[error("Conflicts with an existing record: {0}")]
    Conflict(String),
    #[error("Failed to parse value: {0}")]
    ParseError(String),
    #[error(transparent)]
    DbErr(DbErr),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(constraint)) => Error::Conflict(constraint),
            Some(SqlErr::ForeignKeyConstraintViolation(constraint)) => Error::Conflict(constraint),
            _ => match err {
                DbErr::RecordNotFound(_) => Error::NotFound,
                err => Error::DbErr(err),
            },
        }
    }
}

impl From<TransactionError<Error>> for Error {
    fn from(err: TransactionError<Error>) -> Self {
        match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ConfigError(err) => err.into_response(),
            Error::CheckoutError(err) => err.into_response(),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Error::Conflict(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Conflicts with an existing record".to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Responds with a 500 while logging the underlying error, which is never
/// shown to the client.
pub struct InternalServerError<E>(pub E);

impl<E> IntoResponse for InternalServerError<E>
where
    E: std::fmt::Display,
{
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
