// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid feedback payload: {0}")]
    Payload(#[from] JsonRejection),
}

impl ClientError {
    fn status(&self) -> StatusCode {
        match self {
            ClientError::Payload(rejection) => rejection.status(),
        }
    }
}

#[derive(Error, Debug)]
#[error("Internal server error")]
pub struct ServerError(#[from] anyhow::Error);

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Server(ServerError(err.into()))
    }
}

impl From<JsonRejection> for HandlerError {
    fn from(rejection: JsonRejection) -> Self {
        HandlerError::Client(rejection.into())
    }
}

impl axum::response::IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::Client(err) => {
                debug!("Client error: {err}");
                (err.status(), err.to_string()).into_response()
            }
            HandlerError::Server(ServerError(cause)) => {
                error!("Internal server error: {cause:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
