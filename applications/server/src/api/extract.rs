/// Typed JSON request bodies
use crate::error::ServerError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use deckhand_core::types::{CreateUser, UpdateGuide};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Request bodies that check themselves after decoding
pub trait Validate {
    fn validate(&self) -> deckhand_core::Result<()>;
}

impl Validate for CreateUser {
    fn validate(&self) -> deckhand_core::Result<()> {
        CreateUser::validate(self)
    }
}

impl Validate for UpdateGuide {
    fn validate(&self) -> deckhand_core::Result<()> {
        UpdateGuide::validate(self)
    }
}

/// JSON body decoded into `T`, keeping the document as received
///
/// Any failure (missing content type, malformed JSON, missing field, failed
/// validation) is rejected with `ServerError::Validation`.
#[derive(Debug)]
pub struct JsonPayload<T> {
    pub raw: Value,
    pub body: T,
}

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::Validation(rejection.body_text()))?;

        let body = T::deserialize(&raw)
            .map_err(|e| ServerError::Validation(format!("Invalid request body: {e}")))?;

        body.validate()?;

        Ok(Self { raw, body })
    }
}
