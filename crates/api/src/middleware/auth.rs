//! # Authentication Module
//!
//! Identity and authorization extractors. Authentication itself happens
//! upstream: the gateway in front of the API verifies the session and
//! forwards the caller's identity in headers. Handlers receive that identity
//! as an explicit [`Requester`] or [`Actor`] value.

use std::{convert::Infallible, sync::Arc};

use agenda_core::{
    errors::AgendaError,
    models::identity::{Actor, Requester},
};
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

/// Header carrying the authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the user's display name, if any
pub const USER_NAME_HEADER: &str = "x-user-name";
/// Header carrying the user's contact address
pub const USER_EMAIL_HEADER: &str = "x-user-email";

fn header(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads the requester identity from the forwarded headers.
///
/// Returns `None` when no user id is present.
pub fn requester_from_parts(parts: &Parts) -> Option<Requester> {
    let id = header(parts, USER_ID_HEADER)?;
    let contact = header(parts, USER_EMAIL_HEADER).unwrap_or_default();
    Some(Requester::new(id, header(parts, USER_NAME_HEADER), contact))
}

/// The caller's identity, or `None` for anonymous requests.
///
/// Never rejects; the scheduling core decides whether identity is required.
#[derive(Debug, Clone)]
pub struct CurrentRequester(pub Option<Requester>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentRequester
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentRequester(requester_from_parts(parts)))
    }
}

/// The caller of a staff operation, with the administrator claim resolved
/// through the role directory.
#[derive(Debug, Clone)]
pub struct StaffActor(pub Actor);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for StaffActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let id = header(parts, USER_ID_HEADER).ok_or(AgendaError::NotAuthenticated)?;
        let is_admin = state.roles.is_admin(&id).await?;
        debug!(user = %id, is_admin, "Resolved staff capability");
        Ok(StaffActor(Actor::new(id, is_admin)))
    }
}
