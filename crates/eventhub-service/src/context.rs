//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Constructed by the surrounding session layer and passed into service
/// methods so that every operation knows *who* is acting. Operations that
/// can be attempted without a session (booking) take an
/// `Option<&RequestContext>` and reject `None` themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Display name (convenience field from the session).
    pub username: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: Option<String>) -> Self {
        Self {
            user_id,
            username,
            request_time: Utc::now(),
        }
    }
}
