//! Request context for inventory operations.
//!
//! Every provider call and tool invocation carries a [`RequestContext`] so
//! that log lines and audit records can be tied back to a single request and,
//! when authentication is in play, to the human or agent behind it.

use crate::auth::AuthenticatedUser;
use uuid::Uuid;

/// Context information propagated through a single tool request.
///
/// Carries a request identifier for tracing plus the authenticated actor, if
/// any. Stock mutations record the actor's username in the audit trail;
/// anonymous requests are attributed to nobody.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
    /// Authenticated actor on whose behalf the request runs
    pub actor: Option<AuthenticatedUser>,
}

impl RequestContext {
    /// Create a context with an explicit request ID and no actor.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            actor: None,
        }
    }

    /// Create an anonymous context with a generated UUID request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            actor: None,
        }
    }

    /// Create a context acting on behalf of an authenticated user.
    pub fn authenticated(actor: AuthenticatedUser) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            actor: Some(actor),
        }
    }

    /// Username of the actor, if the request is authenticated.
    pub fn actor_name(&self) -> Option<&str> {
        self.actor.as_ref().map(|a| a.username.as_str())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}
