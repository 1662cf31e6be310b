//! Authenticated session context for the dashboard client.
//!
//! The session is established once at sign-in (or restored from persisted
//! client storage) and injected into the collaborators that need the bearer
//! token or the current user's role. Collaborators read it through a single
//! typed accessor instead of re-parsing ambient storage, and the signed-out
//! case is an explicit variant rather than an absent key.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;


/// Errors raised while establishing or restoring a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The bearer token is empty after trimming.
    #[error("bearer token must not be empty")]
    EmptyToken,

    /// The persisted user record could not be parsed.
    #[error("invalid persisted user record: {0}")]
    InvalidUserRecord(#[from] serde_json::Error),
}

/// Bearer token presented to the remote store on every request.
///
/// Token material is withheld from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a validated bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, SessionError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(raw))
    }

    /// Returns the token as `str` for request authentication.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Role granted to the authenticated user by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Administrative role with full directory visibility.
    Admin,
    /// Regular member role.
    User,
}

impl Role {
    /// Returns whether this is the administrative role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The authenticated user as recorded at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    id: String,
    name: String,
    role: Role,
}

impl SessionUser {
    /// Creates a session user record.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the granted role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}

/// An established authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: BearerToken,
    user: SessionUser,
}

impl Session {
    /// Creates a session from an already-validated token and user.
    #[must_use]
    pub const fn new(token: BearerToken, user: SessionUser) -> Self {
        Self { token, user }
    }

    /// Restores a session from persisted client storage.
    ///
    /// `user_record` is the JSON user document written at sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for a blank token and
    /// [`SessionError::InvalidUserRecord`] when the user document does not
    /// parse (including unknown role labels).
    pub fn from_persisted(token: impl Into<String>, user_record: &str) -> Result<Self, SessionError> {
        let bearer = BearerToken::new(token)?;
        let user = serde_json::from_str::<SessionUser>(user_record)?;
        Ok(Self {
            token: bearer,
            user,
        })
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn token(&self) -> &BearerToken {
        &self.token
    }

    /// Returns the authenticated user.
    #[must_use]
    pub const fn user(&self) -> &SessionUser {
        &self.user
    }
}

/// Process-wide authentication state with an explicit signed-out variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionContext {
    /// No user is signed in.
    #[default]
    NoSession,
    /// An authenticated session is active.
    Active(Session),
}

impl SessionContext {
    /// Returns the active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::NoSession => None,
        }
    }

    /// Returns whether a session is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

impl From<Session> for SessionContext {
    fn from(session: Session) -> Self {
        Self::Active(session)
    }
}
