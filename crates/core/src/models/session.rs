use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user session, persisted as one JSON blob.
///
/// There is no authentication server — any email with a 6+ character
/// password signs in. The session exists so protected views have something
/// to guard on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: Uuid,

    /// Email the user signed in with
    pub email: String,

    /// Display name (local part of the email unless registered with a name)
    pub display_name: String,

    /// Generated avatar URL, seeded by email
    pub avatar_url: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,
}
