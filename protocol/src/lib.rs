//! Wire types for the user persistence boundary.
//!
//! The store speaks JSON with camelCase keys: `GET /api/users/:name` returns a
//! [`UserRecord`], `POST /api/users/:name` accepts one, and the backing file
//! is a [`UsersFile`]. The game core only depends on these shapes, never on a
//! concrete transport.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-user persisted record. Last write wins, no versioning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub total_score: u64,
}

impl UserRecord {
    pub const fn new(total_score: u64) -> Self {
        Self { total_score }
    }
}

/// On-disk layout of the user store file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersFile {
    #[serde(default)]
    pub users: BTreeMap<String, UserRecord>,
}

/// Error payload returned by the store on failed requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}
