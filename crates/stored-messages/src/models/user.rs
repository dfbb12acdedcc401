//! User identity used to key per-user lists

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a user (the host's numeric primary key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(pk: i64) -> Self {
        Self(pk)
    }

    pub fn pk(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(pk: i64) -> Self {
        Self(pk)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
