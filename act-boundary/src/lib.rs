use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A signup-able event with a capacity and schedule.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Activity {
    pub description      : String,
    pub schedule         : String,
    pub max_participants : usize,
    pub participants     : Vec<String>,
}

/// The full activity collection, keyed by the unique activity name.
pub type Activities = BTreeMap<String, Activity>;

impl Activity {
    /// Remaining capacity as displayed to the user.
    ///
    /// Signed on purpose: the server is authoritative and a stale or
    /// inconsistent participant list may exceed `max_participants`.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }

    #[must_use]
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// 2xx response body of signup/unregister requests.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SuccessMessage {
    pub message: String,
}

/// Non-2xx response body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct Error {
    #[serde(default)]
    pub detail: String,
}
