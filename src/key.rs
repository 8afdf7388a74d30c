// SPDX-License-Identifier: MPL-2.0
//! Caller-assigned notice identity.

use std::fmt;

/// Opaque key identifying one live notice among its siblings.
///
/// The key is assigned by the caller and echoed back in
/// [`Event::Closed`](crate::notice::Event::Closed) so the surrounding
/// controller can address its own notice list. No uniqueness is enforced
/// here; duplicate keys are the caller's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum NoticeKey {
    /// Textual key.
    Text(String),
    /// Numeric key.
    Num(i64),
}

impl From<&str> for NoticeKey {
    fn from(key: &str) -> Self {
        Self::Text(key.to_owned())
    }
}

impl From<String> for NoticeKey {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<i64> for NoticeKey {
    fn from(key: i64) -> Self {
        Self::Num(key)
    }
}

impl From<u32> for NoticeKey {
    fn from(key: u32) -> Self {
        Self::Num(i64::from(key))
    }
}

impl fmt::Display for NoticeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeKey::Text(key) => f.write_str(key),
            NoticeKey::Num(key) => write!(f, "{key}"),
        }
    }
}
