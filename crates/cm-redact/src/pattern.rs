//! Secret-bearing line patterns.
//!
//! The recognized patterns form a closed set: a fixed list of key names for
//! `key: value` lines, plus two marker pairs for delimited connection
//! strings. Classification is case-insensitive substring containment,
//! evaluated in a fixed order with first match winning.

use serde::{Deserialize, Serialize};

/// Keys whose `key: value` line directly carries a secret.
pub const DIRECT_SECRET_KEYS: &[&str] = &[
    "ContainerRegistry-Password",
    "CosmosDB-Key",
    "ClientSecret",
];

/// Marker identifying a storage connection line.
pub const STORAGE_ACCOUNT_MARKER: &str = "StorageAccount";

/// Key prefix of the secret segment in a storage connection line.
pub const ACCOUNT_KEY_MARKER: &str = "AccountKey";

/// Marker identifying a connection-string line.
pub const CONNECTION_STRING_MARKER: &str = "ConnectionString";

/// Key prefix of the secret segment in a connection-string line.
pub const PASSWORD_MARKER: &str = "password";

/// Category of secret-bearing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `key: value` line where the key itself names a secret.
    DirectKeyValue,
    /// `;`-delimited storage line with an `AccountKey=` segment.
    StorageAccountKey,
    /// `,`-delimited connection line with a `password=` segment.
    ConnectionStringPassword,
}

impl PatternKind {
    /// Delimiter that splits the line into segments, for the kinds whose
    /// secret lives inside one segment.
    pub fn segment_delimiter(&self) -> Option<char> {
        match self {
            PatternKind::DirectKeyValue => None,
            PatternKind::StorageAccountKey => Some(';'),
            PatternKind::ConnectionStringPassword => Some(','),
        }
    }

    /// Key prefix that identifies the secret-carrying segment.
    pub fn key_prefix(&self) -> Option<&'static str> {
        match self {
            PatternKind::DirectKeyValue => None,
            PatternKind::StorageAccountKey => Some(ACCOUNT_KEY_MARKER),
            PatternKind::ConnectionStringPassword => Some(PASSWORD_MARKER),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PatternKind::DirectKeyValue => "direct_key_value",
            PatternKind::StorageAccountKey => "storage_account_key",
            PatternKind::ConnectionStringPassword => "connection_string_password",
        };
        write!(f, "{}", s)
    }
}

/// Classify a line against the known patterns.
///
/// Rules are tried in order; the first satisfied rule wins. A line that
/// satisfies none passes through unchanged downstream. Pure function of the
/// line text.
pub fn classify(line: &str) -> Option<PatternKind> {
    if DIRECT_SECRET_KEYS
        .iter()
        .any(|key| contains_ignore_case(line, key))
    {
        return Some(PatternKind::DirectKeyValue);
    }

    if contains_ignore_case(line, STORAGE_ACCOUNT_MARKER)
        && contains_ignore_case(line, ACCOUNT_KEY_MARKER)
    {
        return Some(PatternKind::StorageAccountKey);
    }

    if contains_ignore_case(line, CONNECTION_STRING_MARKER)
        && contains_ignore_case(line, PASSWORD_MARKER)
    {
        return Some(PatternKind::ConnectionStringPassword);
    }

    None
}

/// Case-insensitive substring containment.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
