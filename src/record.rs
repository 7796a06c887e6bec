//! Record grammar.
//!
//! Plain: `[<ts>]\n<body>\n`. Leveled: `[<ts>] [<LEVEL>] <body>\n`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::level::Level;

/// RFC3339 in UTC, whole seconds, `Z` suffix.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn format_plain(at: DateTime<Utc>, body: &str) -> String {
    format!("[{}]\n{}\n", timestamp(at), body)
}

pub fn format_leveled(at: DateTime<Utc>, level: Level, body: &str) -> String {
    format!("[{}] [{}] {}\n", timestamp(at), level, body)
}
