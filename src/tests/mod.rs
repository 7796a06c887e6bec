
use std::{fs, path::Path};

use chrono::{DateTime, Utc};

/// Split one plain record into its timestamp and body.
pub(crate) fn parse_plain(record: &str) -> (DateTime<Utc>, &str) {
    let rest = record.strip_prefix('[').unwrap();
    let (ts, rest) = rest.split_once("]\n").unwrap();
    let body = rest.strip_suffix('\n').unwrap();
    (parse_utc(ts), body)
}

/// Split one leveled record into timestamp, level tag and body.
pub(crate) fn parse_leveled(record: &str) -> (DateTime<Utc>, &str, &str) {
    let rest = record.strip_prefix('[').unwrap();
    let (ts, rest) = rest.split_once("] [").unwrap();
    let (level, rest) = rest.split_once("] ").unwrap();
    let body = rest.strip_suffix('\n').unwrap();
    (parse_utc(ts), level, body)
}

fn parse_utc(ts: &str) -> DateTime<Utc> {
    assert!(ts.ends_with('Z'), "timestamp `{}` is not in UTC", ts);
    DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc)
}

pub(crate) fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
