//! # Domain models for users and posts
//!
//! Defines the data structures exchanged with the backend. These types are
//! `Serialize + Deserialize` so the `api` crate can decode them straight from
//! response bodies, and `PartialEq` so the state machine can compare snapshots.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The authenticated identity: numeric `id` and `username`. |
//! | [`Post`] | One entry of the feed. `content` is optional, `created_at` stays the raw wire string. |
//!
//! ## Timestamps
//!
//! Backends disagree on how they print `created_at`: some send RFC 3339, some a
//! naive ISO-8601 string without offset, and Flask-style servers send an
//! HTTP-date (`"Sun, 18 Oct 2026 12:00:00 GMT"`). [`parse_timestamp`] accepts all
//! three; [`format_date`] renders the calendar date in a fixed `m/d/yyyy` layout.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The identity attached to the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// A post as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// Body text; absent or null when the author left it empty
    #[serde(default)]
    pub content: Option<String>,
    /// Author name; empty when the server returned the bare inserted row
    #[serde(default)]
    pub username: String,
    /// Creation time exactly as the server sent it
    pub created_at: String,
}

impl Post {
    /// Body text worth rendering, skipping absent or empty content.
    pub fn body(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    /// Parsed creation time, if the server used a format we understand.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse a server timestamp in RFC 3339, naive ISO-8601 (assumed UTC) or RFC 2822 form.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    // HTTP-dates end in "GMT", which chrono's RFC 2822 parser accepts.
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render the calendar date of `at` in the given timezone.
///
/// Always uses the fixed `month/day/year` layout (`10/18/2026`); only the
/// timezone follows the caller. The browser build formats through the
/// browser's locale instead and uses this only as a fallback.
pub fn format_date<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}

/// Display string for a post's creation date in local time, in the fixed
/// [`format_date`] layout.
///
/// Falls back to the raw wire value when it cannot be parsed.
pub fn display_date(post: &Post) -> String {
    match post.created() {
        Some(at) => format_date(&at, &chrono::Local),
        None => post.created_at.clone(),
    }
}
