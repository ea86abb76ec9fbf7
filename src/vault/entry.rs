//! A single stored secret and the helpers the presentation layer uses
//! to filter and order them.
//!
//! Entries are values: `Vault` hands out clones and takes whole entries
//! back.  Mutating a clone (`update`, `mark_as_viewed`) never touches the
//! vault until it is written back with `Vault::update_entry`.

use std::cmp::Reverse;
use std::fmt;

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use zeroize::Zeroize;

/// The editable fields of an entry.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EntryFields {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl fmt::Debug for EntryFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryFields")
            .field("title", &self.title)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Drop for EntryFields {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// One secret record.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Random UUID assigned at creation; never changes.
    pub id: String,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// `None` until the entry is read through the "get" path.
    #[serde(default, deserialize_with = "deserialize_view_time")]
    pub last_viewed_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Build a new entry with a fresh UUID and `created_at == updated_at == now`.
    pub fn new(fields: &EntryFields) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Build a new entry with a caller-chosen ID.
    pub fn with_id(id: impl Into<String>, fields: &EntryFields) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: fields.title.clone(),
            username: fields.username.clone(),
            password: fields.password.clone(),
            url: fields.url.clone(),
            notes: fields.notes.clone(),
            created_at: now,
            updated_at: now,
            last_viewed_at: None,
        }
    }

    /// Replace every editable field and advance `updated_at`.
    pub fn update(&mut self, fields: &EntryFields) {
        self.title = fields.title.clone();
        self.username = fields.username.clone();
        self.password.zeroize();
        self.password = fields.password.clone();
        self.url = fields.url.clone();
        self.notes = fields.notes.clone();
        self.updated_at = advance(self.updated_at);
    }

    /// Record that the entry was just read.
    pub fn mark_as_viewed(&mut self) {
        self.last_viewed_at = Some(Utc::now());
    }

    /// The current editable fields, e.g. as the starting point for an edit.
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            title: self.title.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            url: self.url.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Case-insensitive substring match on title, username, or URL.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        [&self.title, &self.username, &self.url]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("last_viewed_at", &self.last_viewed_at)
            .finish_non_exhaustive()
    }
}

impl Drop for Entry {
    fn drop(&mut self) {
        self.password.zeroize();
        self.notes.zeroize();
    }
}

/// How `list` orders entries for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Alphabetical by title, case-insensitive.
    #[default]
    Title,
    /// Newest first.
    Created,
    /// Most recently modified first.
    Updated,
    /// Most recently viewed first; never-viewed entries last.
    Viewed,
}

impl SortOrder {
    pub fn sort(self, entries: &mut [Entry]) {
        match self {
            Self::Title => {
                entries.sort_by_cached_key(|e| (e.title.to_lowercase(), e.id.clone()))
            }
            Self::Created => entries.sort_by_key(|e| Reverse(e.created_at)),
            Self::Updated => entries.sort_by_key(|e| Reverse(e.updated_at)),
            Self::Viewed => entries.sort_by_key(|e| Reverse(e.last_viewed_at)),
        }
    }
}

/// The next timestamp after `previous`: now, or one nanosecond later if
/// the clock has not moved past it.
pub(crate) fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}

/// Accept `null`, a missing field, or the year-1 zero instant as "never viewed".
fn deserialize_view_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateTime<Utc>>::deserialize(deserializer)?;
    Ok(value.filter(|t| t.year() > 1))
}
