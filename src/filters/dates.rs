//! Latest-date lookup over a document collection.

use crate::content::{ContentError, Document};
use chrono::{DateTime, SecondsFormat, Utc};

/// Newest publication date of a non-empty collection.
pub fn latest<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
) -> Result<DateTime<Utc>, ContentError> {
    documents
        .into_iter()
        .map(|doc| doc.date)
        .max()
        .ok_or(ContentError::EmptyCollection)
}

/// Newest publication date as an ISO-8601 timestamp.
///
/// An empty collection is a caller error and is reported, not defaulted.
pub fn latest_date(documents: &[Document]) -> Result<String, ContentError> {
    latest(documents).map(format_timestamp)
}

/// `2024-05-01T10:00:00.000Z`
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
