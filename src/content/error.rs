//! Content processing errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The renderer produced no content for the document.
    #[error("document `{input}` has no rendered content")]
    MissingContent { input: String },

    /// Latest date requested over zero documents.
    #[error("cannot find the latest date of an empty collection")]
    EmptyCollection,
}
