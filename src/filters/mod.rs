//! Template filters: author links, tag partitioning, latest date.

mod authors;
mod dates;
mod tags;

pub use authors::{AuthorRegistry, Authors, format_authors};
pub use dates::{format_timestamp, latest, latest_date};
pub use tags::partition_tags;
