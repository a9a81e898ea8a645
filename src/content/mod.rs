//! Post-processing of rendered documents.
//!
//! Everything here works on HTML the upstream renderer already produced:
//!
//! | Item                | Output                                         |
//! |---------------------|------------------------------------------------|
//! | [`extract_excerpt`] | first 100 plain-text characters + `...`        |
//! | [`extract_image`]   | leading `<img>` re-emitted with `loading=lazy` |
//! | [`TipsRewriter`]    | tips pages with absolute links and assets      |
//!
//! Scraping is regex based. The image scrape matches only single-line
//! `<img src="…" alt="…"` with that exact attribute order. Excerpts strip
//! comments and tags but do not decode entities or drop `<script>` bodies.

mod document;
mod error;
mod excerpt;
mod image;
mod rewrite;

pub use document::{Document, MANIFEST_FILE, load_documents};
pub use error::ContentError;
pub use excerpt::extract_excerpt;
pub use image::extract_image;
pub use rewrite::TipsRewriter;
