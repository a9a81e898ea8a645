//! Topic/browser tag partitioning.

/// Namespace marking browser-compatibility tags, e.g. `browser:firefox`.
pub const BROWSER_TAG_PREFIX: &str = "browser:";

/// Tags outside the browser namespace.
pub fn topic_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    tags.iter()
        .map(AsRef::<str>::as_ref)
        .filter(|tag| !tag.starts_with(BROWSER_TAG_PREFIX))
        .collect()
}

/// Browser tags with the namespace stripped.
pub fn browser_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    tags.iter()
        .filter_map(|tag| AsRef::<str>::as_ref(tag).strip_prefix(BROWSER_TAG_PREFIX))
        .collect()
}

/// `(topic_tags, browser_tags)` in one call.
pub fn partition_tags<S: AsRef<str>>(tags: &[S]) -> (Vec<&str>, Vec<&str>) {
    (topic_tags(tags), browser_tags(tags))
}
