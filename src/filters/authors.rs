//! Author registry and the author link formatter.

use crate::{config::ConfigError, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// Immutable map from author display name to profile URL.
///
/// Loaded once per build and passed by reference to whoever formats authors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AuthorRegistry {
    links: HashMap<String, String>,
}

impl AuthorRegistry {
    /// Load the registry from a JSON object of `name → URL`.
    ///
    /// A missing file gives an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log!("warn"; "author registry not found: {}", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(path.to_path_buf(), err).into()),
        };
        let registry: Self =
            serde_json::from_str(&raw).map_err(|err| ConfigError::Json(path.to_path_buf(), err))?;
        Ok(registry)
    }

    pub fn url(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AuthorRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            links: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Authors as given in front matter: a list, or one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    List(Vec<String>),
    Joined(String),
}

impl Authors {
    /// Individual names.
    ///
    /// List entries are taken verbatim. A joined string is split on `,` and
    /// each piece trimmed. Empty entries are kept in both cases.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::List(list) => list.iter().map(String::as_str).collect(),
            Self::Joined(joined) => joined.split(',').map(str::trim).collect(),
        }
    }
}

impl From<&str> for Authors {
    fn from(joined: &str) -> Self {
        Self::Joined(joined.to_owned())
    }
}

/// Link each registered author to their profile, join with `", "`.
pub fn format_authors(registry: &AuthorRegistry, authors: &Authors) -> String {
    authors
        .names()
        .into_iter()
        .map(|name| match registry.url(name) {
            Some(url) => format!(r#"<a href="{url}">{name}</a>"#),
            None => name.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
