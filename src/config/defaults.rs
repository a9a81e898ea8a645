//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn source() -> PathBuf {
        "src".into()
    }

    pub fn rendered() -> PathBuf {
        "_rendered".into()
    }

    pub fn output() -> PathBuf {
        "_site".into()
    }

    pub fn authors() -> PathBuf {
        "src/_data/authors.json".into()
    }

    pub fn passthrough() -> Vec<PathBuf> {
        [
            "src/assets",
            "src/sw.js",
            "src/manifest.json",
            "src/.well-known",
            "CNAME",
        ]
            .into_iter()
            .map(PathBuf::from)
            .collect()
    }

    pub mod tips {
        use std::path::PathBuf;

        pub fn scope() -> PathBuf {
            "src/tips/en".into()
        }

        pub fn locale() -> String {
            "en".into()
        }

        pub fn assets() -> String {
            "assets/img".into()
        }
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "feed.xml".into()
        }
    }
}

// ============================================================================
// [search] Section Defaults
// ============================================================================

pub mod search {
    pub fn env() -> String {
        "production".into()
    }

    pub fn command() -> Vec<String> {
        vec!["pagefind".into(), "--site".into()]
    }
}
