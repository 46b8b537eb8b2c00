use serde::{Deserialize, Serialize};

/// One Loon rule set row: display name and the URL of its `.list`/`.conf` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub url: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Composite key used for deduplication.
    pub fn key(&self) -> String {
        format!("{}|{}", self.name, self.url)
    }
}
