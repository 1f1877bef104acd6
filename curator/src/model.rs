use serde::{Deserialize, Serialize};

/// One follower in the store. `username` is the identity key; imports skip
/// usernames that are already present, so the store never holds two records
/// for the same follower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerRecord {
    pub username: String,
    pub href: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl FollowerRecord {
    /// A freshly imported follower carries no annotations yet.
    pub fn new(username: impl Into<String>, href: Option<String>) -> Self {
        Self {
            username: username.into(),
            href,
            location: String::new(),
            tags: Vec::new(),
            notes: String::new(),
        }
    }

    /// Replaces all three annotation fields at once.
    pub fn annotate(&mut self, location: String, tags: Vec<String>, notes: String) {
        self.location = location;
        self.tags = tags;
        self.notes = notes;
    }

    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }
}
