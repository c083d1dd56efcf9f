use serde::Deserialize;

/// One random page summary as served by the Wikipedia REST API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub extract: String,
    // some pages ship without a short description
    #[serde(default)]
    pub description: String,
}

impl Article {
    #[cfg(test)]
    pub fn new(
        title: impl Into<String>,
        extract: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            extract: extract.into(),
            description: description.into(),
        }
    }

    /// The text the board is built from: title, one space, extract.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title, self.extract)
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// lowercased and trimmed
    pub word: String,
    pub is_correct: bool,
}
