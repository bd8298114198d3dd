use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Formula entity - a titled piece of free-text content, usually LaTeX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a formula. Identity and timestamps are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFormula {
    pub title: String,
    pub description: Option<String>,
    pub content: String,
}

/// A partial update. `None` leaves the field untouched; for `description`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormulaChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub content: Option<String>,
}

impl Formula {
    /// Build a formula from creation input with a fresh id and timestamps.
    pub fn new(input: NewFormula) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            content: input.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place.
    ///
    /// Returns `true` when at least one field was supplied, in which case
    /// `updated_at` has been restamped.
    pub fn apply(&mut self, changes: FormulaChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now().max(self.updated_at);
        true
    }
}

impl FormulaChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.content.is_none()
    }
}
