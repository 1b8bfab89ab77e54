//! The single ideas record: improvement ideas and learning topics.
//!
//! Mutations are pure functions returning a new [`IdeasState`]; the previous
//! value stays valid and unchanged.

use super::entry::{remove_at, replace_at};
use serde::{Deserialize, Serialize};

/// Free-form notes kept independently of dated entries.
///
/// There is exactly one of these per journal. It starts empty and can be reset
/// to empty but is never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeasState {
    #[serde(default)]
    pub improvement_ideas: Vec<String>,
    #[serde(default)]
    pub learning_topics: Vec<String>,
}

/// Which of the two idea lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeasField {
    ImprovementIdeas,
    LearningTopics,
}

impl IdeasField {
    pub const ALL: [IdeasField; 2] = [IdeasField::ImprovementIdeas, IdeasField::LearningTopics];

    pub fn label(self) -> &'static str {
        match self {
            IdeasField::ImprovementIdeas => "Improvement Ideas",
            IdeasField::LearningTopics => "Learning Topics",
        }
    }
}

impl IdeasState {
    /// The empty state, used for first hydration and resets.
    pub fn reset() -> Self {
        IdeasState::default()
    }

    pub fn items(&self, field: IdeasField) -> &[String] {
        match field {
            IdeasField::ImprovementIdeas => &self.improvement_ideas,
            IdeasField::LearningTopics => &self.learning_topics,
        }
    }

    fn items_mut(&mut self, field: IdeasField) -> &mut Vec<String> {
        match field {
            IdeasField::ImprovementIdeas => &mut self.improvement_ideas,
            IdeasField::LearningTopics => &mut self.learning_topics,
        }
    }
}

/// Appends `value` to the `field` list. Empty strings are kept as-is.
///
/// # Examples
///
/// ```
/// use workjournal::journal_core::{add_item, IdeasField, IdeasState};
///
/// let before = IdeasState::default();
/// let after = add_item(&before, IdeasField::LearningTopics, "lifetimes");
///
/// assert!(before.learning_topics.is_empty());
/// assert_eq!(after.learning_topics, vec!["lifetimes".to_string()]);
/// ```
pub fn add_item(state: &IdeasState, field: IdeasField, value: impl Into<String>) -> IdeasState {
    let mut next = state.clone();
    next.items_mut(field).push(value.into());
    next
}

/// Replaces the element at `index`. An out-of-range index returns an unchanged copy.
pub fn update_item(
    state: &IdeasState,
    field: IdeasField,
    index: usize,
    value: impl Into<String>,
) -> IdeasState {
    let mut next = state.clone();
    replace_at(next.items_mut(field), index, value.into());
    next
}

/// Removes the element at `index`. An out-of-range index returns an unchanged copy.
pub fn remove_item(state: &IdeasState, field: IdeasField, index: usize) -> IdeasState {
    let mut next = state.clone();
    remove_at(next.items_mut(field), index);
    next
}
