//! Render model: what a surface should display, derived from app state.
//!
//! `render` is a pure function. Surfaces receive the resulting `View` and
//! decide how to draw it; nothing here knows about terminals or DOM.

use crate::types::TodoItem;

/// Label of the submit control when idle.
pub const ADD_LABEL: &str = "Add";
/// Label of the submit control while a create request is outstanding.
pub const ADDING_LABEL: &str = "Adding...";

/// Borrowed snapshot of everything the view depends on.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub items: &'a [TodoItem],
    pub error: Option<&'a str>,
    pub loading: bool,
    pub submitting: bool,
    pub draft: &'a str,
    pub focus_input: bool,
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    /// Item text exactly as stored. Surfaces must draw it as plain text.
    pub text: String,
    pub completed: bool,
}

impl Row {
    /// Completion state a click on the row's toggle asks for.
    pub fn toggle_target(&self) -> bool {
        !self.completed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Summary {
    pub fn from_items(items: &[TodoItem]) -> Self {
        let total = items.len();
        let completed = items.iter().filter(|item| item.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn total_label(&self) -> String {
        format!("Total: {}", self.total)
    }

    pub fn completed_label(&self) -> String {
        format!("Completed: {}", self.completed)
    }

    pub fn pending_label(&self) -> String {
        format!("Pending: {}", self.pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub draft: String,
    /// Set when the surface should move focus back to the input.
    pub focus: bool,
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<Row>,
    pub summary: Summary,
    /// True when the cache is empty; `rows` is then empty as well.
    pub empty: bool,
    pub error: Option<String>,
    pub loading: bool,
    pub submit: SubmitControl,
    pub input: InputField,
}

pub fn render(state: &ViewState<'_>) -> View {
    let rows = state
        .items
        .iter()
        .map(|item| Row {
            id: item.id.clone(),
            text: item.text.clone(),
            completed: item.completed,
        })
        .collect();

    View {
        rows,
        summary: Summary::from_items(state.items),
        empty: state.items.is_empty(),
        error: state.error.map(str::to_string),
        loading: state.loading,
        submit: SubmitControl {
            enabled: !state.submitting,
            label: if state.submitting { ADDING_LABEL } else { ADD_LABEL },
        },
        input: InputField {
            draft: state.draft.to_string(),
            focus: state.focus_input,
        },
    }
}
