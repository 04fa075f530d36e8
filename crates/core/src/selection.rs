//! Selection state for the filterable symptom multi-select.
//!
//! [`SelectionController`] owns the vocabulary, the ordered list of selected
//! symptoms and the current filter text. The view layer calls
//! [`SelectionController::set_filter_text`] on every keystroke and
//! `select`/`deselect` when the user picks or removes an item; it re-renders
//! tags from the read accessors after each change notification. The
//! controller knows nothing about how results are displayed.

use crate::error::{SelectionError, SelectionResult};
use crate::vocabulary::Vocabulary;
use crate::wire;
use serde::{Deserialize, Serialize};
use sympick_types::Symptom;

/// Derived dropdown contents for the current filter text.
///
/// `candidates` is the subsequence of the vocabulary, in vocabulary order,
/// matching the query case-insensitively and not already selected.
/// `visible` mirrors the dropdown's display state: a dropdown with nothing
/// to offer is hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterResult {
    /// Vocabulary items currently eligible for selection.
    pub candidates: Vec<Symptom>,

    /// Whether the dropdown should be shown at all.
    pub visible: bool,
}

/// A single mutation of the selection, delivered to change listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// A symptom was appended to the selection.
    Selected(Symptom),
    /// A symptom was removed from the selection.
    Deselected(Symptom),
    /// The whole selection (and filter text) was reset.
    Cleared,
}

type ChangeListener = Box<dyn FnMut(&SelectionChange)>;

/// Maintains the selection state and computes the views needed for rendering.
///
/// One controller exists per form instance. All mutation goes through its
/// operations; callers never touch the state directly. Every operation runs
/// to completion before the next call is accepted, so there is no partially
/// applied state to observe.
pub struct SelectionController {
    vocabulary: Vocabulary,
    selected: Vec<Symptom>,
    filter_text: String,
    listeners: Vec<ChangeListener>,
}

impl SelectionController {
    /// Creates a controller over the given vocabulary with nothing selected.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            selected: Vec::new(),
            filter_text: String::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener invoked after every successful mutation.
    ///
    /// Listeners replace inline per-element handlers: the view subscribes
    /// once and re-renders candidate and tag lists from the read accessors.
    pub fn on_change(&mut self, listener: impl FnMut(&SelectionChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: SelectionChange) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }

    /// Stores the filter text and computes the dropdown contents for it.
    ///
    /// The query is matched case-insensitively by substring containment
    /// against each vocabulary entry, in vocabulary order, skipping entries
    /// that are already selected. An empty query yields no candidates and a
    /// hidden dropdown. Never mutates the selection; any string is valid
    /// input.
    pub fn set_filter_text(&mut self, text: &str) -> FilterResult {
        self.filter_text = text.to_string();

        let normalised = text.to_lowercase();
        if normalised.is_empty() {
            return FilterResult {
                candidates: Vec::new(),
                visible: false,
            };
        }

        let candidates: Vec<Symptom> = self
            .vocabulary
            .iter()
            .enumerate()
            .filter(|(index, symptom)| {
                self.vocabulary.matches(*index, &normalised) && !self.is_selected(symptom.as_str())
            })
            .map(|(_, symptom)| symptom.clone())
            .collect();

        FilterResult {
            visible: !candidates.is_empty(),
            candidates,
        }
    }

    /// Appends `item` to the selection.
    ///
    /// Selecting closes the filter: the filter text is reset so the view
    /// hides the dropdown and empties the query field. Re-selecting an
    /// already-selected item is an idempotent no-op (the filter still
    /// resets, but no notification fires because nothing changed).
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownSymptom` if `item` is not a
    /// vocabulary member — a stale or tampered candidate. State is left
    /// unchanged.
    pub fn select(&mut self, item: &str) -> SelectionResult<()> {
        let Some(symptom) = self.vocabulary.find(item).cloned() else {
            tracing::warn!(symptom = item, "rejected selection of unknown symptom");
            return Err(SelectionError::UnknownSymptom(item.to_string()));
        };

        self.filter_text.clear();

        if self.is_selected(item) {
            return Ok(());
        }

        self.selected.push(symptom.clone());
        self.notify(SelectionChange::Selected(symptom));
        Ok(())
    }

    /// Removes `item` from the selection if present.
    ///
    /// Removing an absent item is a no-op; a notification fires only when
    /// the selection actually changed. Relative order of the remaining
    /// items is preserved.
    pub fn deselect(&mut self, item: &str) {
        if let Some(position) = self.selected.iter().position(|s| s.as_str() == item) {
            let removed = self.selected.remove(position);
            self.notify(SelectionChange::Deselected(removed));
        }
    }

    /// Empties the selection and the filter text.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.filter_text.clear();
        self.notify(SelectionChange::Cleared);
    }

    /// Serializes the selection for the form's hidden `symptoms` field.
    ///
    /// Identifiers are joined by a single comma in selection order; an empty
    /// selection serializes to an empty string.
    pub fn serialize(&self) -> String {
        wire::join(&self.selected)
    }

    /// Whether the analyze action should be enabled.
    ///
    /// This is the sole client-side gate: at least one symptom must be
    /// selected.
    pub fn can_submit(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The selected symptoms in selection order.
    pub fn selected(&self) -> &[Symptom] {
        &self.selected
    }

    /// The filter text as last stored (not lower-cased).
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Whether `item` is currently selected.
    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.iter().any(|s| s.as_str() == item)
    }

    /// The vocabulary this controller selects from.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl std::fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("vocabulary", &self.vocabulary)
            .field("selected", &self.selected)
            .field("filter_text", &self.filter_text)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
