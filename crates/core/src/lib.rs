//! # Sympick Core
//!
//! Core selection logic for the symptom picker used by the disease
//! prediction form.
//!
//! This crate contains pure state operations and the submission encoding:
//! - Vocabulary of selectable symptom identifiers, fixed at construction
//! - Selection state (ordered tags + filter text) mutated only through
//!   [`SelectionController`] operations
//! - Wire encoding for the form's `symptoms` field and the model input vector
//!
//! **No view concerns**: rendering, markup, flash messages and form routing
//! belong to whatever view layer subscribes to the controller's change
//! notifications.

pub mod constants;
pub mod error;
pub mod selection;
pub mod vocabulary;
pub mod wire;

pub use error::{SelectionError, SelectionResult};
pub use selection::{FilterResult, SelectionChange, SelectionController};
pub use vocabulary::Vocabulary;

// Re-export the identifier newtype so callers depend on one crate.
pub use sympick_types::{IdentifierError, Symptom};
