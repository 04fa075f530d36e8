//! Submission encoding for the prediction form.
//!
//! The widget writes the selection into a single hidden form field
//! ([`crate::constants::SYMPTOMS_FIELD`]) as identifiers joined by commas;
//! the prediction backend splits that string back apart and turns it into a
//! positional indicator vector over the training vocabulary. Both directions
//! live here so they cannot drift.

use crate::constants::SEPARATOR;
use crate::vocabulary::Vocabulary;
use sympick_types::Symptom;

/// Joins a selection into the wire string, in selection order.
///
/// An empty selection yields an empty string.
pub fn join(selection: &[Symptom]) -> String {
    selection
        .iter()
        .map(Symptom::as_str)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Parses a submitted wire string back into a selection.
///
/// Pieces are split on the separator and trimmed; empty pieces are dropped.
/// A piece outside the vocabulary is skipped with a warning rather than
/// failing the whole submission, and a piece repeating an earlier one is
/// dropped, so the result always satisfies the selection invariants
/// (vocabulary subset, no duplicates, submission order preserved).
pub fn parse_submission(vocabulary: &Vocabulary, raw: &str) -> Vec<Symptom> {
    let mut selection: Vec<Symptom> = Vec::new();

    for piece in raw.split(SEPARATOR) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let Some(symptom) = vocabulary.find(piece) else {
            tracing::warn!(symptom = piece, "skipping unrecognised submitted symptom");
            continue;
        };
        if selection.iter().any(|s| s == symptom) {
            continue;
        }
        selection.push(symptom.clone());
    }

    selection
}

/// Builds the model input vector for a selection.
///
/// One `0`/`1` entry per vocabulary item, in vocabulary order; selection
/// order does not matter. Selection entries outside the vocabulary are
/// ignored, so the result length always equals the vocabulary length.
pub fn indicator_vector(vocabulary: &Vocabulary, selection: &[Symptom]) -> Vec<u8> {
    let mut vector = vec![0u8; vocabulary.len()];
    for symptom in selection {
        if let Some(position) = vocabulary.position(symptom.as_str()) {
            vector[position] = 1;
        }
    }
    vector
}
