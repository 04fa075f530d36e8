/// Errors that can occur when creating validated identifier types.
#[derive(Debug, thiserror::Error)]
pub enum IdentifierError {
    /// The input was empty or contained only whitespace
    #[error("Symptom identifier cannot be empty")]
    Empty,
}

/// A symptom identifier drawn from a prediction model's training vocabulary.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace
/// character. The input is automatically trimmed of leading and trailing whitespace
/// during construction. Interior whitespace is preserved: the training vocabulary
/// contains literals such as `"spotting_ urination"` that must round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symptom(String);

impl Symptom {
    /// Creates a new `Symptom` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(Symptom)` if the trimmed input is non-empty,
    /// or `Err(IdentifierError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, IdentifierError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the human-friendly form shown in dropdown rows and tags.
    ///
    /// Identifiers use underscores as word separators; the rendered label
    /// replaces each underscore with a space (`"skin_rash"` → `"skin rash"`).
    pub fn display_label(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Symptom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Symptom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Symptom::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_surrounding_whitespace() {
        let symptom = Symptom::new("  itching  ").expect("valid identifier");
        assert_eq!(symptom.as_str(), "itching");
    }

    #[test]
    fn new_rejects_empty_input() {
        let err = Symptom::new("   ").expect_err("expected validation failure");
        assert!(matches!(err, IdentifierError::Empty));
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let symptom = Symptom::new("spotting_ urination").expect("valid identifier");
        assert_eq!(symptom.as_str(), "spotting_ urination");
    }

    #[test]
    fn display_label_replaces_underscores() {
        let symptom = Symptom::new("cold_hands_and_feets").expect("valid identifier");
        assert_eq!(symptom.display_label(), "cold hands and feets");
    }

    #[test]
    fn serde_round_trip() {
        let symptom = Symptom::new("skin_rash").expect("valid identifier");
        let json = serde_json::to_string(&symptom).expect("serialize");
        assert_eq!(json, "\"skin_rash\"");
        let back: Symptom = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, symptom);
    }

    #[test]
    fn deserialize_rejects_blank_string() {
        let result: Result<Symptom, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
