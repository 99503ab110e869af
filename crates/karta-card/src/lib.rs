//! Character card document model.
//!
//! A character card is a JSON persona document for a conversational AI
//! agent. Two shapes circulate in the ecosystem:
//!
//! - the flat legacy object: `{"name": ..., "description": ..., ...}`
//! - the V2 envelope: `{"spec":"chara_card_v2","spec_version":"2.0","data":{...}}`
//!
//! [`CharacterCard::from_json`] accepts both; [`CharacterCard::to_v2_json`]
//! always emits the envelope form. The PNG codec in `karta-png` treats the
//! document as opaque text; this crate is where the schema lives.
//!
//! # Example
//!
//! ```
//! use karta_card::CharacterCard;
//!
//! let card = CharacterCard::from_json(r#"{"name":"Alice"}"#)?;
//! assert_eq!(card.name, "Alice");
//!
//! let json = card.to_v2_json()?;
//! assert!(json.contains("chara_card_v2"));
//! # Ok::<(), karta_card::Error>(())
//! ```

mod error;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// Spec identifier of the V2 envelope.
pub const SPEC_V2: &str = "chara_card_v2";

/// Spec version emitted in V2 envelopes.
pub const SPEC_VERSION_V2: &str = "2.0";

/// A character persona document.
///
/// Every field is defaulted so partial documents parse; unknown fields are
/// ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterCard {
    /// Display name of the character.
    pub name: String,
    /// Long-form description of the character.
    pub description: String,
    /// Personality summary.
    pub personality: String,
    /// Scenario framing the conversation.
    pub scenario: String,
    /// Opening message sent by the character.
    pub first_mes: String,
    /// Example dialogue.
    pub mes_example: String,
    /// Notes from the card's creator, not shown to the model.
    pub creator_notes: String,
    /// System prompt override.
    pub system_prompt: String,
    /// Instructions injected after the chat history.
    pub post_history_instructions: String,
    /// Alternative opening messages.
    pub alternate_greetings: Vec<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Card author.
    pub creator: String,
    /// Author-assigned version string.
    pub character_version: String,
}

/// The V2 envelope wrapping a [`CharacterCard`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CardEnvelope {
    spec: String,
    spec_version: String,
    data: CharacterCard,
}

/// Just enough of a document to sniff which shape it is.
#[derive(Debug, Deserialize)]
struct SpecProbe {
    spec: Option<String>,
}

impl CharacterCard {
    /// Create an empty card with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a card from JSON text, accepting both the flat legacy shape
    /// and the V2 envelope.
    pub fn from_json(json_text: &str) -> Result<Self> {
        let probe: SpecProbe = serde_json::from_str(json_text)?;

        match probe.spec.as_deref() {
            None => Ok(serde_json::from_str(json_text)?),
            Some(SPEC_V2) => {
                let envelope: CardEnvelope = serde_json::from_str(json_text)?;
                Ok(envelope.data)
            }
            Some(other) => Err(Error::UnsupportedSpec(other.to_string())),
        }
    }

    /// Serialize as a V2 envelope.
    pub fn to_v2_json(&self) -> Result<String> {
        let envelope = CardEnvelope {
            spec: SPEC_V2.to_string(),
            spec_version: SPEC_VERSION_V2.to_string(),
            data: self.clone(),
        };
        Ok(serde_json::to_string(&envelope)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_legacy() {
        let card = CharacterCard::from_json(
            r#"{"name":"Alice","personality":"curious","tags":["demo"]}"#,
        )
        .unwrap();

        assert_eq!(card.name, "Alice");
        assert_eq!(card.personality, "curious");
        assert_eq!(card.tags, vec!["demo"]);
        assert!(card.description.is_empty());
    }

    #[test]
    fn test_parse_v2_envelope() {
        let json = r#"{
            "spec": "chara_card_v2",
            "spec_version": "2.0",
            "data": { "name": "Bob", "creator": "someone" }
        }"#;

        let card = CharacterCard::from_json(json).unwrap();
        assert_eq!(card.name, "Bob");
        assert_eq!(card.creator, "someone");
    }

    #[test]
    fn test_unsupported_spec() {
        let json = r#"{"spec":"chara_card_v9","data":{}}"#;
        assert!(matches!(
            CharacterCard::from_json(json),
            Err(Error::UnsupportedSpec(_))
        ));
    }

    #[test]
    fn test_v2_round_trip() {
        let mut card = CharacterCard::new("Alice");
        card.alternate_greetings = vec!["hi".to_string(), "hey".to_string()];

        let json = card.to_v2_json().unwrap();
        let parsed = CharacterCard::from_json(&json).unwrap();
        assert_eq!(parsed, card);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            CharacterCard::from_json("{not json"),
            Err(Error::Json(_))
        ));
    }
}
