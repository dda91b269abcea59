//! Interpretation of raw completion text.
//!
//! The model is asked for `{"message": ..., "data": ...}` but is not
//! guaranteed to comply. Anything that does not parse into that shape is
//! treated as a plain-text reply: the whole raw string becomes the
//! message and there is no payload.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct StructuredReply {
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

pub fn interpret_completion(raw: &str) -> ChatReply {
    match serde_json::from_str::<StructuredReply>(raw) {
        Ok(parsed) => ChatReply {
            message: parsed.message,
            // an explicit null payload is the same as none
            data: parsed.data.filter(|d| !d.is_null()),
        },
        Err(_) => ChatReply {
            message: raw.to_string(),
            data: None,
        },
    }
}

/// What a structured payload claims to be. Field-presence probing, not
/// schema validation: `exercises` marks a workout, `meals` a meal plan,
/// and anything with neither is not actionable and is silently ignored
/// by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalKind {
    Workout,
    MealPlan,
}

pub fn classify_proposal(data: &Value) -> Option<ProposalKind> {
    let object = data.as_object()?;
    if object.contains_key("exercises") {
        Some(ProposalKind::Workout)
    } else if object.contains_key("meals") {
        Some(ProposalKind::MealPlan)
    } else {
        None
    }
}
