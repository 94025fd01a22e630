//! Lex V1 code-hook contract: inbound event types, outbound dialog actions,
//! and the response builders.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-opaque key/value state roundtripped by Lex across turns.
pub type SessionAttributes = HashMap<String, String>;

/// Slot values recognized for the current intent. Unfilled slots arrive as null.
pub type Slots = HashMap<String, Option<String>>;

/// Inbound Lex code-hook event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub bot: Bot,
    pub user_id: String,
    #[serde(default)]
    pub invocation_source: Option<InvocationSource>,
    pub current_intent: CurrentIntent,
    #[serde(default)]
    pub session_attributes: SessionAttributes,
}

/// Bot identification attached to every event.
#[derive(Debug, Clone, Deserialize)]
pub struct Bot {
    pub name: String,
    pub alias: Option<String>,
    pub version: Option<String>,
}

/// The intent Lex recognized for this turn.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
}

/// Which hook Lex is invoking. Carried on every event but not used for routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

/// Response returned to Lex for a turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// The instruction to Lex describing what to do next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: String,
        message: Message,
    },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
    Delegate { slots: Slots },
}

/// Terminal outcome of handling an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Message spoken or displayed to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: String,
    pub content: String,
}

impl Message {
    /// Plain-text message (the only content type this skill emits).
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: "PlainText".to_string(),
            content: content.into(),
        }
    }
}

/// Ask Lex to re-prompt the user for a specific slot.
pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: Slots,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

/// End the conversation with the given fulfillment state and message.
pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}

/// Hand control back to Lex's own slot-filling.
pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes,
        dialog_action: DialogAction::Delegate { slots },
    }
}
