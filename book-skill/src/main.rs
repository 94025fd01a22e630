//! Book Skill Lambda - Lex code hook for the Kids Classic Books bot.
//!
//! Routes each recognized intent either to a canned response or to the
//! Goodreads metadata lookup, and shapes the result into a Lex dialog action.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::dialog::{
    self, DialogResponse, FulfillmentState, LexEvent, Message, SessionAttributes, Slots,
};
use shared::goodreads::GoodreadsClient;
use shared::{messages, Config};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Session attribute carrying the pending book description between turns.
const DESCRIPTION_ATTR: &str = "description";

/// Application state shared across invocations.
struct AppState {
    config: Config,
    goodreads: GoodreadsClient,
}

impl AppState {
    fn new() -> Result<Self, Error> {
        let config = Config::from_env();
        let goodreads = GoodreadsClient::new(&config)?;

        Ok(Self { config, goodreads })
    }
}

fn close_fulfilled(
    session_attributes: SessionAttributes,
    content: impl Into<String>,
) -> DialogResponse {
    dialog::close(
        session_attributes,
        FulfillmentState::Fulfilled,
        Message::plain_text(content),
    )
}

/// Fulfill `GetBookDescription`: look the book up and answer with its summary
/// sentence, stashing the long description for the yes/no follow-up turn.
async fn get_book_description(
    state: &AppState,
    slots: Slots,
    mut session_attributes: SessionAttributes,
) -> DialogResponse {
    let author = slots.get("AuthorName").and_then(|slot| slot.clone());
    let book = slots.get("BookName").and_then(|slot| slot.clone());
    info!("Author: {:?}, Book: {:?}", author, book);

    let Some(book) = book else {
        return close_fulfilled(session_attributes, messages::INVALID_REQUEST);
    };

    match state.goodreads.fetch_book(&book, author.as_deref()).await {
        Ok(metadata) => {
            if let Some(description) = &metadata.description {
                session_attributes.insert(DESCRIPTION_ATTR.to_string(), description.clone());
            }
            close_fulfilled(session_attributes, metadata.speech_output())
        }
        Err(e) => {
            error!("Book lookup failed: {}", e);
            dialog::close(
                session_attributes,
                FulfillmentState::Failed,
                Message::plain_text(messages::LOOKUP_FAILURE),
            )
        }
    }
}

/// Route the incoming request based on intent.
async fn dispatch(state: &AppState, event: LexEvent) -> DialogResponse {
    info!(
        "dispatch userId={}, intentName={}",
        event.user_id, event.current_intent.name
    );

    let LexEvent {
        current_intent,
        session_attributes,
        ..
    } = event;

    match current_intent.name.as_str() {
        "GetBookDescription" => {
            get_book_description(state, current_intent.slots, session_attributes).await
        }
        "ByeIntent" => close_fulfilled(session_attributes, messages::GOODBYE),
        "HiIntent" => close_fulfilled(session_attributes, messages::GREETING),
        "HelpmeIntent" => close_fulfilled(session_attributes, messages::HELP),
        "YesDescriptionIntent" => match session_attributes.get(DESCRIPTION_ATTR).cloned() {
            Some(description) => close_fulfilled(session_attributes, description),
            None => close_fulfilled(session_attributes, messages::INVALID_REQUEST),
        },
        "NoDescriptionIntent" => close_fulfilled(session_attributes, messages::GOODBYE),
        _ => close_fulfilled(session_attributes, messages::INVALID_REQUEST),
    }
}

async fn handler(
    state: Arc<AppState>,
    event: LambdaEvent<LexEvent>,
) -> Result<DialogResponse, Error> {
    let (payload, _context) = event.into_parts();
    info!("event.bot.name={}", payload.bot.name);

    Ok(dispatch(&state, payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new()?);
    info!(
        "Treating user requests as coming from the {} time zone",
        state.config.timezone
    );

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::dialog::DialogAction;

    fn test_state() -> AppState {
        // port 1 is never listening, so lookups fail fast with a
        // connection error instead of touching the network
        let config = Config {
            goodreads_key: "test-key".to_string(),
            goodreads_endpoint: "http://127.0.0.1:1/book/title.xml".to_string(),
            timezone: "America/New_York".to_string(),
            request_timeout_secs: 1,
        };
        let goodreads = GoodreadsClient::new(&config).unwrap();
        AppState { config, goodreads }
    }

    fn event(intent: &str, slots: serde_json::Value, attrs: serde_json::Value) -> LexEvent {
        serde_json::from_value(json!({
            "bot": {"name": "KidsClassicBooks", "alias": "$LATEST", "version": "$LATEST"},
            "userId": "user-1",
            "invocationSource": "FulfillmentCodeHook",
            "currentIntent": {"name": intent, "slots": slots},
            "sessionAttributes": attrs,
        }))
        .unwrap()
    }

    fn close_content(response: &DialogResponse) -> (FulfillmentState, &str) {
        match &response.dialog_action {
            DialogAction::Close {
                fulfillment_state,
                message,
            } => (*fulfillment_state, message.content.as_str()),
            other => panic!("expected Close action, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_intent_returns_invalid_request() {
        let state = test_state();
        let response = dispatch(&state, event("OrderPizzaIntent", json!({}), json!({}))).await;

        let (fulfillment_state, content) = close_content(&response);
        assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
        assert_eq!(content, messages::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_greeting_help_and_goodbye_intents() {
        let state = test_state();

        for (intent, expected) in [
            ("HiIntent", messages::GREETING),
            ("HelpmeIntent", messages::HELP),
            ("ByeIntent", messages::GOODBYE),
        ] {
            let response = dispatch(&state, event(intent, json!({}), json!({}))).await;
            let (fulfillment_state, content) = close_content(&response);
            assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
            assert_eq!(content, expected);
        }
    }

    #[tokio::test]
    async fn test_yes_description_returns_stored_description() {
        let state = test_state();
        let response = dispatch(
            &state,
            event(
                "YesDescriptionIntent",
                json!({}),
                json!({"description": "A boy and a bear in the jungle."}),
            ),
        )
        .await;

        let (fulfillment_state, content) = close_content(&response);
        assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
        assert_eq!(content, "A boy and a bear in the jungle.");
    }

    #[tokio::test]
    async fn test_yes_description_without_stored_description() {
        let state = test_state();
        let response = dispatch(&state, event("YesDescriptionIntent", json!({}), json!({}))).await;

        let (_, content) = close_content(&response);
        assert_eq!(content, messages::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_no_description_always_says_goodbye() {
        let state = test_state();
        let response = dispatch(
            &state,
            event(
                "NoDescriptionIntent",
                json!({}),
                json!({"description": "Still pending."}),
            ),
        )
        .await;

        let (fulfillment_state, content) = close_content(&response);
        assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
        assert_eq!(content, messages::GOODBYE);
    }

    #[tokio::test]
    async fn test_session_attributes_roundtrip_unchanged() {
        let state = test_state();
        let response = dispatch(
            &state,
            event("ByeIntent", json!({}), json!({"favorite": "Heidi"})),
        )
        .await;

        assert_eq!(
            response.session_attributes.get("favorite"),
            Some(&"Heidi".to_string())
        );
        assert_eq!(response.session_attributes.len(), 1);
    }

    #[tokio::test]
    async fn test_get_book_description_without_book_slot() {
        let state = test_state();
        let response = dispatch(
            &state,
            event(
                "GetBookDescription",
                json!({"BookName": null, "AuthorName": "Mark Twain"}),
                json!({}),
            ),
        )
        .await;

        let (fulfillment_state, content) = close_content(&response);
        assert_eq!(fulfillment_state, FulfillmentState::Fulfilled);
        assert_eq!(content, messages::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_get_book_description_provider_failure() {
        let state = test_state();
        let response = dispatch(
            &state,
            event(
                "GetBookDescription",
                json!({"BookName": "Tom Sawyer", "AuthorName": "Mark Twain"}),
                json!({"favorite": "Heidi"}),
            ),
        )
        .await;

        let (fulfillment_state, content) = close_content(&response);
        assert_eq!(fulfillment_state, FulfillmentState::Failed);
        assert_eq!(content, messages::LOOKUP_FAILURE);
        // the turn still roundtrips the caller's attributes
        assert_eq!(
            response.session_attributes.get("favorite"),
            Some(&"Heidi".to_string())
        );
    }
}
