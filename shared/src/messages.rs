//! Canned response text for the Kids Classic Books bot.

/// Spoken when the user opens the skill.
pub const GREETING: &str = "Welcome to Classic Books chatbot";

/// Re-prompt after an unheard greeting response.
pub const REPROMPT_GREETING: &str =
    "I'm sorry, I am not able to hear your request. Please repeat or say 'help' for sample requests";

/// Spoken in response to a help request.
pub const HELP: &str = "You can ask this skills, 'Get me description of The Jungle Book'";

/// Spoken when no book title or author could be extracted from the request.
pub const INVALID_REQUEST: &str = "I'm sorry. I was not able to retrieve book title or author \
     from your request. A sample request can be 'Tell me about Harry Potter from J.K. Rowlings'";

/// Spoken when the conversation ends.
pub const GOODBYE: &str = "Good Bye";

/// Generic re-prompt.
pub const REPROMPT: &str =
    "I'm sorry, I am not able to hear your request. Please repeat or say 'help' for sample requests";

/// Spoken when the book catalog could not be reached or understood.
pub const LOOKUP_FAILURE: &str =
    "I'm sorry, I was not able to reach the book catalog right now. Please try again later";

/// Display-card title for an unprocessable request.
pub const CARD_INVALID_REQUEST: &str = "Kids Classic Books, unable to process request";

/// Display-card title for a non-children book request.
pub const CARD_INELIGIBLE_REQUEST: &str = "Kids Classic Books, non-children book requested";

/// Spoken when the requested title is not a children's book.
pub fn ineligible_request(book: &str) -> String {
    format!("{book} is not a children book according to our data records.")
}
