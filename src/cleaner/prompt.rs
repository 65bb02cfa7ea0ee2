//! Prompt construction for the cleaning service.

/// Fixed system instruction sent with every cleaning request.
///
/// Asks the model for the cleaned transcript only; any commentary it adds
/// would end up verbatim in the saved artifact.
pub const SYSTEM_PROMPT: &str = "You are an expert at cleaning transcripts. \
You remove unnecessary junk, correct odd capitalization, retain proper nouns, \
and make sure that formatting is fine. Do not change the meaning of the \
content. Add breaks at appropriate breaks in the conversation. When given a \
transcript, simply provide the cleaned up transcript, with NO commentary or \
notes.";

/// Build the user message for one chunk.
pub fn user_message(chunk: &str) -> String {
    format!("Clean this transcript: {chunk}")
}
