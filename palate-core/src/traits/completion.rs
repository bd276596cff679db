use crate::errors::CompletionError;

/// Opaque text-completion collaborator (the LLM call).
///
/// The core only manages what information the prompt carries; any failure
/// here means "no text produced" and recovery belongs to the caller.
pub trait CompletionClient: Send + Sync {
    fn complete(&self, prompt: &str, budget_hint: usize) -> Result<String, CompletionError>;
}
