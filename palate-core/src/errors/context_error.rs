/// Context-building errors.
///
/// Dropping safety-critical constraints silently would produce unsafe
/// output downstream, so a too-small budget is reported, never truncated.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("token budget {budget} cannot fit critical fragments ({required} tokens)")]
    BudgetTooSmall { budget: usize, required: usize },
}
