use serde::{Deserialize, Serialize};

/// Priority tier for a context fragment. Ordering is selection order:
/// `Critical` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Must never be omitted: allergies, disliked foods, unusable equipment.
    Critical,
    High,
    Medium,
    Low,
}

/// A labeled, sized, priority-tagged unit of contextual text considered for
/// prompt inclusion. Built fresh per request, discarded after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextFragment {
    /// Stable name reported back to the caller (e.g. "hard_constraints").
    pub name: String,
    /// Rendered text handed to the assembler.
    pub text: String,
    pub priority: Priority,
    pub estimated_tokens: usize,
}

impl ContextFragment {
    pub fn new(
        name: impl Into<String>,
        text: impl Into<String>,
        priority: Priority,
        estimated_tokens: usize,
    ) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            priority,
            estimated_tokens,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }
}
