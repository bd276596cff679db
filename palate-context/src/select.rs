//! BudgetedContextSelector: greedy knapsack by priority tier, then by
//! ascending size within a tier, with a hard floor for critical fragments.
//!
//! Critical constraints (allergies, disliked foods, unusable equipment)
//! must never be silently dropped; a budget that cannot hold them is an
//! error, and anything else gets evicted before a critical fragment does.

use tracing::{debug, warn};

use palate_core::errors::ContextError;
use palate_core::ContextFragment;

/// Select fragments under `budget` tokens.
///
/// Returns `BudgetTooSmall` when the critical fragments alone exceed the
/// budget. Otherwise the result always contains every critical fragment,
/// and the total estimated size never exceeds the budget.
pub fn select(
    fragments: Vec<ContextFragment>,
    budget: usize,
) -> Result<Vec<ContextFragment>, ContextError> {
    let critical_total: usize = fragments
        .iter()
        .filter(|f| f.is_critical())
        .map(|f| f.estimated_tokens)
        .sum();
    if critical_total > budget {
        warn!(budget, critical_total, "budget below critical floor");
        return Err(ContextError::BudgetTooSmall {
            budget,
            required: critical_total,
        });
    }

    // Tier first, smallest first within a tier.
    let mut ordered = fragments;
    ordered.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.estimated_tokens.cmp(&b.estimated_tokens))
    });

    let mut selected: Vec<ContextFragment> = Vec::new();
    let mut used = 0usize;
    for fragment in ordered {
        if used + fragment.estimated_tokens <= budget {
            used += fragment.estimated_tokens;
            selected.push(fragment);
            continue;
        }
        if fragment.is_critical() {
            // Evict non-critical fragments, most recently accepted first,
            // until the critical one fits. The floor check above
            // guarantees this terminates with room to spare.
            while used + fragment.estimated_tokens > budget {
                match selected.iter().rposition(|f| !f.is_critical()) {
                    Some(idx) => used -= selected.remove(idx).estimated_tokens,
                    None => break,
                }
            }
            used += fragment.estimated_tokens;
            selected.push(fragment);
        }
    }

    debug!(
        selected = selected.len(),
        used,
        budget,
        "context selection complete"
    );
    Ok(selected)
}
