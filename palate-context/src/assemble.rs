//! ContextAssembler: deterministic concatenation of the selected
//! fragments plus a trailing constraint summary for transparency.

use palate_core::ContextFragment;

use crate::classify::Classification;

/// Render the final context block handed to the completion collaborator.
///
/// Pure: fragment texts in selection order under a kind-specific heading,
/// then the constraint flags the classifier detected. An empty selection
/// still yields the heading and constraint summary.
pub fn assemble(selected: &[ContextFragment], classification: &Classification) -> String {
    let mut sections = vec![format!("# {} Context", classification.kind.heading())];

    for fragment in selected {
        if !fragment.text.trim().is_empty() {
            sections.push(fragment.text.clone());
        }
    }

    let mut detected = Vec::new();
    if classification.constraints.time_limited {
        detected.push("- time limited");
    }
    if classification.constraints.equipment_limited {
        detected.push("- equipment limited");
    }
    if classification.constraints.diet_focused {
        detected.push("- diet focused");
    }
    if detected.is_empty() {
        detected.push("- none");
    }
    sections.push(format!("## Detected constraints\n{}", detected.join("\n")));

    sections.join("\n\n")
}
