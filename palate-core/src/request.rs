use std::fmt;

use serde::{Deserialize, Serialize};

/// The classified intent of a free-text user request.
///
/// Classification is first-match in the order the variants are declared;
/// anything unmatched falls back to `RecipeSuggestion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    RecipeSuggestion,
    MealPlanning,
    ShoppingList,
    IngredientSubstitution,
    CookingHelp,
    DietaryAdvice,
}

impl RequestKind {
    /// Human-readable heading used by the context assembler.
    pub fn heading(self) -> &'static str {
        match self {
            RequestKind::RecipeSuggestion => "Recipe Suggestion",
            RequestKind::MealPlanning => "Meal Planning",
            RequestKind::ShoppingList => "Shopping List",
            RequestKind::IngredientSubstitution => "Ingredient Substitution",
            RequestKind::CookingHelp => "Cooking Help",
            RequestKind::DietaryAdvice => "Dietary Advice",
        }
    }
}

impl Default for RequestKind {
    fn default() -> Self {
        RequestKind::RecipeSuggestion
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}
