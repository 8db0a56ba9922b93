use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::recipe::Recipe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Espresso,
    Filter,
}

/// Predicate behind the recipe list: search, archive toggle, category and rating thresholds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFilter {
    pub query: String,
    pub show_archived: bool,
    pub category: Category,
    pub min_taste_rating: u8,
    pub min_flavor_complexity: u8,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_name(recipe)
            && recipe.is_archived == self.show_archived
            && self.matches_category(recipe)
    }

    fn matches_name(&self, recipe: &Recipe) -> bool {
        let query = self.query.trim();
        query.is_empty()
            || recipe
                .bean_name
                .to_lowercase()
                .contains(&query.to_lowercase())
    }

    // `All` accepts a recipe when any present family clears both thresholds.
    fn matches_category(&self, recipe: &Recipe) -> bool {
        match self.category {
            Category::Espresso => self.family_qualifies(recipe, BrewMethod::Espresso),
            Category::Filter => self.family_qualifies(recipe, BrewMethod::Filter),
            Category::All => {
                if self.min_taste_rating == 0 && self.min_flavor_complexity == 0 {
                    return true;
                }
                BrewMethod::ALL
                    .into_iter()
                    .any(|method| self.family_qualifies(recipe, method))
            }
        }
    }

    fn family_qualifies(&self, recipe: &Recipe, method: BrewMethod) -> bool {
        if !recipe.has_method(method) {
            return false;
        }
        let (taste_rating, flavor_complexity) = recipe.ratings(method);
        taste_rating >= self.min_taste_rating && flavor_complexity >= self.min_flavor_complexity
    }
}
