// In-memory (UI) shape of a recipe.
//
// The espresso and filter configurations are two independent field families on
// the same record; a recipe may carry either, both, or (only as a draft) neither.

use crate::modules::recipes::core::aroma_tags::AromaTags;
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::taste_profile::TasteProfile;
use crate::shared::core::primitives::{Grams, RecipeId, Seconds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// `None` until the store has accepted the recipe.
    pub id: Option<RecipeId>,
    pub bean_name: String,
    pub image: String,
    pub is_archived: bool,
    pub brew_count: u32,
    pub brew_method: BrewMethod,
    pub espresso: EspressoParams,
    pub filter: FilterParams,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EspressoParams {
    pub input_grams: Grams,
    pub output_grams: Grams,
    pub brewing_time: Seconds,
    pub grind_size: f64,
    pub taste_rating: u8,
    pub flavor_complexity: u8,
    pub taste: TasteProfile,
    pub aroma_tags: AromaTags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub input_grams: Grams,
    pub water_grams: Grams,
    pub brewing_temperature: f64,
    pub blooming_time: Seconds,
    pub brewing_time: Seconds,
    pub grind_size: f64,
    pub taste_rating: u8,
    pub flavor_complexity: u8,
    pub taste: TasteProfile,
    pub aroma_tags: AromaTags,
}

impl EspressoParams {
    /// Dose and target yield are both set.
    pub fn is_present(&self) -> bool {
        self.input_grams > 0.0 && self.output_grams > 0.0
    }
}

impl FilterParams {
    /// Dose and water are both set.
    pub fn is_present(&self) -> bool {
        self.input_grams > 0.0 && self.water_grams > 0.0
    }
}

impl Recipe {
    pub fn has_method(&self, method: BrewMethod) -> bool {
        match method {
            BrewMethod::Espresso => self.espresso.is_present(),
            BrewMethod::Filter => self.filter.is_present(),
        }
    }

    /// Ratings of the given family as `(taste_rating, flavor_complexity)`.
    pub fn ratings(&self, method: BrewMethod) -> (u8, u8) {
        match method {
            BrewMethod::Espresso => (self.espresso.taste_rating, self.espresso.flavor_complexity),
            BrewMethod::Filter => (self.filter.taste_rating, self.filter.flavor_complexity),
        }
    }

    /// Writes a taste profile and tag set into the family of `method`, leaving the other untouched.
    pub fn with_tasting(&self, method: BrewMethod, taste: TasteProfile, tags: AromaTags) -> Recipe {
        let mut updated = self.clone();
        match method {
            BrewMethod::Espresso => {
                updated.espresso.taste = taste;
                updated.espresso.aroma_tags = tags;
            }
            BrewMethod::Filter => {
                updated.filter.taste = taste;
                updated.filter.aroma_tags = tags;
            }
        }
        updated
    }
}
