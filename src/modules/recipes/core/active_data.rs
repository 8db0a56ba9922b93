use crate::modules::recipes::core::aroma_tags::AromaTags;
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::recipe::Recipe;
use crate::modules::recipes::core::taste_profile::TasteProfile;
use crate::shared::core::primitives::{Grams, Seconds};

/// The method-specific view of a recipe used by a brewing session.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveBrewData {
    pub method: BrewMethod,
    pub input_grams: Grams,
    /// Espresso yield or filter water.
    pub target_grams: Grams,
    pub grind_size: f64,
    pub target_duration: Seconds,
    pub taste_rating: u8,
    pub flavor_complexity: u8,
    pub taste: TasteProfile,
    pub aroma_tags: AromaTags,
    /// Filter only.
    pub brewing_temperature: Option<f64>,
    /// Filter only.
    pub blooming_time: Option<Seconds>,
}

pub fn active_data(recipe: &Recipe, method: BrewMethod) -> ActiveBrewData {
    match method {
        BrewMethod::Espresso => {
            let e = &recipe.espresso;
            ActiveBrewData {
                method,
                input_grams: e.input_grams,
                target_grams: e.output_grams,
                grind_size: e.grind_size,
                target_duration: e.brewing_time,
                taste_rating: e.taste_rating,
                flavor_complexity: e.flavor_complexity,
                taste: e.taste,
                aroma_tags: e.aroma_tags.clone(),
                brewing_temperature: None,
                blooming_time: None,
            }
        }
        BrewMethod::Filter => {
            let f = &recipe.filter;
            ActiveBrewData {
                method,
                input_grams: f.input_grams,
                target_grams: f.water_grams,
                grind_size: f.grind_size,
                target_duration: f.brewing_time,
                taste_rating: f.taste_rating,
                flavor_complexity: f.flavor_complexity,
                taste: f.taste,
                aroma_tags: f.aroma_tags.clone(),
                brewing_temperature: Some(f.brewing_temperature),
                blooming_time: Some(f.blooming_time),
            }
        }
    }
}
