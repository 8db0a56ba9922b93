// Bidirectional mapping between the storage record and the UI recipe.
//
// Every storage field maps to exactly one UI field. No validation happens here.

use crate::modules::recipes::core::aroma_tags::AromaTags;
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord};
use crate::modules::recipes::core::recipe::{EspressoParams, FilterParams, Recipe};
use crate::modules::recipes::core::taste_profile::TasteProfile;

pub fn to_ui(record: &RecipeRecord) -> Recipe {
    let f = &record.fields;
    Recipe {
        id: Some(record.id),
        bean_name: f.bean_name.clone(),
        image: f.image.clone().unwrap_or_default(),
        is_archived: f.is_archived,
        brew_count: f.brew_count,
        brew_method: f.brew_method,
        espresso: EspressoParams {
            input_grams: f.input_grams,
            output_grams: f.output_grams,
            brewing_time: f.brewing_time,
            grind_size: f.grind_size,
            taste_rating: f.taste_rating,
            flavor_complexity: f.flavor_complexity,
            taste: TasteProfile {
                fragrance: f.fragrance,
                aroma: f.aroma,
                flavor: f.flavor,
                sweetness: f.sweetness,
                acidity: f.acidity,
                body: f.body,
                aftertaste: f.aftertaste,
                balance: f.balance,
            },
            aroma_tags: AromaTags::from_storage(&f.aroma_tags),
        },
        filter: FilterParams {
            input_grams: f.filter_input_grams,
            water_grams: f.filter_water_grams,
            brewing_temperature: f.filter_brewing_temperature,
            blooming_time: f.filter_blooming_time,
            brewing_time: f.filter_brewing_time,
            grind_size: f.filter_grind_size,
            taste_rating: f.filter_taste_rating,
            flavor_complexity: f.filter_flavor_complexity,
            taste: TasteProfile {
                fragrance: f.filter_fragrance,
                aroma: f.filter_aroma,
                flavor: f.filter_flavor,
                sweetness: f.filter_sweetness,
                acidity: f.filter_acidity,
                body: f.filter_body,
                aftertaste: f.filter_aftertaste,
                balance: f.filter_balance,
            },
            aroma_tags: AromaTags::from_storage(&f.filter_aroma_tags),
        },
    }
}

/// Inverse of [`to_ui`]. The id is dropped: the store owns it.
/// An empty image maps back to an absent one, which is how the storage shape holds it.
pub fn to_storage(recipe: &Recipe) -> RecipeFields {
    let e = &recipe.espresso;
    let fl = &recipe.filter;
    RecipeFields {
        bean_name: recipe.bean_name.clone(),
        image: (!recipe.image.is_empty()).then(|| recipe.image.clone()),
        is_archived: recipe.is_archived,
        brew_count: recipe.brew_count,
        brew_method: recipe.brew_method,

        input_grams: e.input_grams,
        output_grams: e.output_grams,
        brewing_time: e.brewing_time,
        grind_size: e.grind_size,
        taste_rating: e.taste_rating,
        flavor_complexity: e.flavor_complexity,
        fragrance: e.taste.fragrance,
        aroma: e.taste.aroma,
        flavor: e.taste.flavor,
        sweetness: e.taste.sweetness,
        acidity: e.taste.acidity,
        body: e.taste.body,
        aftertaste: e.taste.aftertaste,
        balance: e.taste.balance,
        aroma_tags: e.aroma_tags.to_storage(),

        filter_input_grams: fl.input_grams,
        filter_water_grams: fl.water_grams,
        filter_brewing_temperature: fl.brewing_temperature,
        filter_blooming_time: fl.blooming_time,
        filter_brewing_time: fl.brewing_time,
        filter_grind_size: fl.grind_size,
        filter_taste_rating: fl.taste_rating,
        filter_flavor_complexity: fl.flavor_complexity,
        filter_fragrance: fl.taste.fragrance,
        filter_aroma: fl.taste.aroma,
        filter_flavor: fl.taste.flavor,
        filter_sweetness: fl.taste.sweetness,
        filter_acidity: fl.taste.acidity,
        filter_body: fl.taste.body,
        filter_aftertaste: fl.taste.aftertaste,
        filter_balance: fl.taste.balance,
        filter_aroma_tags: fl.aroma_tags.to_storage(),
    }
}
