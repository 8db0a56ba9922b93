// Form-level validation, run before a recipe reaches the store.

use crate::modules::recipes::core::recipe::Recipe;
use crate::modules::recipes::core::taste_profile::TasteProfile;
use crate::shared::core::primitives::MAX_RATING;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("bean name is required")]
    MissingName,

    #[error("either espresso dose and yield or filter dose and water must be positive")]
    NoCompleteMethod,

    #[error("{field} must be between 0 and 5, got {value}")]
    RatingOutOfRange { field: &'static str, value: u8 },

    #[error("{field} must be between 0 and 10, got {value}")]
    TasteOutOfRange { field: String, value: u8 },

    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
}

pub fn validate(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.bean_name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }

    let e = &recipe.espresso;
    let f = &recipe.filter;

    for (field, value) in [
        ("input grams", e.input_grams),
        ("output grams", e.output_grams),
        ("grind size", e.grind_size),
        ("filter input grams", f.input_grams),
        ("filter water grams", f.water_grams),
        ("filter brewing temperature", f.brewing_temperature),
        ("filter grind size", f.grind_size),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::Negative { field, value });
        }
    }

    if !e.is_present() && !f.is_present() {
        return Err(ValidationError::NoCompleteMethod);
    }

    for (field, value) in [
        ("taste rating", e.taste_rating),
        ("flavor complexity", e.flavor_complexity),
        ("filter taste rating", f.taste_rating),
        ("filter flavor complexity", f.flavor_complexity),
    ] {
        if value > MAX_RATING {
            return Err(ValidationError::RatingOutOfRange { field, value });
        }
    }

    check_taste("", &e.taste)?;
    check_taste("filter ", &f.taste)
}

fn check_taste(prefix: &str, taste: &TasteProfile) -> Result<(), ValidationError> {
    match taste.out_of_range() {
        Some((axis, value)) => Err(ValidationError::TasteOutOfRange {
            field: format!("{prefix}{}", axis.name()),
            value,
        }),
        None => Ok(()),
    }
}
