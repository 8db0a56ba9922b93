// Shared recipe fixtures for unit and e2e tests.

use crate::modules::recipes::core::aroma_tags::AromaTags;
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::recipe::{EspressoParams, FilterParams, Recipe};
use crate::modules::recipes::core::record::RecipeRecord;
use crate::modules::recipes::core::taste_profile::TasteProfile;
use crate::shared::core::primitives::RecipeId;

pub fn recipe_record_fixture() -> RecipeRecord {
    serde_json::from_str(include_str!("json/recipe_record.json")).unwrap()
}

pub fn espresso_fixture() -> EspressoParams {
    EspressoParams {
        input_grams: 18.0,
        output_grams: 36.0,
        brewing_time: 28,
        grind_size: 20.0,
        taste_rating: 4,
        flavor_complexity: 3,
        taste: TasteProfile {
            fragrance: 7,
            aroma: 6,
            flavor: 7,
            sweetness: 6,
            acidity: 4,
            body: 8,
            aftertaste: 5,
            balance: 6,
        },
        aroma_tags: ["cocoa", "caramel"].into_iter().collect(),
    }
}

pub fn filter_fixture() -> FilterParams {
    FilterParams {
        input_grams: 15.0,
        water_grams: 250.0,
        brewing_temperature: 94.0,
        blooming_time: 45,
        brewing_time: 180,
        grind_size: 24.0,
        taste_rating: 5,
        flavor_complexity: 4,
        taste: TasteProfile {
            fragrance: 8,
            aroma: 8,
            flavor: 7,
            sweetness: 5,
            acidity: 8,
            body: 4,
            aftertaste: 6,
            balance: 7,
        },
        aroma_tags: ["jasmine", "bergamot"].into_iter().collect(),
    }
}

/// Builds a valid espresso recipe named "Yirgacheffe"; setters override single fields.
pub struct RecipeBuilder {
    inner: Recipe,
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecipeBuilder {
    pub fn new() -> Self {
        Self {
            inner: Recipe {
                id: None,
                bean_name: "Yirgacheffe".to_string(),
                image: String::new(),
                is_archived: false,
                brew_count: 0,
                brew_method: BrewMethod::Espresso,
                espresso: espresso_fixture(),
                filter: FilterParams::default(),
            },
        }
    }

    pub fn id(mut self, v: RecipeId) -> Self {
        self.inner.id = Some(v);
        self
    }

    pub fn bean_name(mut self, v: impl Into<String>) -> Self {
        self.inner.bean_name = v.into();
        self
    }

    pub fn archived(mut self, v: bool) -> Self {
        self.inner.is_archived = v;
        self
    }

    pub fn brew_count(mut self, v: u32) -> Self {
        self.inner.brew_count = v;
        self
    }

    pub fn brew_method(mut self, v: BrewMethod) -> Self {
        self.inner.brew_method = v;
        self
    }

    pub fn espresso(mut self, v: EspressoParams) -> Self {
        self.inner.espresso = v;
        self
    }

    pub fn filter(mut self, v: FilterParams) -> Self {
        self.inner.filter = v;
        self
    }

    pub fn with_filter(self) -> Self {
        self.filter(filter_fixture())
    }

    pub fn espresso_tags(mut self, v: AromaTags) -> Self {
        self.inner.espresso.aroma_tags = v;
        self
    }

    pub fn build(self) -> Recipe {
        self.inner
    }
}

#[cfg(test)]
mod recipe_builder_tests {
    use super::*;
    use crate::modules::recipes::core::mapping::to_ui;
    use rstest::rstest;

    #[rstest]
    fn the_json_fixture_matches_the_builder_families() {
        let from_json = to_ui(&recipe_record_fixture());
        let built = RecipeBuilder::new().with_filter().build();
        assert_eq!(from_json.espresso, built.espresso);
        assert_eq!(from_json.filter, built.filter);
    }
}
