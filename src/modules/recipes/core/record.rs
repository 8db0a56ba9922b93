// Storage (wire) shape of a recipe: flat, snake_case, filter family prefixed with `filter_`.
//
// Absent fields deserialize to their defaults (0, empty string, false, espresso).
// An empty image is stored as no image, so the field never holds `Some("")`.

use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::shared::core::primitives::{Grams, RecipeId, Seconds};
use serde::{Deserialize, Deserializer, Serialize};

/// Maps an empty image reference to an absent one.
pub fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|i| !i.is_empty())
}

fn empty_image_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(normalize_image)
}

/// A recipe record minus its id: the body of POST and PUT.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecipeFields {
    pub bean_name: String,
    #[serde(deserialize_with = "empty_image_as_none")]
    pub image: Option<String>,
    pub is_archived: bool,
    pub brew_count: u32,
    pub brew_method: BrewMethod,

    pub input_grams: Grams,
    pub output_grams: Grams,
    pub brewing_time: Seconds,
    pub grind_size: f64,
    pub taste_rating: u8,
    pub flavor_complexity: u8,
    pub fragrance: u8,
    pub aroma: u8,
    pub flavor: u8,
    pub sweetness: u8,
    pub acidity: u8,
    pub body: u8,
    pub aftertaste: u8,
    pub balance: u8,
    pub aroma_tags: String,

    pub filter_input_grams: Grams,
    pub filter_water_grams: Grams,
    pub filter_brewing_temperature: f64,
    pub filter_blooming_time: Seconds,
    pub filter_brewing_time: Seconds,
    pub filter_grind_size: f64,
    pub filter_taste_rating: u8,
    pub filter_flavor_complexity: u8,
    pub filter_fragrance: u8,
    pub filter_aroma: u8,
    pub filter_flavor: u8,
    pub filter_sweetness: u8,
    pub filter_acidity: u8,
    pub filter_body: u8,
    pub filter_aftertaste: u8,
    pub filter_balance: u8,
    pub filter_aroma_tags: String,
}

impl RecipeFields {
    /// The fields as a store keeps them.
    pub fn normalized(mut self) -> Self {
        self.image = normalize_image(self.image);
        self
    }
}

/// A persisted recipe as returned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeRecord {
    pub id: RecipeId,
    #[serde(flatten)]
    pub fields: RecipeFields,
}

impl RecipeRecord {
    pub fn new(id: RecipeId, fields: RecipeFields) -> Self {
        Self { id, fields }
    }
}

#[cfg(test)]
mod recipe_record_tests {
    use super::*;
    use crate::tests::fixtures::recipes::recipe_record_fixture;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_every_absent_field() {
        let fields: RecipeFields = serde_json::from_str(r#"{"bean_name":"Kochere"}"#).unwrap();
        assert_eq!(fields.bean_name, "Kochere");
        assert_eq!(fields.image, None);
        assert!(!fields.is_archived);
        assert_eq!(fields.brew_method, BrewMethod::Espresso);
        assert_eq!(fields.filter_water_grams, 0.0);
        assert_eq!(fields.filter_aroma_tags, "");
    }

    #[rstest]
    #[case(r#"{"image":""}"#, None)]
    #[case(r#"{"image":null}"#, None)]
    #[case(r#"{"image":"beans/huila.png"}"#, Some("beans/huila.png"))]
    fn it_should_read_an_empty_image_as_absent(#[case] json: &str, #[case] expected: Option<&str>) {
        let fields: RecipeFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.image.as_deref(), expected);
    }

    #[rstest]
    fn it_should_normalize_a_constructed_empty_image() {
        let fields = RecipeFields {
            image: Some(String::new()),
            ..RecipeFields::default()
        };
        assert_eq!(fields.normalized().image, None);
    }

    #[rstest]
    fn it_should_flatten_the_id_next_to_the_fields() {
        let record = recipe_record_fixture();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["bean_name"], "Yirgacheffe");
        assert_eq!(json["filter_aroma_tags"], "jasmine,bergamot");

        let parsed: RecipeRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }
}
