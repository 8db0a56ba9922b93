// Value aliases shared by the recipe and brewing contexts.

/// Store-assigned recipe identity. Immutable after creation.
pub type RecipeId = i64;

/// Mass in grams.
pub type Grams = f64;

/// Whole seconds, used for brew and blooming durations.
pub type Seconds = u32;

/// Highest value of a rating scalar (taste rating, flavor complexity).
pub const MAX_RATING: u8 = 5;

/// Highest value of a taste-profile axis.
pub const MAX_TASTE_VALUE: u8 = 10;
