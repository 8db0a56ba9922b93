// Guided brew state machine.
//
// Purpose
// - Walk a recipe through prep -> brew -> finish -> (optional) rate.
//
// Responsibilities
// - Own the phase, the timer, the display toggle and the rating draft.
// - Derive the active data from (recipe, method) on every read, so a method
//   switch can never leave stale values behind.
//
// Boundaries
// - Pure. No clocks, no store, no platform capabilities: the controller owns those.

use crate::modules::brewing::core::phase::BrewPhase;
use crate::modules::brewing::core::timer::BrewTimer;
use crate::modules::recipes::core::active_data::{ActiveBrewData, active_data};
use crate::modules::recipes::core::aroma_tags::AromaTags;
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::recipe::Recipe;
use crate::modules::recipes::core::taste_profile::{TasteAxis, TasteProfile, TasteProfileError};
use crate::shared::core::primitives::MAX_RATING;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} during {phase}")]
    NotAllowed {
        action: &'static str,
        phase: BrewPhase,
    },

    #[error(transparent)]
    Taste(#[from] TasteProfileError),

    #[error("{field} must be between 0 and 5, got {value}")]
    RatingOutOfRange { field: &'static str, value: u8 },
}

/// What the brew screen shows in its main panel.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Targets,
    Timer,
}

/// Working copy edited in the rating phase. Written back only on save.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingDraft {
    pub taste: TasteProfile,
    pub aroma_tags: AromaTags,
    pub taste_rating: u8,
    pub flavor_complexity: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrewingSession {
    recipe: Recipe,
    method: BrewMethod,
    phase: BrewPhase,
    timer: BrewTimer,
    display: DisplayMode,
    draft: Option<RatingDraft>,
}

impl BrewingSession {
    pub fn new(recipe: Recipe, method_override: Option<BrewMethod>) -> Self {
        let method = BrewMethod::effective(method_override, recipe.brew_method);
        Self {
            recipe,
            method,
            phase: BrewPhase::Prep,
            timer: BrewTimer::new(),
            display: DisplayMode::Targets,
            draft: None,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn method(&self) -> BrewMethod {
        self.method
    }

    pub fn phase(&self) -> BrewPhase {
        self.phase
    }

    pub fn timer(&self) -> BrewTimer {
        self.timer
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    pub fn draft(&self) -> Option<&RatingDraft> {
        self.draft.as_ref()
    }

    pub fn active_data(&self) -> ActiveBrewData {
        active_data(&self.recipe, self.method)
    }

    /// Timer progress against the active target duration.
    pub fn progress(&self) -> f64 {
        self.timer.progress(self.active_data().target_duration)
    }

    fn require(&self, phase: BrewPhase, action: &'static str) -> Result<(), TransitionError> {
        if self.phase != phase {
            return Err(TransitionError::NotAllowed {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    pub fn switch_method(&mut self, method: BrewMethod) -> Result<(), TransitionError> {
        self.require(BrewPhase::Prep, "switch method")?;
        self.method = method;
        Ok(())
    }

    /// prep -> brew. The timer is left alone; it has its own toggle.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        self.require(BrewPhase::Prep, "start brewing")?;
        self.phase = BrewPhase::Brew;
        Ok(())
    }

    /// brew -> finish. Stops the timer, keeps the elapsed time.
    pub fn finish(&mut self) -> Result<(), TransitionError> {
        self.require(BrewPhase::Brew, "finish brewing")?;
        self.timer.stop();
        self.phase = BrewPhase::Finish;
        Ok(())
    }

    /// finish -> rate, seeding the draft from the active family.
    pub fn begin_rating(&mut self) -> Result<(), TransitionError> {
        self.require(BrewPhase::Finish, "rate")?;
        let data = self.active_data();
        self.draft = Some(RatingDraft {
            taste: data.taste,
            aroma_tags: data.aroma_tags,
            taste_rating: data.taste_rating,
            flavor_complexity: data.flavor_complexity,
        });
        self.phase = BrewPhase::Rate;
        Ok(())
    }

    /// Throws the rating working copy away without touching the recipe.
    pub fn discard_draft(&mut self) -> Option<RatingDraft> {
        self.draft.take()
    }

    pub fn tick(&mut self) -> bool {
        self.timer.tick()
    }

    pub fn toggle_timer(&mut self) -> Result<bool, TransitionError> {
        self.require(BrewPhase::Brew, "toggle the timer")?;
        Ok(self.timer.toggle())
    }

    pub fn reset_timer(&mut self) -> Result<(), TransitionError> {
        self.require(BrewPhase::Brew, "reset the timer")?;
        self.timer.reset();
        Ok(())
    }

    pub fn toggle_display(&mut self) -> DisplayMode {
        self.display = match self.display {
            DisplayMode::Targets => DisplayMode::Timer,
            DisplayMode::Timer => DisplayMode::Targets,
        };
        self.display
    }

    fn draft_mut(&mut self, action: &'static str) -> Result<&mut RatingDraft, TransitionError> {
        let phase = self.phase;
        self.draft
            .as_mut()
            .filter(|_| phase == BrewPhase::Rate)
            .ok_or(TransitionError::NotAllowed { action, phase })
    }

    pub fn set_taste(&mut self, axis: TasteAxis, value: u8) -> Result<(), TransitionError> {
        self.draft_mut("edit the taste profile")?
            .taste
            .set(axis, value)?;
        Ok(())
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) -> Result<bool, TransitionError> {
        Ok(self.draft_mut("edit aroma tags")?.aroma_tags.add(tag))
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<bool, TransitionError> {
        Ok(self.draft_mut("edit aroma tags")?.aroma_tags.remove(tag))
    }

    pub fn set_ratings(
        &mut self,
        taste_rating: u8,
        flavor_complexity: u8,
    ) -> Result<(), TransitionError> {
        for (field, value) in [
            ("taste rating", taste_rating),
            ("flavor complexity", flavor_complexity),
        ] {
            if value > MAX_RATING {
                return Err(TransitionError::RatingOutOfRange { field, value });
            }
        }
        let draft = self.draft_mut("rate")?;
        draft.taste_rating = taste_rating;
        draft.flavor_complexity = flavor_complexity;
        Ok(())
    }

    /// The full recipe with the draft merged into the active family.
    /// Every other field, including the other family, is unchanged.
    pub fn rated_recipe(&self) -> Result<Recipe, TransitionError> {
        self.require(BrewPhase::Rate, "save a rating")?;
        let draft = self.draft.as_ref().ok_or(TransitionError::NotAllowed {
            action: "save a rating",
            phase: self.phase,
        })?;
        let mut rated =
            self.recipe
                .with_tasting(self.method, draft.taste, draft.aroma_tags.clone());
        match self.method {
            BrewMethod::Espresso => {
                rated.espresso.taste_rating = draft.taste_rating;
                rated.espresso.flavor_complexity = draft.flavor_complexity;
            }
            BrewMethod::Filter => {
                rated.filter.taste_rating = draft.taste_rating;
                rated.filter.flavor_complexity = draft.flavor_complexity;
            }
        }
        Ok(rated)
    }
}
