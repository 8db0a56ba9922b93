// Runs one brewing session on top of the pure state machine.
//
// Responsibilities
// - Tick the timer once per second from a spawned task while it runs.
// - Hold the screen wake lock for the duration of the brew phase.
// - Fire haptic pulses on start, finish, timer toggle and reset.
// - Write the rating back to the store, once, on save.
//
// Boundaries
// - Teardown (ticker abort, wake lock release) runs on every exit path:
//   close, save, skip and drop.

use crate::modules::brewing::core::phase::BrewPhase;
use crate::modules::brewing::core::ports::{HapticPattern, Haptics, ScreenWakeLock};
use crate::modules::brewing::core::session::{
    BrewingSession, DisplayMode, RatingDraft, TransitionError,
};
use crate::modules::brewing::core::timer::format_clock;
use crate::modules::brewing::use_cases::run_brewing_session::wake_lock_guard::WakeLockGuard;
use crate::modules::recipes::adapters::outbound::recipe_repository::{
    RecipeRepository, RepositoryError,
};
use crate::modules::recipes::core::active_data::ActiveBrewData;
use crate::modules::recipes::core::aroma_tags::AromaTags;
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::mapping::{to_storage, to_ui};
use crate::modules::recipes::core::recipe::Recipe;
use crate::modules::recipes::core::taste_profile::TasteAxis;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("brewing session is closed")]
    Closed,

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("recipe has not been saved yet")]
    Unsaved,

    #[error("failed to save rating: {0}")]
    Store(#[from] RepositoryError),
}

/// Everything the brew screen renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub phase: BrewPhase,
    pub phase_progress: u8,
    pub method: BrewMethod,
    pub elapsed: u32,
    pub elapsed_clock: String,
    pub target_clock: String,
    pub running: bool,
    pub progress: f64,
    pub display: DisplayMode,
    pub draft: Option<RatingDraft>,
}

pub struct BrewingSessionController<TRepository>
where
    TRepository: RecipeRepository + ?Sized + 'static,
{
    id: Uuid,
    opened_at: DateTime<Utc>,
    session: Arc<Mutex<BrewingSession>>,
    repository: Arc<TRepository>,
    wake_lock: Arc<dyn ScreenWakeLock>,
    haptics: Arc<dyn Haptics>,
    wake_guard: Option<WakeLockGuard>,
    ticker: Option<JoinHandle<()>>,
    closed: bool,
}

impl<TRepository> BrewingSessionController<TRepository>
where
    TRepository: RecipeRepository + ?Sized + 'static,
{
    pub fn open(
        recipe: Recipe,
        method_override: Option<BrewMethod>,
        repository: Arc<TRepository>,
        wake_lock: Arc<dyn ScreenWakeLock>,
        haptics: Arc<dyn Haptics>,
    ) -> Self {
        let session = BrewingSession::new(recipe, method_override);
        let id = Uuid::now_v7();
        info!(
            session_id = %id,
            recipe_id = ?session.recipe().id,
            method = %session.method(),
            "brewing session opened"
        );
        Self {
            id,
            opened_at: Utc::now(),
            session: Arc::new(Mutex::new(session)),
            repository,
            wake_lock,
            haptics,
            wake_guard: None,
            ticker: None,
            closed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// A tick task is alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn holds_wake_lock(&self) -> bool {
        self.wake_guard.as_ref().is_some_and(WakeLockGuard::is_held)
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.closed {
            return Err(SessionError::Closed);
        }
        Ok(())
    }

    fn pulse(&self, pattern: HapticPattern) {
        if let Err(e) = self.haptics.pulse(pattern) {
            debug!(?pattern, error = %e, "haptic pulse skipped");
        }
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.ensure_open()?;
        let session = self.session.lock().await;
        let timer = session.timer();
        let data = session.active_data();
        Ok(SessionSnapshot {
            session_id: self.id,
            phase: session.phase(),
            phase_progress: session.phase().progress_percent(),
            method: session.method(),
            elapsed: timer.elapsed(),
            elapsed_clock: format_clock(timer.elapsed()),
            target_clock: format_clock(data.target_duration),
            running: timer.is_running(),
            progress: session.progress(),
            display: session.display_mode(),
            draft: session.draft().cloned(),
        })
    }

    pub async fn active_data(&self) -> Result<ActiveBrewData, SessionError> {
        self.ensure_open()?;
        Ok(self.session.lock().await.active_data())
    }

    pub async fn switch_method(&mut self, method: BrewMethod) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.session.lock().await.switch_method(method)?;
        debug!(session_id = %self.id, %method, "brew method switched");
        Ok(())
    }

    pub async fn start_brew(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.session.lock().await.start()?;
        self.wake_guard = Some(WakeLockGuard::acquire(self.wake_lock.clone()));
        self.pulse(HapticPattern::Start);
        Ok(())
    }

    pub async fn finish_brew(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        let elapsed = {
            let mut session = self.session.lock().await;
            session.finish()?;
            session.timer().elapsed()
        };
        self.stop_ticker();
        self.wake_guard = None;
        self.pulse(HapticPattern::Finish);
        info!(session_id = %self.id, elapsed, "brew finished");
        Ok(())
    }

    pub async fn toggle_timer(&mut self) -> Result<bool, SessionError> {
        self.ensure_open()?;
        let running = self.session.lock().await.toggle_timer()?;
        if running {
            self.spawn_ticker();
        } else {
            self.stop_ticker();
        }
        self.pulse(HapticPattern::Toggle);
        Ok(running)
    }

    pub async fn reset_timer(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.session.lock().await.reset_timer()?;
        self.stop_ticker();
        self.pulse(HapticPattern::Reset);
        Ok(())
    }

    pub async fn toggle_display(&mut self) -> Result<DisplayMode, SessionError> {
        self.ensure_open()?;
        Ok(self.session.lock().await.toggle_display())
    }

    pub async fn begin_rating(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.session.lock().await.begin_rating()?;
        Ok(())
    }

    pub async fn set_taste(&mut self, axis: TasteAxis, value: u8) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.session.lock().await.set_taste(axis, value)?;
        Ok(())
    }

    pub async fn add_tag(&mut self, tag: impl Into<String>) -> Result<bool, SessionError> {
        self.ensure_open()?;
        Ok(self.session.lock().await.add_tag(tag)?)
    }

    pub async fn remove_tag(&mut self, tag: &str) -> Result<bool, SessionError> {
        self.ensure_open()?;
        Ok(self.session.lock().await.remove_tag(tag)?)
    }

    pub async fn set_tags(&mut self, tags: AromaTags) -> Result<(), SessionError> {
        self.ensure_open()?;
        let mut session = self.session.lock().await;
        let current: Vec<String> = session
            .draft()
            .map(|d| d.aroma_tags.iter().map(str::to_string).collect())
            .unwrap_or_default();
        for tag in &current {
            session.remove_tag(tag)?;
        }
        for tag in tags.iter() {
            session.add_tag(tag)?;
        }
        Ok(())
    }

    pub async fn set_ratings(
        &mut self,
        taste_rating: u8,
        flavor_complexity: u8,
    ) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.session
            .lock()
            .await
            .set_ratings(taste_rating, flavor_complexity)?;
        Ok(())
    }

    /// Writes the draft into the recipe with a single store update, then closes.
    /// On failure the session stays open in the rating phase.
    pub async fn save_rating(&mut self) -> Result<Recipe, SessionError> {
        self.ensure_open()?;
        let rated = self.session.lock().await.rated_recipe()?;
        let id = rated.id.ok_or(SessionError::Unsaved)?;

        let record = match self.repository.update(id, to_storage(&rated)).await {
            Ok(record) => record,
            Err(e) => {
                warn!(session_id = %self.id, recipe_id = id, error = %e, "rating not saved");
                return Err(e.into());
            }
        };
        info!(session_id = %self.id, recipe_id = id, "rating saved");
        self.teardown("rating saved");
        Ok(to_ui(&record))
    }

    /// Drops the draft without writing and closes.
    pub async fn skip_rating(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        let phase = self.session.lock().await.phase();
        if phase != BrewPhase::Rate {
            return Err(TransitionError::NotAllowed {
                action: "skip rating",
                phase,
            }
            .into());
        }
        self.teardown("rating skipped");
        Ok(())
    }

    /// Ends the session from any phase without saving.
    pub fn close(&mut self) {
        self.teardown("closed");
    }

    fn spawn_ticker(&mut self) {
        self.stop_ticker();
        let session = self.session.clone();
        let session_id = self.id;
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                let mut guard = session.lock().await;
                if !guard.tick() {
                    debug!(%session_id, "timer stopped, ticker exiting");
                    break;
                }
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }

    fn teardown(&mut self, reason: &'static str) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.stop_ticker();
        self.wake_guard = None;
        // A draft only exists in the rating phase, where no ticker holds the lock.
        match self.session.try_lock() {
            Ok(mut session) => {
                session.discard_draft();
            }
            Err(_) => debug!(session_id = %self.id, "session busy, draft left to the ticker"),
        }
        let open_for = Utc::now() - self.opened_at;
        info!(
            session_id = %self.id,
            reason,
            open_for_secs = open_for.num_seconds(),
            "brewing session closed"
        );
    }
}

impl<TRepository> Drop for BrewingSessionController<TRepository>
where
    TRepository: RecipeRepository + ?Sized + 'static,
{
    fn drop(&mut self) {
        self.teardown("dropped");
    }
}
