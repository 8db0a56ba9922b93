use crate::modules::brewing::adapters::outbound::capabilities::{NoopHaptics, NoopScreenWakeLock};
use crate::modules::brewing::core::phase::BrewPhase;
use crate::modules::brewing::core::session::TransitionError;
use crate::modules::brewing::use_cases::run_brewing_session::controller::{
    BrewingSessionController, SessionError,
};
use crate::modules::recipes::adapters::outbound::in_memory::InMemoryRecipeStore;
use crate::modules::recipes::adapters::outbound::recipe_repository::RecipeRepository;
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::mapping::to_ui;
use crate::modules::recipes::core::taste_profile::TasteAxis;
use crate::modules::recipes::use_cases::manage_recipe_book::recipe_book::{BrewStart, RecipeBook};
use crate::tests::fixtures::capabilities::RecordingWakeLock;
use crate::tests::fixtures::recipes::{RecipeBuilder, recipe_record_fixture};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn seeded_book() -> (Arc<InMemoryRecipeStore>, RecipeBook<InMemoryRecipeStore>) {
    let store = Arc::new(InMemoryRecipeStore::new());
    store.create(recipe_record_fixture().fields).await.unwrap();
    let book = RecipeBook::new(store.clone());
    book.refresh().await.unwrap();
    (store, book)
}

fn open(
    store: Arc<InMemoryRecipeStore>,
    start: BrewStart,
) -> BrewingSessionController<InMemoryRecipeStore> {
    BrewingSessionController::open(
        start.recipe,
        Some(start.method),
        store,
        Arc::new(NoopScreenWakeLock),
        Arc::new(NoopHaptics),
    )
}

#[tokio::test]
async fn saves_a_rating_with_exactly_one_store_update() {
    let (store, book) = seeded_book().await;
    let start = book.start_brew(1, Some(BrewMethod::Filter)).await.unwrap();
    let calls_before = store.update_calls();
    let mut session = open(store.clone(), start);

    session.start_brew().await.unwrap();
    session.toggle_timer().await.unwrap();
    session.finish_brew().await.unwrap();
    session.begin_rating().await.unwrap();
    session.set_taste(TasteAxis::Acidity, 9).await.unwrap();
    session.add_tag("lemon").await.unwrap();
    session.set_ratings(5, 5).await.unwrap();

    let saved = session.save_rating().await.unwrap();

    assert_eq!(store.update_calls(), calls_before + 1);
    assert!(session.is_closed());
    book.accept_saved(saved.clone()).await;

    let stored = to_ui(&store.list().await.unwrap()[0]);
    assert_eq!(stored, saved);
    assert_eq!(stored.brew_count, 4);
    assert_eq!(stored.filter.taste.acidity, 9);
    assert!(stored.filter.aroma_tags.contains("lemon"));
    assert_eq!(stored.filter.flavor_complexity, 5);
    assert_eq!(stored.espresso, RecipeBuilder::new().build().espresso);
    assert_eq!(book.recipe(1).await.unwrap(), stored);
}

#[tokio::test]
async fn skipping_a_rating_writes_nothing() {
    let (store, book) = seeded_book().await;
    let start = book.start_brew(1, None).await.unwrap();
    let calls_before = store.update_calls();
    let mut session = open(store.clone(), start);

    session.start_brew().await.unwrap();
    session.finish_brew().await.unwrap();
    session.begin_rating().await.unwrap();
    session.set_taste(TasteAxis::Body, 2).await.unwrap();
    session.skip_rating().await.unwrap();

    assert_eq!(store.update_calls(), calls_before);
    assert!(session.is_closed());
    assert_eq!(store.list().await.unwrap()[0].fields.body, 8);
}

#[tokio::test]
async fn a_failed_save_keeps_the_session_in_rating() {
    let store = InMemoryRecipeStore::new();
    store.create(recipe_record_fixture().fields).await.unwrap();
    let recipe = to_ui(&store.list().await.unwrap()[0]);
    let mut store = store;
    store.toggle_offline();
    let store = Arc::new(store);

    let lock = Arc::new(RecordingWakeLock::default());
    let mut session = BrewingSessionController::open(
        recipe,
        None,
        store.clone(),
        lock.clone(),
        Arc::new(NoopHaptics),
    );
    session.start_brew().await.unwrap();
    session.finish_brew().await.unwrap();
    session.begin_rating().await.unwrap();

    assert!(matches!(
        session.save_rating().await,
        Err(SessionError::Store(_))
    ));
    assert_eq!(store.update_calls(), 1);
    assert!(!session.is_closed());
    assert_eq!(session.snapshot().await.unwrap().phase, BrewPhase::Rate);

    session.close();
    assert_eq!(lock.active(), 0);
}

#[tokio::test]
async fn finish_only_leads_to_rating_or_close() {
    let (store, book) = seeded_book().await;
    let start = book.start_brew(1, None).await.unwrap();
    let mut session = open(store, start);
    session.start_brew().await.unwrap();
    session.finish_brew().await.unwrap();

    assert!(matches!(
        session.start_brew().await,
        Err(SessionError::Transition(TransitionError::NotAllowed {
            phase: BrewPhase::Finish,
            ..
        }))
    ));
    assert!(session.finish_brew().await.is_err());
    assert!(session.switch_method(BrewMethod::Filter).await.is_err());
    assert!(session.skip_rating().await.is_err());

    session.close();
    assert!(session.is_closed());
    assert!(matches!(
        session.begin_rating().await,
        Err(SessionError::Closed)
    ));
}
