// SQLite implementation of the RecipeRepository port.
//
// Responsibilities
// - Own the connection pool and apply embedded migrations on start.
// - Persist every field of both brew method families.

use crate::modules::recipes::adapters::outbound::recipe_repository::{
    RecipeRepository, RepositoryError,
};
use crate::modules::recipes::core::brew_method::BrewMethod;
use crate::modules::recipes::core::record::{RecipeFields, RecipeRecord, normalize_image};
use crate::shared::core::primitives::RecipeId;
use crate::shared::infrastructure::config::DatabaseConfig;
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, info};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const COLUMNS: [&str; 37] = [
    "bean_name",
    "image",
    "is_archived",
    "brew_count",
    "brew_method",
    "input_grams",
    "output_grams",
    "brewing_time",
    "grind_size",
    "taste_rating",
    "flavor_complexity",
    "fragrance",
    "aroma",
    "flavor",
    "sweetness",
    "acidity",
    "body",
    "aftertaste",
    "balance",
    "aroma_tags",
    "filter_input_grams",
    "filter_water_grams",
    "filter_brewing_temperature",
    "filter_blooming_time",
    "filter_brewing_time",
    "filter_grind_size",
    "filter_taste_rating",
    "filter_flavor_complexity",
    "filter_fragrance",
    "filter_aroma",
    "filter_flavor",
    "filter_sweetness",
    "filter_acidity",
    "filter_body",
    "filter_aftertaste",
    "filter_balance",
    "filter_aroma_tags",
];

static SELECT_SQL: LazyLock<String> =
    LazyLock::new(|| format!("SELECT id, {} FROM recipes ORDER BY id ASC", COLUMNS.join(", ")));

static INSERT_SQL: LazyLock<String> = LazyLock::new(|| {
    format!(
        "INSERT INTO recipes ({}) VALUES ({})",
        COLUMNS.join(", "),
        vec!["?"; COLUMNS.len()].join(", ")
    )
});

static UPDATE_SQL: LazyLock<String> = LazyLock::new(|| {
    let assignments: Vec<String> = COLUMNS.iter().map(|c| format!("{c} = ?")).collect();
    format!("UPDATE recipes SET {} WHERE id = ?", assignments.join(", "))
});

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

#[derive(Clone)]
pub struct SqliteRecipeStore {
    pool: SqlitePool,
}

impl SqliteRecipeStore {
    /// Open (creating if missing) the database file from `config` and migrate it.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    RepositoryError::Backend(format!("failed to create database directory: {e}"))
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        info!(path = %config.path.display(), "recipe database ready");
        Ok(store)
    }

    /// Private in-memory database, for tests and throwaway runs.
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), RepositoryError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Backend(format!("failed to run migrations: {e}")))
    }
}

fn bind_fields<'q>(query: SqliteQuery<'q>, f: &RecipeFields) -> SqliteQuery<'q> {
    query
        .bind(f.bean_name.clone())
        .bind(f.image.clone())
        .bind(f.is_archived)
        .bind(i64::from(f.brew_count))
        .bind(f.brew_method.as_str())
        .bind(f.input_grams)
        .bind(f.output_grams)
        .bind(i64::from(f.brewing_time))
        .bind(f.grind_size)
        .bind(i64::from(f.taste_rating))
        .bind(i64::from(f.flavor_complexity))
        .bind(i64::from(f.fragrance))
        .bind(i64::from(f.aroma))
        .bind(i64::from(f.flavor))
        .bind(i64::from(f.sweetness))
        .bind(i64::from(f.acidity))
        .bind(i64::from(f.body))
        .bind(i64::from(f.aftertaste))
        .bind(i64::from(f.balance))
        .bind(f.aroma_tags.clone())
        .bind(f.filter_input_grams)
        .bind(f.filter_water_grams)
        .bind(f.filter_brewing_temperature)
        .bind(i64::from(f.filter_blooming_time))
        .bind(i64::from(f.filter_brewing_time))
        .bind(f.filter_grind_size)
        .bind(i64::from(f.filter_taste_rating))
        .bind(i64::from(f.filter_flavor_complexity))
        .bind(i64::from(f.filter_fragrance))
        .bind(i64::from(f.filter_aroma))
        .bind(i64::from(f.filter_flavor))
        .bind(i64::from(f.filter_sweetness))
        .bind(i64::from(f.filter_acidity))
        .bind(i64::from(f.filter_body))
        .bind(i64::from(f.filter_aftertaste))
        .bind(i64::from(f.filter_balance))
        .bind(f.filter_aroma_tags.clone())
}

#[async_trait]
impl RecipeRepository for SqliteRecipeStore {
    async fn list(&self) -> Result<Vec<RecipeRecord>, RepositoryError> {
        let rows: Vec<RecipeRow> = sqlx::query_as(SELECT_SQL.as_str())
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(RecipeRecord::try_from).collect()
    }

    async fn create(&self, fields: RecipeFields) -> Result<RecipeRecord, RepositoryError> {
        let fields = fields.normalized();
        let result = bind_fields(sqlx::query(INSERT_SQL.as_str()), &fields)
            .execute(&self.pool)
            .await?;
        let id = result.last_insert_rowid();
        debug!(recipe_id = id, "recipe inserted");
        Ok(RecipeRecord::new(id, fields))
    }

    async fn update(
        &self,
        id: RecipeId,
        fields: RecipeFields,
    ) -> Result<RecipeRecord, RepositoryError> {
        let fields = fields.normalized();
        let result = bind_fields(sqlx::query(UPDATE_SQL.as_str()), &fields)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(RecipeRecord::new(id, fields))
    }

    async fn delete(&self, id: RecipeId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    bean_name: String,
    image: Option<String>,
    is_archived: bool,
    brew_count: i64,
    brew_method: String,
    input_grams: f64,
    output_grams: f64,
    brewing_time: i64,
    grind_size: f64,
    taste_rating: i64,
    flavor_complexity: i64,
    fragrance: i64,
    aroma: i64,
    flavor: i64,
    sweetness: i64,
    acidity: i64,
    body: i64,
    aftertaste: i64,
    balance: i64,
    aroma_tags: String,
    filter_input_grams: f64,
    filter_water_grams: f64,
    filter_brewing_temperature: f64,
    filter_blooming_time: i64,
    filter_brewing_time: i64,
    filter_grind_size: f64,
    filter_taste_rating: i64,
    filter_flavor_complexity: i64,
    filter_fragrance: i64,
    filter_aroma: i64,
    filter_flavor: i64,
    filter_sweetness: i64,
    filter_acidity: i64,
    filter_body: i64,
    filter_aftertaste: i64,
    filter_balance: i64,
    filter_aroma_tags: String,
}

fn narrow<T: TryFrom<i64>>(column: &str, value: i64) -> Result<T, RepositoryError> {
    T::try_from(value)
        .map_err(|_| RepositoryError::Backend(format!("column {column} out of range: {value}")))
}

impl TryFrom<RecipeRow> for RecipeRecord {
    type Error = RepositoryError;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let brew_method = BrewMethod::from_str(&row.brew_method)
            .map_err(|e| RepositoryError::Backend(e.to_string()))?;
        Ok(RecipeRecord::new(
            row.id,
            RecipeFields {
                bean_name: row.bean_name,
                image: normalize_image(row.image),
                is_archived: row.is_archived,
                brew_count: narrow("brew_count", row.brew_count)?,
                brew_method,
                input_grams: row.input_grams,
                output_grams: row.output_grams,
                brewing_time: narrow("brewing_time", row.brewing_time)?,
                grind_size: row.grind_size,
                taste_rating: narrow("taste_rating", row.taste_rating)?,
                flavor_complexity: narrow("flavor_complexity", row.flavor_complexity)?,
                fragrance: narrow("fragrance", row.fragrance)?,
                aroma: narrow("aroma", row.aroma)?,
                flavor: narrow("flavor", row.flavor)?,
                sweetness: narrow("sweetness", row.sweetness)?,
                acidity: narrow("acidity", row.acidity)?,
                body: narrow("body", row.body)?,
                aftertaste: narrow("aftertaste", row.aftertaste)?,
                balance: narrow("balance", row.balance)?,
                aroma_tags: row.aroma_tags,
                filter_input_grams: row.filter_input_grams,
                filter_water_grams: row.filter_water_grams,
                filter_brewing_temperature: row.filter_brewing_temperature,
                filter_blooming_time: narrow("filter_blooming_time", row.filter_blooming_time)?,
                filter_brewing_time: narrow("filter_brewing_time", row.filter_brewing_time)?,
                filter_grind_size: row.filter_grind_size,
                filter_taste_rating: narrow("filter_taste_rating", row.filter_taste_rating)?,
                filter_flavor_complexity: narrow(
                    "filter_flavor_complexity",
                    row.filter_flavor_complexity,
                )?,
                filter_fragrance: narrow("filter_fragrance", row.filter_fragrance)?,
                filter_aroma: narrow("filter_aroma", row.filter_aroma)?,
                filter_flavor: narrow("filter_flavor", row.filter_flavor)?,
                filter_sweetness: narrow("filter_sweetness", row.filter_sweetness)?,
                filter_acidity: narrow("filter_acidity", row.filter_acidity)?,
                filter_body: narrow("filter_body", row.filter_body)?,
                filter_aftertaste: narrow("filter_aftertaste", row.filter_aftertaste)?,
                filter_balance: narrow("filter_balance", row.filter_balance)?,
                filter_aroma_tags: row.filter_aroma_tags,
            },
        ))
    }
}
