use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow, ToSchema)]
pub struct Meal {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Burger")]
    pub name: String,
    #[schema(example = "")]
    pub description: String,
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CreateMealPayload {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub is_available: bool,
}

#[derive(Debug, Default)]
pub struct UpdateMealPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub is_available: Option<bool>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMealPayload,
) -> Result<Meal, Error> {
    sqlx::query_as::<_, Meal>(
        "
        INSERT INTO meals (
            name,
            description,
            price,
            is_available
        )
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.is_available)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a meal: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Meal>, Error> {
    sqlx::query_as::<_, Meal>("SELECT * FROM meals ORDER BY id ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch many meals: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<Option<Meal>, Error> {
    sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch a meal by id: {}", err);
            Error::UnexpectedError
        })
}

/// Applies the present fields of `payload`; returns `None` when no row has `id`.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i64,
    payload: UpdateMealPayload,
) -> Result<Option<Meal>, Error> {
    sqlx::query_as::<_, Meal>(
        "
        UPDATE meals SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            price = COALESCE($3, price),
            is_available = COALESCE($4, is_available),
            updated_at = GREATEST(NOW(), created_at)
        WHERE
            id = $5
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.is_available)
    .bind(id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a meal by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

/// Returns whether a row was removed.
pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i64) -> Result<bool, Error> {
    sqlx::query("DELETE FROM meals WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete a meal by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConsoleOrderingField {
    Id,
    Name,
    Price,
    IsAvailable,
    CreatedAt,
}

impl ConsoleOrderingField {
    fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Price => "price",
            Self::IsAvailable => "is_available",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConsoleOrdering {
    pub field: ConsoleOrderingField,
    pub descending: bool,
}

impl Default for ConsoleOrdering {
    fn default() -> Self {
        Self {
            field: ConsoleOrderingField::Id,
            descending: true,
        }
    }
}

#[derive(Default)]
pub struct FindManyForConsoleFilters {
    pub search_terms: Vec<String>,
    pub is_available: Option<bool>,
    pub created_since: Option<DateTime<Utc>>,
    pub ordering: ConsoleOrdering,
}

fn console_query(filters: &FindManyForConsoleFilters) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM meals WHERE TRUE");

    for term in &filters.search_terms {
        let pattern = format!("%{}%", escape_like(term));
        query
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(is_available) = filters.is_available {
        query.push(" AND is_available = ").push_bind(is_available);
    }

    if let Some(created_since) = filters.created_since {
        query.push(" AND created_at >= ").push_bind(created_since);
    }

    query
        .push(" ORDER BY ")
        .push(filters.ordering.field.column())
        .push(if filters.ordering.descending {
            " DESC"
        } else {
            " ASC"
        });

    if filters.ordering.field != ConsoleOrderingField::Id {
        query.push(", id DESC");
    }

    query
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub async fn find_many_for_console<'e, E: PgExecutor<'e>>(
    e: E,
    filters: FindManyForConsoleFilters,
) -> Result<Vec<Meal>, Error> {
    let mut query = console_query(&filters);

    query
        .build_query_as::<Meal>()
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch meals for the console: {}",
                err
            );
            Error::UnexpectedError
        })
}
