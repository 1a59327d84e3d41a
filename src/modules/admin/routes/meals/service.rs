use super::types::{request, response};
use crate::{
    modules::meal::repository::{
        self, ConsoleOrdering, ConsoleOrderingField, FindManyForConsoleFilters,
    },
    types::Context,
};
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use std::sync::Arc;

fn parse_is_available(raw: Option<String>) -> Result<Option<bool>, response::Error> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(_) => Err(response::Error::InvalidFilter("is_available")),
    }
}

/// Lower bound of a creation-date period, in UTC.
fn created_since(
    raw: Option<String>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, response::Error> {
    let today = now.date_naive();
    let since = match raw.as_deref().map(str::trim) {
        None | Some("") | Some("any") => return Ok(None),
        Some("today") => today,
        Some("past_7_days") => today - Duration::days(7),
        Some("this_month") => today - Duration::days(today.day0() as i64),
        Some("this_year") => today - Duration::days(today.ordinal0() as i64),
        Some(_) => return Err(response::Error::InvalidFilter("created_at")),
    };

    Ok(Some(since.and_time(NaiveTime::default()).and_utc()))
}

fn parse_ordering(raw: Option<String>) -> Result<ConsoleOrdering, response::Error> {
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(ConsoleOrdering::default()),
        Some(raw) => raw.to_string(),
    };

    let (descending, column) = match raw.strip_prefix('-') {
        Some(column) => (true, column),
        None => (false, raw.as_str()),
    };

    let field = match column {
        "name" => ConsoleOrderingField::Name,
        "price" => ConsoleOrderingField::Price,
        "is_available" => ConsoleOrderingField::IsAvailable,
        "created_at" => ConsoleOrderingField::CreatedAt,
        _ => return Err(response::Error::InvalidFilter("ordering")),
    };

    Ok(ConsoleOrdering { field, descending })
}

fn into_repository_filters(
    filters: request::Filters,
    now: DateTime<Utc>,
) -> Result<FindManyForConsoleFilters, response::Error> {
    Ok(FindManyForConsoleFilters {
        search_terms: filters
            .q
            .unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect(),
        is_available: parse_is_available(filters.is_available)?,
        created_since: created_since(filters.created_at, now)?,
        ordering: parse_ordering(filters.ordering)?,
    })
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let filters = into_repository_filters(payload.filters, Utc::now())?;

    repository::find_many_for_console(&ctx.db_conn.pool, filters)
        .await
        .map_err(|_| response::Error::FailedToFetchMeals)
        .map(|meals| response::Success::Meals(meals.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn creation_periods_start_at_midnight_utc() {
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap();

        assert_eq!(created_since(None, now), Ok(None));
        assert_eq!(created_since(Some("any".into()), now), Ok(None));
        assert_eq!(created_since(Some("today".into()), now), Ok(Some(at(2024, 3, 14))));
        assert_eq!(
            created_since(Some("past_7_days".into()), now),
            Ok(Some(at(2024, 3, 7)))
        );
        assert_eq!(
            created_since(Some("this_month".into()), now),
            Ok(Some(at(2024, 3, 1)))
        );
        assert_eq!(
            created_since(Some("this_year".into()), now),
            Ok(Some(at(2024, 1, 1)))
        );
        assert_eq!(
            created_since(Some("last_century".into()), now),
            Err(response::Error::InvalidFilter("created_at"))
        );
    }

    #[test]
    fn ordering_accepts_display_columns_only() {
        assert_eq!(parse_ordering(None), Ok(ConsoleOrdering::default()));
        assert_eq!(
            parse_ordering(Some("-price".into())),
            Ok(ConsoleOrdering {
                field: ConsoleOrderingField::Price,
                descending: true,
            })
        );
        assert_eq!(
            parse_ordering(Some("name".into())),
            Ok(ConsoleOrdering {
                field: ConsoleOrderingField::Name,
                descending: false,
            })
        );
        assert_eq!(
            parse_ordering(Some("description".into())),
            Err(response::Error::InvalidFilter("ordering"))
        );
        assert_eq!(
            parse_ordering(Some("name; DROP TABLE meals".into())),
            Err(response::Error::InvalidFilter("ordering"))
        );
    }

    #[test]
    fn availability_filter() {
        assert_eq!(parse_is_available(Some("true".into())), Ok(Some(true)));
        assert_eq!(parse_is_available(Some("0".into())), Ok(Some(false)));
        assert_eq!(parse_is_available(Some("".into())), Ok(None));
        assert_eq!(
            parse_is_available(Some("yes".into())),
            Err(response::Error::InvalidFilter("is_available"))
        );
    }

    #[test]
    fn search_is_split_into_terms() {
        let filters = into_repository_filters(
            request::Filters {
                q: Some("  spicy   chicken ".into()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(filters.search_terms, vec!["spicy", "chicken"]);
        assert_eq!(filters.is_available, None);
        assert_eq!(filters.created_since, None);
    }
}
