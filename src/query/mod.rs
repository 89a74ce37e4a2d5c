//! Query builders.
//!
//! Both query shapes collect their clauses first and render them in a fixed
//! order: the base clause, an optional filter clause, the closing brace of the
//! `WHERE` block, then an optional `LIMIT`. Rendering only reads the
//! [`Vocabulary`](crate::vocabulary::Vocabulary); nothing is executed here.

pub mod country_cities;
pub mod standard;

pub use country_cities::CountryCitiesQuery;
pub use standard::StandardQuery;

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Label language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

fn language_regex() -> &'static Regex {
    static LANGUAGE: OnceLock<Regex> = OnceLock::new();
    LANGUAGE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$").expect("language tag pattern is valid")
    })
}

/// Checks that `language` can be embedded in a `lang(?x) = "..."` filter.
pub(crate) fn validate_language(language: &str) -> Result<()> {
    if language_regex().is_match(language) {
        Ok(())
    } else {
        Err(Error::Format(format!("invalid language tag: {:?}", language)))
    }
}

/// Clauses of one query, rendered in fixed order.
#[derive(Debug, Default)]
struct Clauses {
    base: String,
    filter: Option<String>,
    limit: Option<String>,
}

impl Clauses {
    fn render(self) -> String {
        let mut query = self.base;
        if let Some(filter) = self.filter {
            query.push_str("    ");
            query.push_str(&filter);
            query.push('\n');
        }
        query.push_str("}\n");
        if let Some(limit) = self.limit {
            query.push_str(&limit);
            query.push('\n');
        }
        query
    }
}

/// Renders the `LIMIT` clause. Zero means no limit; negative values cannot be
/// rendered as a row count.
fn limit_clause(limit: Option<i64>) -> Result<Option<String>> {
    match limit {
        None | Some(0) => Ok(None),
        Some(n) if n < 0 => {
            Err(Error::Format(format!("limit must be a positive integer, got {}", n)))
        }
        Some(n) => Ok(Some(format!("LIMIT {}", n))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("pt-BR").is_ok());
        assert!(validate_language("zh-Hant-TW").is_ok());
        assert!(matches!(validate_language(""), Err(Error::Format(_))));
        assert!(matches!(validate_language("en\") . ?s ?p ?o"), Err(Error::Format(_))));
    }

    #[test]
    fn test_limit_clause() {
        assert_eq!(limit_clause(None).unwrap(), None);
        assert_eq!(limit_clause(Some(0)).unwrap(), None);
        assert_eq!(limit_clause(Some(5)).unwrap().as_deref(), Some("LIMIT 5"));
        assert!(matches!(limit_clause(Some(-3)), Err(Error::Format(_))));
    }

    #[test]
    fn test_clauses_render_in_order() {
        let clauses = Clauses {
            base: "SELECT * WHERE {\n".to_string(),
            filter: Some("?a ?b ?c .".to_string()),
            limit: Some("LIMIT 1".to_string()),
        };
        assert_eq!(clauses.render(), "SELECT * WHERE {\n    ?a ?b ?c .\n}\nLIMIT 1\n");
    }
}
