//! Large cities located in one country.

use super::{validate_language, Clauses, DEFAULT_LANGUAGE};
use crate::error::{Error, Result};
use crate::vocabulary::{Item, Property, Vocabulary};
use regex::Regex;
use std::sync::OnceLock;

fn entity_id_regex() -> &'static Regex {
    static ENTITY_ID: OnceLock<Regex> = OnceLock::new();
    ENTITY_ID.get_or_init(|| Regex::new(r"^Q[0-9]+$").expect("entity id pattern is valid"))
}

/// Builder for the country-cities query.
///
/// Selects `?itemLabel` (the city) and `?countryLabel` for every big city
/// whose country is the given entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCitiesQuery {
    country: String,
    language: String,
}

impl CountryCitiesQuery {
    /// `country` is a bare entity id such as `Q142`.
    pub fn new(country: impl Into<String>) -> Self {
        Self { country: country.into(), language: DEFAULT_LANGUAGE.to_string() }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn build(&self, vocabulary: &Vocabulary) -> Result<String> {
        validate_language(&self.language)?;
        if !entity_id_regex().is_match(&self.country) {
            return Err(Error::Format(format!("invalid entity id: {:?}", self.country)));
        }

        let instance_of = vocabulary.property(Property::InstanceOf)?;
        let big_city = vocabulary.item(Item::BigCity)?;
        let country = vocabulary.property(Property::Country)?;

        let clauses = Clauses {
            base: format!(
                r#"SELECT ?itemLabel ?countryLabel
WHERE {{
    ?item {instance_of} {big_city} ;
          rdfs:label ?itemLabel .
    FILTER(lang(?itemLabel) = "{lang}") .
    ?item {country} ?country .
    ?country rdfs:label ?countryLabel .
    FILTER(lang(?countryLabel) = "{lang}") .
    ?item {country} wd:{id} .
"#,
                instance_of = instance_of,
                big_city = big_city,
                country = country,
                lang = self.language,
                id = self.country,
            ),
            ..Clauses::default()
        };

        Ok(clauses.render())
    }
}
