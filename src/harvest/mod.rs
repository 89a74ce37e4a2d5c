//! Country and city harvesting.
//!
//! Runs the standard query for sovereign states grouped by continent, then
//! one country-cities query per returned row. Countries with at least one
//! city are handed to a caller-supplied sink in the order the first query
//! returned them. Countries listed under several continents are queried once
//! per listing.

use crate::config::HarvestConfig;
use crate::endpoint::{ResultRow, SparqlEndpoint};
use crate::error::Result;
use crate::execution::QueryExecutor;
use crate::query::{CountryCitiesQuery, StandardQuery};
use crate::vocabulary::{Item, Property, Vocabulary};
use futures_util::stream::{self, StreamExt};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// IRI prefix of Wikidata entities; the remainder is the bare entity id.
pub const ENTITY_PREFIX: &str = "http://www.wikidata.org/entity/";

fn entity_iri_regex() -> &'static Regex {
    static ENTITY_IRI: OnceLock<Regex> = OnceLock::new();
    ENTITY_IRI.get_or_init(|| {
        Regex::new(r"^https?://www\.wikidata\.org/entity/(Q[0-9]+)$")
            .expect("entity IRI pattern is valid")
    })
}

/// Bare entity id (`Q142`) of a Wikidata entity IRI.
pub fn entity_id(iri: &str) -> Option<&str> {
    entity_iri_regex().captures(iri).and_then(|captures| captures.get(1)).map(|id| id.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
}

impl Country {
    /// Reads a row of the sovereign-state query. Needs `item` and `itemLabel`.
    pub fn from_row(row: &ResultRow) -> Option<Self> {
        let id = entity_id(row.value("item")?)?;
        let label = row.value("itemLabel")?;
        Some(Self {
            id: id.to_string(),
            label: label.to_string(),
            continent: row.value("propertyLabel").map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCities {
    pub country: Country,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Countries returned by the first query
    pub countries: usize,
    /// Countries with at least one city, i.e. handed to the sink
    pub reported: usize,
    pub cities: usize,
}

pub struct CountryCityHarvester<'a, E> {
    executor: &'a QueryExecutor<E>,
    vocabulary: &'a Vocabulary,
    config: HarvestConfig,
}

impl<'a, E: SparqlEndpoint> CountryCityHarvester<'a, E> {
    pub fn new(
        executor: &'a QueryExecutor<E>,
        vocabulary: &'a Vocabulary,
        config: HarvestConfig,
    ) -> Self {
        Self { executor, vocabulary, config }
    }

    /// Sovereign states with their continent, one entry per result row.
    pub async fn countries(&self) -> Result<Vec<Country>> {
        let mut query = StandardQuery::new(Item::SovereignState, Property::Continent)
            .language(self.config.language.clone());
        if let Some(limit) = self.config.country_limit {
            query = query.limit(limit);
        }
        let rows = self.executor.execute(&query.build(self.vocabulary)?).await?;

        let mut countries = Vec::with_capacity(rows.len());
        for row in &rows {
            match Country::from_row(row) {
                Some(country) => countries.push(country),
                None => tracing::warn!(
                    item = ?row.value("item"),
                    "Skipping country row without entity id or label"
                ),
            }
        }
        Ok(countries)
    }

    /// Labels of the big cities located in `country`, in result order.
    pub async fn cities_of(&self, country: &Country) -> Result<Vec<String>> {
        let query = CountryCitiesQuery::new(country.id.as_str())
            .language(self.config.language.clone())
            .build(self.vocabulary)?;
        let rows = self.executor.execute(&query).await?;

        Ok(rows.iter().filter_map(|row| row.value("itemLabel")).map(str::to_string).collect())
    }

    /// Runs the whole harvest, reporting each country with cities to `sink`.
    ///
    /// The first fatal error stops the harvest.
    pub async fn run<F>(&self, mut sink: F) -> Result<HarvestSummary>
    where
        F: FnMut(&CountryCities),
    {
        self.config.validate()?;

        let countries = self.countries().await?;
        let mut summary =
            HarvestSummary { countries: countries.len(), ..HarvestSummary::default() };

        let mut results = stream::iter(countries)
            .map(|country| async move {
                let cities = self.cities_of(&country).await?;
                Ok::<_, crate::Error>(CountryCities { country, cities })
            })
            .buffered(self.config.concurrency);

        while let Some(result) = results.next().await {
            let country_cities = result?;
            if country_cities.cities.is_empty() {
                tracing::debug!(country = %country_cities.country.label, "No cities found");
                continue;
            }
            summary.reported += 1;
            summary.cities += country_cities.cities.len();
            sink(&country_cities);
        }

        tracing::info!(
            countries = summary.countries,
            reported = summary.reported,
            cities = summary.cities,
            "Harvest complete"
        );
        Ok(summary)
    }
}
