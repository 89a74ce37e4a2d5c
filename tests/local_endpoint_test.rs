//! Generated queries evaluated by the local Oxigraph endpoint.

use std::collections::HashSet;
use std::path::Path;
use wikifacts::endpoint::{LocalSparqlEndpoint, SparqlEndpoint};
use wikifacts::execution::QueryExecutor;
use wikifacts::query::{CountryCitiesQuery, StandardQuery};
use wikifacts::vocabulary::{Item, Property, Vocabulary};

fn atlas() -> LocalSparqlEndpoint {
    LocalSparqlEndpoint::open(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/atlas.ttl"))
        .unwrap()
}

fn labels<'a>(rows: &'a [wikifacts::endpoint::ResultRow], variable: &str) -> HashSet<&'a str> {
    rows.iter().filter_map(|row| row.value(variable)).collect()
}

#[tokio::test]
async fn test_sovereign_states_by_continent() {
    let query = StandardQuery::new(Item::SovereignState, Property::Continent)
        .build(&Vocabulary::wikidata())
        .unwrap();
    let rows = atlas().select(&query).await.unwrap().into_rows();

    // Russia is listed once per continent
    assert_eq!(rows.len(), 5);
    assert_eq!(
        labels(&rows, "itemLabel"),
        HashSet::from(["France", "Russia", "Morocco", "San Marino"])
    );
    assert_eq!(labels(&rows, "propertyLabel"), HashSet::from(["Europe", "Asia", "Africa"]));
    assert!(rows
        .iter()
        .all(|row| row.value("item").unwrap().starts_with("http://www.wikidata.org/entity/Q")));
}

#[tokio::test]
async fn test_filter_clause_restricts_property_entity() {
    let query = StandardQuery::new(Item::Mountain, Property::Country)
        .filter_property(Property::Continent)
        .filter_item(Item::Africa)
        .build(&Vocabulary::wikidata())
        .unwrap();
    let rows = atlas().select(&query).await.unwrap().into_rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("itemLabel"), Some("Toubkal"));
    assert_eq!(rows[0].value("propertyLabel"), Some("Morocco"));
}

#[tokio::test]
async fn test_limit_clause_is_honoured() {
    let query = StandardQuery::new(Item::SovereignState, Property::Continent)
        .limit(2)
        .build(&Vocabulary::wikidata())
        .unwrap();
    let rows = atlas().select(&query).await.unwrap().into_rows();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_country_cities_query() {
    let query = CountryCitiesQuery::new("Q142").build(&Vocabulary::wikidata()).unwrap();
    let rows = atlas().select(&query).await.unwrap().into_rows();

    assert_eq!(labels(&rows, "itemLabel"), HashSet::from(["Paris", "Lyon"]));
    assert_eq!(labels(&rows, "countryLabel"), HashSet::from(["France"]));
    assert!(rows.iter().all(|row| row.len() == 2));
}

#[tokio::test]
async fn test_country_cities_in_other_language() {
    let query =
        CountryCitiesQuery::new("Q142").language("de").build(&Vocabulary::wikidata()).unwrap();
    let rows = atlas().select(&query).await.unwrap().into_rows();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value("itemLabel"), Some("Paris"));
    assert_eq!(rows[0].value("countryLabel"), Some("Frankreich"));
}

#[tokio::test]
async fn test_country_without_big_cities_returns_no_rows() {
    let executor = QueryExecutor::new(atlas());
    let query = CountryCitiesQuery::new("Q238").build(&Vocabulary::wikidata()).unwrap();

    let rows = executor.execute(&query).await.unwrap();
    assert!(rows.is_empty());
}
