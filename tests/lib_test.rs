use std::error::Error as _;
use wikifacts::vocabulary::{Item, Property};
use wikifacts::{EndpointError, Error};

#[test]
fn test_error_display() {
    let err = Error::Config("test error".to_string());
    assert_eq!(format!("{}", err), "Configuration error: test error");
}

#[test]
fn test_lookup_error_names_the_key() {
    let err = "volcano".parse::<Item>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown item: volcano");

    let err = "height".parse::<Property>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown property: height");
}

#[test]
fn test_retrieval_error_keeps_cause() {
    let err = Error::Retrieval {
        query: "SELECT * WHERE { ?s ?p ?o }".to_string(),
        attempts: 5,
        source: EndpointError::Store("down".to_string()),
    };

    assert_eq!(
        err.to_string(),
        "Unable to retrieve data after 5 attempts using this query: SELECT * WHERE { ?s ?p ?o }"
    );
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("Store error: down"));
}
