//! Console output of a harvest: the log filter and the per-country report.

use crate::harvest::CountryCities;
use clap::ValueEnum;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Country header followed by indented city labels
    #[default]
    Text,
    /// One JSON object per country
    Json,
}

/// Filter built from `directives` (the value of `RUST_LOG`), falling back to
/// [`DEFAULT_LOG_LEVEL`].
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Writes one country and its cities in `format`.
pub fn write_country<W: Write>(
    out: &mut W,
    country_cities: &CountryCities,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            let country = &country_cities.country;
            match &country.continent {
                Some(continent) => writeln!(out, "{} ({})", country.label, continent)?,
                None => writeln!(out, "{}", country.label)?,
            }
            for city in &country_cities.cities {
                writeln!(out, "  {}", city)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, country_cities)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harvest::Country;
    use tracing_subscriber::filter::LevelFilter;

    fn france() -> CountryCities {
        CountryCities {
            country: Country {
                id: "Q142".to_string(),
                label: "France".to_string(),
                continent: Some("Europe".to_string()),
            },
            cities: vec!["Paris".to_string(), "Lyon".to_string()],
        }
    }

    fn render(country_cities: &CountryCities, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_country(&mut out, country_cities, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_text_output() {
        assert_eq!(render(&france(), OutputFormat::Text), "France (Europe)\n  Paris\n  Lyon\n");

        let mut without_continent = france();
        without_continent.country.continent = None;
        without_continent.cities.truncate(1);
        assert_eq!(render(&without_continent, OutputFormat::Text), "France\n  Paris\n");
    }

    #[test]
    fn test_json_output_is_one_line_per_country() {
        let line = render(&france(), OutputFormat::Json);
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "country": {"id": "Q142", "label": "France", "continent": "Europe"},
                "cities": ["Paris", "Lyon"]
            })
        );
    }

    #[test]
    fn test_json_output_omits_missing_continent() {
        let mut country_cities = france();
        country_cities.country.continent = None;

        let value: serde_json::Value =
            serde_json::from_str(&render(&country_cities, OutputFormat::Json)).unwrap();
        assert!(value["country"].get("continent").is_none());
    }
}
