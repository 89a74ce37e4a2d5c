//! Vocabulary of item and property kinds.
//!
//! Names such as `sovereign_state` or `continent` parse into [`Item`] and
//! [`Property`]. A [`Vocabulary`] resolves each kind to the opaque identifier
//! used in queries (`wd:Q3624078`, `wdt:P30`). The table is built once and
//! shared by reference; nothing mutates it after construction.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Category of a vocabulary entry, reported by lookup errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Item,
    Property,
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyKind::Item => write!(f, "item"),
            VocabularyKind::Property => write!(f, "property"),
        }
    }
}

/// Entity types that queries can select or filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    SovereignState,
    BigCity,
    City,
    Mountain,
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Item {
    pub const ALL: [Item; 11] = [
        Item::SovereignState,
        Item::BigCity,
        Item::City,
        Item::Mountain,
        Item::Africa,
        Item::Asia,
        Item::Europe,
        Item::NorthAmerica,
        Item::SouthAmerica,
        Item::Oceania,
        Item::Antarctica,
    ];

    /// The snake_case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Item::SovereignState => "sovereign_state",
            Item::BigCity => "big_city",
            Item::City => "city",
            Item::Mountain => "mountain",
            Item::Africa => "africa",
            Item::Asia => "asia",
            Item::Europe => "europe",
            Item::NorthAmerica => "north_america",
            Item::SouthAmerica => "south_america",
            Item::Oceania => "oceania",
            Item::Antarctica => "antarctica",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Item::ALL
            .into_iter()
            .find(|item| item.name() == s)
            .ok_or_else(|| Error::Lookup { kind: VocabularyKind::Item, key: s.to_string() })
    }
}

/// Relations between entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    InstanceOf,
    Country,
    Continent,
    Capital,
    LocatedIn,
    PartOf,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::InstanceOf,
        Property::Country,
        Property::Continent,
        Property::Capital,
        Property::LocatedIn,
        Property::PartOf,
    ];

    /// The snake_case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Property::InstanceOf => "instance_of",
            Property::Country => "country",
            Property::Continent => "continent",
            Property::Capital => "capital",
            Property::LocatedIn => "located_in",
            Property::PartOf => "part_of",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Property::ALL
            .into_iter()
            .find(|property| property.name() == s)
            .ok_or_else(|| Error::Lookup { kind: VocabularyKind::Property, key: s.to_string() })
    }
}

/// On-disk shape of a vocabulary table.
#[derive(Debug, Default, Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    items: HashMap<String, String>,
    #[serde(default)]
    properties: HashMap<String, String>,
}

/// Resolution table from vocabulary kinds to query identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    items: HashMap<Item, String>,
    properties: HashMap<Property, String>,
}

impl Vocabulary {
    /// An empty table. Every resolution fails until entries are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Wikidata identifiers for every known kind.
    pub fn wikidata() -> Self {
        Self::new()
            .with_item(Item::SovereignState, "wd:Q3624078")
            .with_item(Item::BigCity, "wd:Q1549591")
            .with_item(Item::City, "wd:Q515")
            .with_item(Item::Mountain, "wd:Q8502")
            .with_item(Item::Africa, "wd:Q15")
            .with_item(Item::Asia, "wd:Q48")
            .with_item(Item::Europe, "wd:Q46")
            .with_item(Item::NorthAmerica, "wd:Q49")
            .with_item(Item::SouthAmerica, "wd:Q18")
            .with_item(Item::Oceania, "wd:Q538")
            .with_item(Item::Antarctica, "wd:Q51")
            .with_property(Property::InstanceOf, "wdt:P31")
            .with_property(Property::Country, "wdt:P17")
            .with_property(Property::Continent, "wdt:P30")
            .with_property(Property::Capital, "wdt:P36")
            .with_property(Property::LocatedIn, "wdt:P131")
            .with_property(Property::PartOf, "wdt:P361")
    }

    /// Parses a JSON table of the form
    /// `{"items": {"big_city": "wd:Q1549591"}, "properties": {"country": "wdt:P17"}}`.
    ///
    /// Only the listed kinds resolve. Unknown names are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: VocabularyFile = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid vocabulary file: {}", e)))?;

        let mut vocabulary = Self::new();
        for (name, id) in file.items {
            vocabulary.items.insert(name.parse()?, id);
        }
        for (name, id) in file.properties {
            vocabulary.properties.insert(name.parse()?, id);
        }
        Ok(vocabulary)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_item(mut self, item: Item, id: impl Into<String>) -> Self {
        self.items.insert(item, id.into());
        self
    }

    pub fn with_property(mut self, property: Property, id: impl Into<String>) -> Self {
        self.properties.insert(property, id.into());
        self
    }

    /// Identifier of `item`, or a lookup error if the table lacks it.
    pub fn item(&self, item: Item) -> Result<&str> {
        self.items.get(&item).map(String::as_str).ok_or_else(|| Error::Lookup {
            kind: VocabularyKind::Item,
            key: item.name().to_string(),
        })
    }

    /// Identifier of `property`, or a lookup error if the table lacks it.
    pub fn property(&self, property: Property) -> Result<&str> {
        self.properties.get(&property).map(String::as_str).ok_or_else(|| Error::Lookup {
            kind: VocabularyKind::Property,
            key: property.name().to_string(),
        })
    }
}
