//! The standard query shape.
//!
//! ```text
//! SELECT *
//! WHERE ?item is an instance of <item>
//!   AND ?item <property> ?property
//!   AND ?property <filter property> <filter item>     (optional)
//! LIMIT n                                             (optional)
//! ```
//!
//! For example, mountains whose country lies in Africa: item `mountain`,
//! property `country`, filtered by `continent` = `africa`.

use super::{limit_clause, validate_language, Clauses, DEFAULT_LANGUAGE};
use crate::error::Result;
use crate::vocabulary::{Item, Property, Vocabulary};

/// Builder for the standard query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardQuery {
    item: Item,
    property: Property,
    filter_property: Option<Property>,
    filter_item: Option<Item>,
    limit: Option<i64>,
    language: String,
}

impl StandardQuery {
    pub fn new(item: Item, property: Property) -> Self {
        Self {
            item,
            property,
            filter_property: None,
            filter_item: None,
            limit: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Builds from vocabulary names, failing on the first unknown one.
    pub fn from_names(
        item: &str,
        property: &str,
        filter_property: Option<&str>,
        filter_item: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Self> {
        let mut query = Self::new(item.parse()?, property.parse()?);
        query.filter_property = filter_property.map(str::parse::<Property>).transpose()?;
        query.filter_item = filter_item.map(str::parse::<Item>).transpose()?;
        query.limit = limit;
        Ok(query)
    }

    /// Property of `?property` used by the filter clause.
    ///
    /// The clause is only rendered when [`filter_item`](Self::filter_item) is
    /// set as well.
    pub fn filter_property(mut self, property: Property) -> Self {
        self.filter_property = Some(property);
        self
    }

    /// Value that `?property` must have for the filter property.
    pub fn filter_item(mut self, item: Item) -> Self {
        self.filter_item = Some(item);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn build(&self, vocabulary: &Vocabulary) -> Result<String> {
        validate_language(&self.language)?;

        let instance_of = vocabulary.property(Property::InstanceOf)?;
        let item = vocabulary.item(self.item)?;
        let property = vocabulary.property(self.property)?;

        let filter = match (self.filter_property, self.filter_item) {
            (Some(filter_property), Some(filter_item)) => Some(format!(
                "?property {} {} .",
                vocabulary.property(filter_property)?,
                vocabulary.item(filter_item)?
            )),
            _ => None,
        };

        let clauses = Clauses {
            base: format!(
                r#"SELECT *
WHERE {{
    ?item {instance_of} {item} ;
          rdfs:label ?itemLabel .
    FILTER(lang(?itemLabel) = "{lang}") .
    ?item {property} ?property .
    ?property rdfs:label ?propertyLabel .
    FILTER(lang(?propertyLabel) = "{lang}") .
"#,
                instance_of = instance_of,
                item = item,
                property = property,
                lang = self.language,
            ),
            filter,
            limit: limit_clause(self.limit)?,
        };

        Ok(clauses.render())
    }
}
