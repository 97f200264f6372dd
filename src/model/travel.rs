use std::fs;
use std::path::Path;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::model::condition::AttributeFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popularity {
    High,
    Low,
}

impl Popularity {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "High" => Some(Self::High),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// One place from the travel dataset.
///
/// `city` and `popularity` are lifted out for filtering; the full source
/// object is kept untouched (key order included) so it can be handed to
/// the model verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelEntry {
    city: String,
    popularity: Option<Popularity>,
    fields: Map<String, Value>,
}

impl TravelEntry {
    /// Returns `None` when the object has no string `city`.
    pub fn from_object(fields: Map<String, Value>) -> Option<Self> {
        let city = fields.get("city")?.as_str()?.to_string();
        let popularity = fields
            .get("popularity")
            .and_then(Value::as_str)
            .and_then(Popularity::parse);

        Some(Self {
            city,
            popularity,
            fields,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn popularity(&self) -> Option<Popularity> {
        self.popularity
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn passes(&self, filter: AttributeFilter) -> bool {
        match filter {
            AttributeFilter::All => true,
            AttributeFilter::High => self.popularity == Some(Popularity::High),
            AttributeFilter::Low => self.popularity == Some(Popularity::Low),
        }
    }
}

impl Serialize for TravelEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/* =========================
   Dataset
   ========================= */

/// Read-only travel data for the whole process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<TravelEntry>,
}

impl Dataset {
    pub fn new(entries: Vec<TravelEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of objects. Elements that are not objects or
    /// that lack a `city` are skipped.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<Value> = serde_json::from_str(json)?;
        let total = items.len();

        let entries: Vec<TravelEntry> = items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => TravelEntry::from_object(map),
                _ => None,
            })
            .collect();

        if entries.len() < total {
            warn!(
                skipped = total - entries.len(),
                "dataset entries without a city were skipped"
            );
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TravelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for `city`, narrowed by `filter`, in source order.
    /// An unknown city gives an empty list.
    pub fn filter(&self, city: &str, filter: AttributeFilter) -> Vec<&TravelEntry> {
        self.entries
            .iter()
            .filter(|e| e.city == city && e.passes(filter))
            .collect()
    }

    /// Distinct cities in first-seen order.
    pub fn cities(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.city.as_str()) {
                out.push(&entry.city);
            }
        }
        out
    }
}

/// Load the dataset from disk. Any failure degrades to an empty dataset.
pub fn load_dataset(path: &Path) -> Dataset {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "travel dataset unavailable, using empty dataset");
            return Dataset::default();
        }
    };

    match Dataset::from_json_str(&contents) {
        Ok(dataset) => {
            info!(path = %path.display(), entries = dataset.len(), "travel dataset loaded");
            dataset
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "travel dataset is not a JSON array, using empty dataset");
            Dataset::default()
        }
    }
}
