//! Place-name lookup table loaded from CSV.
//!
//! Each row is `name1,name2,lat,lon` without a header. The label of a place
//! is the first two fields joined by a single space, e.g. `Durham,NC,...`
//! becomes `Durham NC`. Rows that cannot be parsed are skipped with a warning.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::point::GeoPoint;

/// Minimum Jaro-Winkler similarity for a label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Label → coordinate lookup.
#[derive(Debug, Clone, Default)]
pub struct PlaceIndex {
    places: HashMap<String, GeoPoint>,
    source: Option<PathBuf>,
}

impl PlaceIndex {
    /// Load a places table from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut index = Self::from_reader(file)?;
        index.source = Some(path.to_path_buf());
        info!(path = %path.display(), places = index.len(), "loaded places");
        Ok(index)
    }

    /// Load a places table from any reader.
    ///
    /// Fails when the input holds no parsable row at all. When a label appears
    /// more than once the last row wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut places = HashMap::new();
        let mut skipped = 0usize;

        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            match parse_row(&record) {
                Some((label, point)) => {
                    places.insert(label, point);
                }
                None => {
                    skipped += 1;
                    warn!(row = row + 1, "skipping malformed place row");
                }
            }
        }

        if places.is_empty() {
            return Err(Error::PlaceFormat {
                message: format!("no usable rows ({skipped} skipped)"),
            });
        }

        Ok(Self {
            places,
            source: None,
        })
    }

    /// Build an index from already-resolved labels.
    pub fn from_places<I, S>(places: I) -> Self
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        Self {
            places: places
                .into_iter()
                .map(|(label, point)| (label.into(), point))
                .collect(),
            source: None,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, label: &str) -> Option<GeoPoint> {
        self.places.get(label).copied()
    }

    /// Lookup that fails with [`Error::UnknownPlace`] and suggestions on a miss.
    pub fn resolve(&self, label: &str) -> Result<GeoPoint> {
        self.get(label).ok_or_else(|| Error::UnknownPlace {
            name: label.to_string(),
            suggestions: self.fuzzy_matches(label, 3),
        })
    }

    /// Up to `limit` labels most similar to `label`, best first.
    pub fn fuzzy_matches(&self, label: &str, limit: usize) -> Vec<String> {
        let needle = label.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .places
            .keys()
            .map(|candidate| {
                (
                    strsim::jaro_winkler(&needle, &candidate.to_lowercase()),
                    candidate,
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// Sorted list of all labels.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.places.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Get the source path if the index was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn parse_row(record: &StringRecord) -> Option<(String, GeoPoint)> {
    if record.len() < 4 {
        return None;
    }
    let lat: f64 = record.get(2)?.parse().ok()?;
    let lon: f64 = record.get(3)?.parse().ok()?;
    let point = GeoPoint::new(lat, lon);
    if !point.is_finite() {
        return None;
    }
    let label = format!("{} {}", record.get(0)?, record.get(1)?);
    Some((label, point))
}
