use crate::error::QuiverError;
use crate::types::catalog::Spot;
use std::collections::{BTreeSet, HashMap};

const MAX_SUGGESTIONS: usize = 10;

/// Lowercases and turns spaces and hyphens into underscores.
pub fn normalize_spot_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

#[derive(Debug, Clone, Default)]
pub struct SpotRegistry {
    spots: Vec<Spot>,
    index: HashMap<String, usize>,
}

impl SpotRegistry {
    /// Registers every spot under its normalized name and its raw lowercase
    /// name. A later spot with the same key replaces the earlier one.
    pub fn from_spots(spots: Vec<Spot>) -> Self {
        let mut index = HashMap::new();
        for (position, spot) in spots.iter().enumerate() {
            index.insert(normalize_spot_name(&spot.name), position);
            index.insert(spot.name.to_lowercase(), position);
        }
        Self { spots, index }
    }

    pub(crate) fn len(&self) -> usize {
        self.spots.len()
    }

    /// Exact match on the normalized or raw lowercase name; no fuzzy matching.
    pub fn lookup(&self, name: &str) -> Result<&Spot, QuiverError> {
        self.index
            .get(&normalize_spot_name(name))
            .or_else(|| self.index.get(&name.to_lowercase()))
            .map(|&position| &self.spots[position])
            .ok_or_else(|| QuiverError::SpotNotFound {
                query: name.to_string(),
                suggestions: self.suggestions(),
            })
    }

    /// One spot per distinct name, sorted by name.
    pub fn listing(&self) -> Vec<&Spot> {
        let mut seen = BTreeSet::new();
        let mut listing = self
            .spots
            .iter()
            .filter(|spot| seen.insert(spot.name.as_str()))
            .collect::<Vec<_>>();
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        listing
    }

    fn suggestions(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.spots
            .iter()
            .filter(|spot| seen.insert(spot.name.as_str()))
            .take(MAX_SUGGESTIONS)
            .map(|spot| spot.name.clone())
            .collect()
    }
}
