pub mod spots;

use crate::error::{QuiverError, Result};
use crate::types::catalog::{Board, Construction, Spot, DEFAULT_CONSTRUCTION};
use crate::types::config::CatalogPaths;
use serde::de::DeserializeOwned;
use spots::SpotRegistry;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Board catalog, construction table and spot registry, loaded once and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub boards: Vec<Board>,
    pub constructions: ConstructionTable,
    pub spots: SpotRegistry,
}

impl Catalog {
    pub fn load(paths: &CatalogPaths) -> Result<Self> {
        let constructions = load_constructions(&paths.constructions);
        let boards = load_boards(&paths.boards)?;
        let spots = load_spots(&paths.spots)?;
        Ok(Self {
            boards,
            constructions,
            spots,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ConstructionTable {
    entries: HashMap<String, Construction>,
    fallback: Construction,
}

impl ConstructionTable {
    pub fn new(entries: HashMap<String, Construction>) -> Self {
        Self {
            entries,
            fallback: Construction::builtin_pu(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(HashMap::from([(
            DEFAULT_CONSTRUCTION.to_string(),
            Construction::builtin_pu(),
        )]))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up `id`, falling back to the table's `pu` entry and then to the
    /// built-in `pu`. Never fails.
    pub fn resolve(&self, id: &str) -> &Construction {
        if let Some(construction) = self.entries.get(id) {
            return construction;
        }
        debug!(construction = id, "unknown construction, falling back to pu");
        self.entries
            .get(DEFAULT_CONSTRUCTION)
            .unwrap_or(&self.fallback)
    }
}

pub fn load_boards(path: &Path) -> Result<Vec<Board>> {
    let boards: Vec<Board> = read_json(path)?;
    info!("loaded {} boards from {}", boards.len(), path.display());
    Ok(boards)
}

pub fn load_spots(path: &Path) -> Result<SpotRegistry> {
    let spots: Vec<Spot> = read_json(path)?;
    info!("loaded {} surf spots from {}", spots.len(), path.display());
    Ok(SpotRegistry::from_spots(spots))
}

/// A missing or unreadable construction file is not fatal; the built-in
/// table is used instead.
pub fn load_constructions(path: &Path) -> ConstructionTable {
    match read_json::<HashMap<String, Construction>>(path) {
        Ok(entries) => {
            info!(
                "loaded {} construction types from {}",
                entries.len(),
                path.display()
            );
            ConstructionTable::new(entries)
        }
        Err(e) => {
            warn!("{e}; using built-in pu construction");
            ConstructionTable::builtin()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => QuiverError::CatalogNotFound(path.display().to_string()),
        _ => QuiverError::Io(e),
    })?;
    serde_json::from_str(&content)
        .map_err(|e| QuiverError::CatalogParse(format!("{}: {}", path.display(), e)))
}
