//! Warehouse candidate persistence
//!
//! The whole list lives in one JSON array file. It is read once when the
//! store is opened and rewritten after every mutation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};
use uuid::Uuid;

use crate::types::{Place, WarehouseCandidate};

pub struct CandidateStore {
    path: PathBuf,
    candidates: Vec<WarehouseCandidate>,
}

impl CandidateStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let candidates = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read candidate store {}", path.display()))?;
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&raw)
                    .with_context(|| format!("Corrupt candidate store {}", path.display()))?
            }
        } else {
            Vec::new()
        };

        debug!("Loaded {} warehouse candidates from {}", candidates.len(), path.display());

        Ok(Self { path, candidates })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &[WarehouseCandidate] {
        &self.candidates
    }

    /// Candidates of one category, in insertion order
    pub fn for_category(&self, category: &str) -> Vec<WarehouseCandidate> {
        self.candidates
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }

    /// Add a place picked from geocoding results under `category`
    pub fn add(&mut self, category: &str, place: &Place) -> Result<WarehouseCandidate> {
        let candidate = WarehouseCandidate {
            id: Uuid::new_v4().to_string(),
            category: category.to_string(),
            address: place.display_name.clone(),
            lat: place.coordinates.lat,
            lng: place.coordinates.lng,
        };

        self.candidates.push(candidate.clone());
        self.save()?;

        info!("Added warehouse {} ({}) for {}", candidate.id, candidate.short_address(), category);
        Ok(candidate)
    }

    /// Delete by id. Returns whether a candidate was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.candidates.len();
        self.candidates.retain(|c| c.id != id);

        if self.candidates.len() == before {
            return Ok(false);
        }

        self.save()?;
        info!("Deleted warehouse {}", id);
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.candidates)
            .context("Failed to serialize warehouse candidates")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write candidate store {}", self.path.display()))
    }
}
