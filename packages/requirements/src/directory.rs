// ABOUTME: Static farmer directory
// ABOUTME: Read-only reference data mapping producible products to farmer contacts

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read farmer directory file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse farmer directory file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single directory entry: a farmer, the product they grow, and the
/// address a real notification would be sent to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerRecord {
    pub name: String,
    pub product: String,
    pub email: String,
}

/// Ordered, read-only farmer directory loaded once at process start.
/// Iteration order is the order matches are reported in.
#[derive(Debug, Clone)]
pub struct FarmerDirectory {
    records: Vec<FarmerRecord>,
}

impl FarmerDirectory {
    pub fn new(records: Vec<FarmerRecord>) -> Self {
        Self { records }
    }

    /// The default directory shipped with the service.
    pub fn builtin() -> Self {
        let record = |name: &str, product: &str, email: &str| FarmerRecord {
            name: name.to_string(),
            product: product.to_string(),
            email: email.to_string(),
        };

        Self::new(vec![
            record("Alice Green", "tomato", "alice@greenacres.example"),
            record("Ben Okafor", "corn", "ben@okafarms.example"),
            record("Carmen Silva", "mango", "carmen@silvaorchards.example"),
            record("Dev Patel", "rice", "dev@patelpaddies.example"),
            record("Elena Petrova", "potato", "elena@petrovafields.example"),
        ])
    }

    /// Load a directory from a JSON array of farmer records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let records: Vec<FarmerRecord> = serde_json::from_str(&content)?;

        info!(farmers = records.len(), path = %path.display(), "Loaded farmer directory from file");
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[FarmerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for FarmerDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
