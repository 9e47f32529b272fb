// ABOUTME: Farmer matching for submitted requirements
// ABOUTME: Case-insensitive substring scan over the static farmer directory

use crate::directory::{FarmerDirectory, FarmerRecord};

/// Matches submitted product names against a farmer directory. The
/// directory is a constructor dependency so it can later be replaced
/// with a real directory service without touching request logic.
#[derive(Debug, Clone)]
pub struct FarmerMatcher {
    directory: FarmerDirectory,
}

impl FarmerMatcher {
    pub fn new(directory: FarmerDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &FarmerDirectory {
        &self.directory
    }

    /// Linear scan: a farmer matches iff their product, case-folded, is
    /// a substring of the submitted product name. All matches are
    /// returned in directory order; no ranking or fuzzy matching.
    pub fn matches(&self, product_name: &str) -> Vec<&FarmerRecord> {
        let haystack = product_name.to_lowercase();

        self.directory
            .records()
            .iter()
            .filter(|farmer| haystack.contains(&farmer.product.to_lowercase()))
            .collect()
    }
}
