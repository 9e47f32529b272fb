// ABOUTME: Requirement intake domain for Farmlink
// ABOUTME: Provides types, in-memory storage, farmer directory, matching, and simulated notification

pub mod directory;
pub mod matcher;
pub mod notifier;
pub mod storage;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export main types
pub use directory::{DirectoryError, FarmerDirectory, FarmerRecord};
pub use matcher::FarmerMatcher;
pub use notifier::{LogNotifier, Notifier};
pub use storage::RequirementStore;
pub use types::{Requirement, RequirementCreateInput};
