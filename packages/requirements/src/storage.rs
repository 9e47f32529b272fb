// ABOUTME: In-memory requirement store
// ABOUTME: Append-only process-lifetime list of accepted submissions

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::{Requirement, RequirementCreateInput};

/// Process-lifetime store of accepted requirements. Cloning shares the
/// underlying list, so the handle can be handed to the request layer.
/// There is no delete or update path; data is lost on restart.
#[derive(Debug, Clone, Default)]
pub struct RequirementStore {
    entries: Arc<RwLock<Vec<Requirement>>>,
}

impl RequirementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize the submitted input into a `Requirement`, stamp the
    /// creation time, and append it. Returns the stored record.
    pub async fn append(&self, input: RequirementCreateInput) -> Requirement {
        let requirement = Requirement {
            product_name: input.product_name,
            quantity: input.quantity,
            delivery_date: input.delivery_date,
            notes: input.notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        };

        let mut entries = self.entries.write().await;
        entries.push(requirement.clone());
        debug!(total = entries.len(), "Stored product requirement");

        requirement
    }

    /// Snapshot of all stored requirements in submission order.
    pub async fn list(&self) -> Vec<Requirement> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(product_name: &str) -> RequirementCreateInput {
        RequirementCreateInput {
            product_name: product_name.to_string(),
            quantity: Some(10),
            delivery_date: "2026-09-15".to_string(),
            notes: Some("call before delivery".to_string()),
        }
    }

    #[tokio::test]
    async fn append_grows_store_by_one() {
        let store = RequirementStore::new();
        assert!(store.is_empty().await);

        let before = Utc::now();
        let stored = store.append(input("Tomatoes")).await;
        let after = Utc::now();

        assert_eq!(store.len().await, 1);
        assert_eq!(stored.product_name, "Tomatoes");
        assert!(stored.created_at >= before && stored.created_at <= after);
    }

    #[tokio::test]
    async fn list_preserves_submission_order() {
        let store = RequirementStore::new();
        for name in ["Tomatoes", "Corn", "Rice"] {
            store.append(input(name)).await;
        }

        let names: Vec<String> = store
            .list()
            .await
            .into_iter()
            .map(|r| r.product_name)
            .collect();

        assert_eq!(names, vec!["Tomatoes", "Corn", "Rice"]);
    }

    #[tokio::test]
    async fn blank_notes_are_normalized_to_none() {
        let store = RequirementStore::new();
        let stored = store
            .append(RequirementCreateInput {
                notes: Some("   ".to_string()),
                ..input("Mangoes")
            })
            .await;

        assert_eq!(stored.notes, None);
    }

    #[tokio::test]
    async fn clones_share_the_same_list() {
        let store = RequirementStore::new();
        let handle = store.clone();

        handle.append(input("Cassava")).await;

        assert_eq!(store.len().await, 1);
    }
}
