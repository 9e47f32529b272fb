// ABOUTME: Requirement type definitions
// ABOUTME: Structures for buyer product requirements submitted through the intake form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored buyer requirement. Append-only: created once per accepted
/// submission and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub product_name: String,
    pub quantity: Option<u32>,
    pub delivery_date: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Incoming submission payload. Every field is lenient: absent or
/// malformed fields fall back to their defaults instead of rejecting
/// the request, so a bad submission simply matches no farmers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementCreateInput {
    pub product_name: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: Option<u32>,
    pub delivery_date: String,
    pub notes: Option<String>,
}

/// Browser forms post every field as a string, so quantity arrives as
/// either a JSON number or a numeric string. Anything else maps to None.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    let quantity = match value {
        Some(serde_json::Value::Number(n)) => {
            n.as_u64().and_then(|n| u32::try_from(n).ok())
        }
        Some(serde_json::Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    Ok(quantity.filter(|q| *q > 0))
}
