use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::Rands;
use super::matcher::Unit;

/// Identifier wrapper for a housing development.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevelopmentId(pub String);

impl fmt::Display for DevelopmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unit as held by the listing store. A unit without a published price cannot be matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRecord {
    pub id: String,
    pub price: Option<Rands>,
    pub unit_type: String,
}

impl UnitRecord {
    pub fn priced_unit(&self) -> Option<Unit> {
        self.price.map(|price| Unit {
            id: self.id.clone(),
            price,
            unit_type: self.unit_type.clone(),
        })
    }
}

/// Read-only view of the listing store, keyed by development.
pub trait UnitRepository: Send + Sync {
    fn units_for_development(
        &self,
        development_id: &DevelopmentId,
    ) -> Result<Vec<UnitRecord>, RepositoryError>;
}

/// Error enumeration for listing store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("development {0} not found")]
    NotFound(DevelopmentId),
    #[error("unit store unavailable: {0}")]
    Unavailable(String),
}
