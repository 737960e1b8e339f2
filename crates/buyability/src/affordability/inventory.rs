//! CSV-backed unit inventory.
//!
//! Expected header: `development_id,unit_id,price,unit_type`. Prices are whole rands; an empty
//! price column marks a unit that has not been priced yet.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::Rands;
use super::repository::{DevelopmentId, RepositoryError, UnitRecord, UnitRepository};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("failed to open unit inventory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse unit inventory: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct InventoryRow {
    development_id: String,
    unit_id: String,
    #[serde(default)]
    price: Option<u64>,
    #[serde(default)]
    unit_type: String,
}

/// Units grouped by development, preserving the file order within each development.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitInventory {
    developments: BTreeMap<DevelopmentId, Vec<UnitRecord>>,
}

impl UnitInventory {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InventoryError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InventoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut inventory = Self::default();

        for row in csv_reader.deserialize::<InventoryRow>() {
            let row = row?;
            inventory.insert(
                DevelopmentId(row.development_id),
                UnitRecord {
                    id: row.unit_id,
                    price: row.price.map(Rands),
                    unit_type: row.unit_type,
                },
            );
        }

        Ok(inventory)
    }

    pub fn insert(&mut self, development_id: DevelopmentId, unit: UnitRecord) {
        self.developments
            .entry(development_id)
            .or_default()
            .push(unit);
    }

    pub fn units(&self, development_id: &DevelopmentId) -> Option<&[UnitRecord]> {
        self.developments.get(development_id).map(Vec::as_slice)
    }

    pub fn unit_count(&self) -> usize {
        self.developments.values().map(Vec::len).sum()
    }
}

impl UnitRepository for UnitInventory {
    fn units_for_development(
        &self,
        development_id: &DevelopmentId,
    ) -> Result<Vec<UnitRecord>, RepositoryError> {
        self.units(development_id)
            .map(<[UnitRecord]>::to_vec)
            .ok_or_else(|| RepositoryError::NotFound(development_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "development_id,unit_id,price,unit_type\n\
        harbour-view,HV-101,1450000,2 Bed Apartment\n\
        harbour-view,HV-102,,Penthouse\n\
        hillcrest,HC-01,980000,Townhouse\n";

    #[test]
    fn groups_units_by_development_in_file_order() {
        let inventory =
            UnitInventory::from_reader(Cursor::new(SAMPLE)).expect("inventory parses");

        assert_eq!(inventory.unit_count(), 3);
        let harbour = inventory
            .units(&DevelopmentId("harbour-view".to_string()))
            .expect("development present");
        assert_eq!(harbour.len(), 2);
        assert_eq!(harbour[0].id, "HV-101");
        assert_eq!(harbour[0].price, Some(Rands(1_450_000)));
        assert_eq!(harbour[1].price, None);
        assert_eq!(harbour[1].unit_type, "Penthouse");
    }

    #[test]
    fn unknown_development_is_not_found() {
        let inventory =
            UnitInventory::from_reader(Cursor::new(SAMPLE)).expect("inventory parses");
        let missing = DevelopmentId("nowhere".to_string());

        match inventory.units_for_development(&missing) {
            Err(RepositoryError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn malformed_price_is_a_csv_error() {
        let csv = "development_id,unit_id,price,unit_type\nx,1,cheap,Flat\n";
        let error = UnitInventory::from_reader(Cursor::new(csv)).expect_err("bad price fails");
        assert!(matches!(error, InventoryError::Csv(_)));
    }
}
