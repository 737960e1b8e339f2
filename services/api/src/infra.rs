use buyability::affordability::{Cents, UnitInventory};
use buyability::config::InventoryConfig;
use buyability::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Served when no inventory file is configured.
pub(crate) const DEMO_INVENTORY: &str = "\
development_id,unit_id,price,unit_type
harbour-view,HV-101,1450000,2 Bed Apartment
harbour-view,HV-102,1625000,2 Bed Apartment
harbour-view,HV-201,1980000,3 Bed Apartment
harbour-view,HV-PH1,,Penthouse
hillcrest-gardens,HG-01,895000,1 Bed Simplex
hillcrest-gardens,HG-02,1150000,2 Bed Townhouse
hillcrest-gardens,HG-03,1395000,3 Bed Townhouse
";

pub(crate) fn load_inventory(config: &InventoryConfig) -> Result<UnitInventory, AppError> {
    match config.path.as_deref() {
        Some(path) => load_inventory_file(path),
        None => {
            let inventory = UnitInventory::from_reader(Cursor::new(DEMO_INVENTORY))?;
            info!(units = inventory.unit_count(), "serving demo unit inventory");
            Ok(inventory)
        }
    }
}

pub(crate) fn load_inventory_file(path: &Path) -> Result<UnitInventory, AppError> {
    let inventory = UnitInventory::from_path(path)?;
    info!(
        path = %path.display(),
        units = inventory.unit_count(),
        "unit inventory loaded"
    );
    Ok(inventory)
}

/// Whole-rand CLI amount to the cents the engine works in.
pub(crate) fn rands(amount: u64) -> Cents {
    Cents::from_rands(amount)
}

/// Whole-rand CLI amount to a signed cents payload field.
pub(crate) fn rands_payload(amount: u64) -> i64 {
    i64::try_from(rands(amount).value()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use buyability::affordability::DevelopmentId;
    use std::path::PathBuf;

    #[test]
    fn demo_inventory_parses() {
        let inventory =
            load_inventory(&InventoryConfig::default()).expect("demo inventory loads");
        assert_eq!(inventory.unit_count(), 7);
        let harbour = inventory
            .units(&DevelopmentId("harbour-view".to_string()))
            .expect("harbour view present");
        assert_eq!(harbour.len(), 4);
        assert!(harbour[3].price.is_none());
    }

    #[test]
    fn missing_inventory_file_is_an_error() {
        let config = InventoryConfig {
            path: Some(PathBuf::from("/nonexistent/units.csv")),
        };
        assert!(matches!(load_inventory(&config), Err(AppError::Inventory(_))));
    }

    #[test]
    fn rand_amounts_convert_to_cents() {
        assert_eq!(rands(1_250), Cents(125_000));
        assert_eq!(rands_payload(30_000), 3_000_000);
        assert_eq!(rands_payload(u64::MAX), i64::MAX);
    }
}
