//! # Catalog Commands
//!
//! Add, edit and look up the pieces on the shelf.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Cashier types "ab12cd"                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Is query a HUID? (6 letters/digits)      │                         │
//! │  │  YES: exact HUID match first              │──► Found? Return [1]    │
//! │  │  NO:  substring match on SKU and name     │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<JewelryProduct>, sorted by SKU                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use aurum_core::validation::validate_huid;
use aurum_core::{JewelryProduct, MakingCharge, MetalType, Purity, ProductField};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Default number of products returned by a lookup.
const DEFAULT_LIMIT: usize = 20;

/// Upper bound on products returned by a lookup.
const MAX_LIMIT: usize = 100;

/// Request to add a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub huid: Option<String>,
    pub metal: MetalType,
    pub fineness: u16,
    pub gross_weight_mg: i64,
    pub net_weight_mg: i64,
    #[serde(default)]
    pub wastage_bps: i64,
    pub making_charge: MakingCharge,
    #[serde(default)]
    pub stone_value_cents: i64,
    #[serde(default)]
    pub current_stock: i64,
}

impl NewProductRequest {
    fn into_product(self) -> Result<JewelryProduct, ApiError> {
        let purity = Purity::from_fineness(self.fineness).ok_or_else(|| {
            ApiError::validation(format!("fineness {} is not in 1..=999", self.fineness))
        })?;
        let huid = self
            .huid
            .as_deref()
            .map(validate_huid)
            .transpose()
            .map_err(|e| ApiError::validation(e.to_string()))?;

        let mut product = JewelryProduct::new(&self.sku, &self.name, self.metal, purity);
        product.huid = huid;
        product.gross_weight_mg = self.gross_weight_mg;
        product.net_weight_mg = self.net_weight_mg;
        product.wastage_bps = self.wastage_bps;
        product.making_charge = self.making_charge;
        product.stone_value_cents = self.stone_value_cents;
        product.current_stock = self.current_stock;
        Ok(product)
    }
}

/// Checks if a query looks like a HUID (exactly 6 ASCII letters or digits).
fn is_huid_query(query: &str) -> bool {
    validate_huid(query).is_ok()
}

/// Adds a product and returns it with its new ID.
pub fn add_product(
    catalog: &CatalogState,
    request: NewProductRequest,
) -> Result<JewelryProduct, ApiError> {
    debug!(sku = %request.sku, "add_product command");

    let product = request.into_product()?;
    catalog.insert(product.clone())?;

    info!(
        product_id = %product.id,
        sku = %product.sku,
        metal = %product.metal,
        purity = %product.purity,
        "Product added"
    );
    Ok(product)
}

/// Updates one field of a product. A rejected update leaves it unchanged.
pub fn update_product(
    catalog: &CatalogState,
    product_id: &str,
    update: ProductField,
) -> Result<JewelryProduct, ApiError> {
    debug!(product_id = %product_id, update = ?update, "update_product command");
    catalog.update(product_id, update)
}

/// Lists products matching `query` (all when empty).
///
/// ## Arguments
/// * `query` - HUID, or part of a SKU or name
/// * `include_inactive` - Also return soft-deleted products
/// * `limit` - Maximum results (default: 20, max: 100)
pub fn list_products(
    catalog: &CatalogState,
    query: &str,
    include_inactive: bool,
    limit: Option<usize>,
) -> Vec<JewelryProduct> {
    let query = query.trim();
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    debug!(query = %query, limit = limit, "list_products command");

    catalog.with_products(|products| {
        let visible: Vec<&JewelryProduct> = products
            .iter()
            .filter(|p| include_inactive || p.is_active)
            .collect();

        if is_huid_query(query) {
            let huid = query.to_ascii_uppercase();
            if let Some(hit) = visible.iter().find(|p| p.huid.as_deref() == Some(huid.as_str())) {
                return vec![(*hit).clone()];
            }
        }

        let needle = query.to_lowercase();
        let mut found: Vec<JewelryProduct> = visible
            .into_iter()
            .filter(|p| {
                needle.is_empty()
                    || p.sku.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        found.sort_by(|a, b| a.sku.cmp(&b.sku));
        found.truncate(limit);
        found
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn request(sku: &str, name: &str) -> NewProductRequest {
        NewProductRequest {
            sku: sku.to_string(),
            name: name.to_string(),
            huid: None,
            metal: MetalType::Gold,
            fineness: 916,
            gross_weight_mg: 10_000,
            net_weight_mg: 9_800,
            wastage_bps: 800,
            making_charge: MakingCharge::Flat { amount_cents: 500000 },
            stone_value_cents: 0,
            current_stock: 1,
        }
    }

    #[test]
    fn test_huid_query_detection() {
        assert!(is_huid_query("AB12CD"));
        assert!(is_huid_query("ab12cd"));
        assert!(!is_huid_query("AB12C"));
        assert!(!is_huid_query("AB-2CD"));
        assert!(!is_huid_query(""));
    }

    #[test]
    fn test_add_product_normalizes_huid() {
        let catalog = CatalogState::new();
        let mut req = request("BNG-0001", "Plain Bangle");
        req.huid = Some(" ab12cd ".to_string());

        let product = add_product(&catalog, req).unwrap();
        assert_eq!(product.huid.as_deref(), Some("AB12CD"));
        assert_eq!(product.purity, Purity::K22);
        assert_eq!(catalog.get(&product.id).unwrap(), product);
    }

    #[test]
    fn test_add_product_rejects_bad_input() {
        let catalog = CatalogState::new();

        let mut req = request("BNG-0001", "Plain Bangle");
        req.fineness = 0;
        assert_eq!(add_product(&catalog, req).unwrap_err().code, ErrorCode::ValidationError);

        let mut req = request("BNG-0001", "Plain Bangle");
        req.net_weight_mg = 12_000;
        assert_eq!(add_product(&catalog, req).unwrap_err().code, ErrorCode::ValidationError);

        add_product(&catalog, request("BNG-0001", "Plain Bangle")).unwrap();
        let err = add_product(&catalog, request("bng-0001", "Another Bangle")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_update_product() {
        let catalog = CatalogState::new();
        let product = add_product(&catalog, request("BNG-0001", "Plain Bangle")).unwrap();

        let updated =
            update_product(&catalog, &product.id, ProductField::Huid(Some("xy98zw".to_string())))
                .unwrap();
        assert_eq!(updated.huid.as_deref(), Some("XY98ZW"));

        let err = update_product(&catalog, &product.id, ProductField::WastageBps(-1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = update_product(&catalog, "missing", ProductField::IsActive(false)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_list_products() {
        let catalog = CatalogState::new();
        let mut req = request("RNG-0002", "Solitaire Ring");
        req.huid = Some("AB12CD".to_string());
        add_product(&catalog, req).unwrap();
        let bangle = add_product(&catalog, request("BNG-0001", "Plain Bangle")).unwrap();
        add_product(&catalog, request("BNG-0003", "Kada Bangle")).unwrap();

        let skus = |found: Vec<JewelryProduct>| -> Vec<String> {
            found.into_iter().map(|p| p.sku).collect()
        };

        assert_eq!(skus(list_products(&catalog, "", false, None)), vec!["BNG-0001", "BNG-0003", "RNG-0002"]);
        assert_eq!(skus(list_products(&catalog, "bangle", false, None)), vec!["BNG-0001", "BNG-0003"]);
        assert_eq!(skus(list_products(&catalog, "ab12cd", false, None)), vec!["RNG-0002"]);
        assert_eq!(list_products(&catalog, "", false, Some(1)).len(), 1);

        update_product(&catalog, &bangle.id, ProductField::IsActive(false)).unwrap();
        assert_eq!(skus(list_products(&catalog, "bangle", false, None)), vec!["BNG-0003"]);
        assert_eq!(list_products(&catalog, "bangle", true, None).len(), 2);
    }
}
