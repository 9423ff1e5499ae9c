//! One-time demo data for fresh installations

use merchplan_domain::{Result, SeedConfig, Sku, Store};
use tracing::info;

use crate::catalog::{CatalogService, Entity};
use crate::storage::IdGenerator;

const DEMO_STORES: [(&str, &str, &str); 5] = [
    ("Atlanta Outfitters", "Atlanta", "GA"),
    ("Chicago Charm Boutique", "Chicago", "IL"),
    ("Houston Harvest Market", "Houston", "TX"),
    ("Seattle Skyline Goods", "Seattle", "WA"),
    ("Miami Breeze Apparel", "Miami", "FL"),
];

const DEMO_SKUS: [(&str, f64, f64); 3] = [
    ("Cotton Polo Shirt", 139.99, 10.78),
    ("Tassel Fringe Handbag", 134.99, 20.79),
    ("Minimalist Leather Watch", 49.99, 49.89),
];

/// Which kinds were seeded by [`seed_if_needed`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub stores: bool,
    pub skus: bool,
}

pub fn demo_stores(ids: &dyn IdGenerator) -> Vec<Store> {
    DEMO_STORES
        .iter()
        .map(|(name, city, state)| Store {
            id: ids.next_id(),
            name: (*name).to_string(),
            city: (*city).to_string(),
            state: (*state).to_string(),
        })
        .collect()
}

pub fn demo_skus(ids: &dyn IdGenerator) -> Vec<Sku> {
    DEMO_SKUS
        .iter()
        .map(|(sku, price, cost)| Sku { id: ids.next_id(), sku: (*sku).to_string(), price: *price, cost: *cost })
        .collect()
}

/// Seed stores and SKUs independently.
///
/// A kind is seeded only when its sentinel is absent and its collection is
/// empty; the sentinel is written afterwards so seeding happens once.
pub fn seed_if_needed(
    config: &SeedConfig,
    stores: &mut CatalogService<Store>,
    skus: &mut CatalogService<Sku>,
) -> Result<SeedReport> {
    if !config.enabled {
        return Ok(SeedReport::default());
    }
    Ok(SeedReport {
        stores: seed_kind(stores, demo_stores)?,
        skus: seed_kind(skus, demo_skus)?,
    })
}

fn seed_kind<E, F>(service: &mut CatalogService<E>, demo: F) -> Result<bool>
where
    E: Entity,
    F: FnOnce(&dyn IdGenerator) -> Vec<E>,
{
    if service.is_seeded() || !service.list().is_empty() {
        return Ok(false);
    }
    let records = demo(service.ids());
    let count = records.len();
    service.replace_all(records)?;
    service.mark_seeded()?;
    info!(kind = %E::KIND, count, "seeded demo data");
    Ok(true)
}
