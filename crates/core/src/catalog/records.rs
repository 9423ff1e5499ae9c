//! Permanent record collection for one entity kind

use merchplan_domain::EntityDeleted;

use super::entity::Entity;
use crate::storage::PersistIntent;

/// Ordered permanent records, unique by id.
///
/// Every mutation that changes state returns the intent describing the new
/// persisted value; mutations addressing an unknown id are silent no-ops and
/// return `None`.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    records: Vec<E>,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<E: Entity> EntityStore<E> {
    pub const fn new(records: Vec<E>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Insert `record`, or overwrite the record with the same id in place.
    pub fn upsert(&mut self, record: E) -> PersistIntent {
        match self.records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        self.snapshot()
    }

    /// Apply a field edit to the record with `id`.
    pub fn update(&mut self, id: &str, edit: &E::Edit) -> Option<PersistIntent> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        record.apply_edit(edit);
        Some(self.snapshot())
    }

    /// Remove the record with `id`, reporting the deletion.
    pub fn delete(&mut self, id: &str) -> Option<(PersistIntent, EntityDeleted)> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        self.records.remove(index);
        let event = EntityDeleted { kind: E::KIND, id: id.to_string() };
        Some((self.snapshot(), event))
    }

    pub fn replace_all(&mut self, records: Vec<E>) -> PersistIntent {
        self.records = records;
        self.snapshot()
    }

    fn snapshot(&self) -> PersistIntent {
        E::records_intent(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use merchplan_domain::{EntityKind, Sku, SkuEdit, Store};

    use super::*;

    fn sku(id: &str, price: f64) -> Sku {
        Sku { id: id.into(), sku: format!("SKU {id}"), price, cost: 1.0 }
    }

    #[test]
    fn upsert_inserts_then_overwrites_in_place() {
        let mut store = EntityStore::new(vec![sku("a", 1.0), sku("b", 2.0)]);
        store.upsert(sku("c", 3.0));
        let intent = store.upsert(sku("a", 9.0));

        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0].price, 9.0);
        assert!(matches!(intent, PersistIntent::Skus(ref skus) if skus.len() == 3));
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut store = EntityStore::new(vec![sku("a", 1.0)]);
        assert!(store.update("zzz", &SkuEdit::Price(5.0)).is_none());
        assert_eq!(store.get("a").unwrap().price, 1.0);

        assert!(store.update("a", &SkuEdit::Price(5.0)).is_some());
        assert_eq!(store.get("a").unwrap().price, 5.0);
    }

    #[test]
    fn delete_reports_event() {
        let mut store: EntityStore<Store> = EntityStore::new(vec![Store {
            id: "s1".into(),
            name: "Seattle Skyline Goods".into(),
            city: "Seattle".into(),
            state: "WA".into(),
        }]);

        let (intent, event) = store.delete("s1").unwrap();
        assert_eq!(event, EntityDeleted { kind: EntityKind::Store, id: "s1".into() });
        assert_eq!(intent, PersistIntent::Stores(Vec::new()));
        assert!(store.delete("s1").is_none());
    }
}
