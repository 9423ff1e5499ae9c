//! Identifier generation

use uuid::Uuid;

use super::ports::IdGenerator;

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_uuids() {
        let ids = UuidIdGenerator;
        let generated: HashSet<String> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 64);
        assert!(generated.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }
}
