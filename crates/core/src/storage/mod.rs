//! Persisted state: key-value port, identifier port and the persistence
//! boundary between engines and storage.

pub mod ids;
pub mod persistence;
pub mod ports;

pub use ids::UuidIdGenerator;
pub use persistence::{sentinel_key, PersistIntent, Persistor};
pub use ports::{IdGenerator, KeyValueStore};
