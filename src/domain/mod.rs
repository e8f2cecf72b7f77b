pub mod changes;
pub mod manifest;

// Re-exports for convenience
pub use changes::{ChangeClass, ChangeState, MemoryStateStore, StateStore};
pub use manifest::{FlightManifest, ShipmentRecord, SourceLayout};
