// src/domain/manifest.rs

use serde::Serialize;

use crate::normalize;

/// Which layout strategy produced a manifest. Informational only:
/// identity and change hashing never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceLayout {
    Horizontal,
    Columnar,
    FreeText,
}

/// One offloaded piece of cargo, as extracted. Numeric fields keep the
/// raw text; accessors normalize on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRecord {
    pub awb: String,
    pub pieces: String,
    pub weight: String,
    pub description: String,
    pub reason: String,
    /// Trolley / ULD identifier, when the source carries one. In the
    /// horizontal layout this arrives on its own continuation line and
    /// belongs to the shipment above it.
    pub uld: String,
}

impl ShipmentRecord {
    pub fn piece_count(&self) -> i64 {
        normalize::to_int(&self.pieces)
    }

    pub fn weight_kg(&self) -> f64 {
        normalize::to_float(&self.weight)
    }
}

/// One offload event for one flight. Shipments stay in document order;
/// the first row carries aggregate totals in some source renderings, so
/// order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightManifest {
    pub flight: String,
    pub date: String,
    pub destination: String,
    /// Scheduled/estimated departure as found, blank when the layout has
    /// no such column.
    pub std_etd: String,
    pub shipments: Vec<ShipmentRecord>,
    pub layout: SourceLayout,
}

impl FlightManifest {
    pub fn new(layout: SourceLayout) -> Self {
        Self {
            flight: String::new(),
            date: String::new(),
            destination: String::new(),
            std_etd: String::new(),
            shipments: Vec::new(),
            layout,
        }
    }

    /// A manifest is only worth keeping if it identifies a flight or
    /// carries at least one shipment.
    pub fn has_content(&self) -> bool {
        !self.flight.trim().is_empty() || !self.shipments.is_empty()
    }

    pub fn total_pieces(&self) -> i64 {
        self.shipments.iter().map(|s| s.piece_count()).sum()
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.shipments.iter().map(|s| s.weight_kg()).sum()
    }
}
