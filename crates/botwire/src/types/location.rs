use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A point on the map.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Bitwise, so equal coordinates hash equal.
        self.longitude.to_bits().hash(state);
        self.latitude.to_bits().hash(state);
    }
}
