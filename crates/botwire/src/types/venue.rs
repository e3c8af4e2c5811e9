use serde::{Deserialize, Serialize};

use super::Location;

/// A venue: a location with a name and address.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}

natural_key!(Venue => location, title);

impl Venue {
    pub fn new(location: Location, title: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            location,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
        }
    }
}
