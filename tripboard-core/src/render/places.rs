use tripboard_boundary::{Coordinate, PlaceRecord};

use crate::map::MapMarker;

const UNKNOWN_NAME: &str = "Unknown";

/// A point of interest as shown in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub coordinate: Coordinate,
    pub source: String,
    pub external_id: Option<String>,
    /// Metres from the searched location.
    pub distance_m: Option<f64>,
}

impl Place {
    /// Returns `None` for records that cannot be placed on the map.
    #[must_use]
    pub fn from_record(record: PlaceRecord) -> Option<Self> {
        let PlaceRecord {
            id,
            name,
            address,
            latitude,
            longitude,
            categories,
            category,
            source,
            distance,
        } = record;
        let coordinate = Coordinate::new(latitude?, longitude?);
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        Some(Self {
            name,
            address: address.filter(|a| !a.trim().is_empty()),
            category: categories.or(category).filter(|c| !c.is_empty()),
            coordinate,
            source: source.unwrap_or_else(|| "osm".to_string()),
            external_id: id.map(|id| id.to_string()),
            distance_m: distance.filter(|d| d.is_finite()),
        })
    }

    #[must_use]
    pub fn distance_badge(&self) -> Option<String> {
        self.distance_m.map(|d| format!("{} m", d.round()))
    }

    #[must_use]
    pub fn marker(&self) -> MapMarker {
        MapMarker {
            at: self.coordinate,
            title: self.name.clone(),
            detail: self.address.clone(),
        }
    }
}

/// Converts the records of a places response, dropping unplaceable ones.
#[must_use]
pub fn places_from_records(records: Vec<PlaceRecord>) -> Vec<Place> {
    let total = records.len();
    let places: Vec<_> = records.into_iter().filter_map(Place::from_record).collect();
    if places.len() < total {
        log::warn!(
            "Dropped {} of {total} places without coordinates",
            total - places.len()
        );
    }
    places
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacesGrid {
    pub places: Vec<Place>,
}

impl PlacesGrid {
    #[must_use]
    pub const fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    #[must_use]
    pub fn count_label(&self) -> String {
        format!("{} results", self.places.len())
    }

    #[must_use]
    pub fn markers(&self) -> Vec<MapMarker> {
        self.places.iter().map(Place::marker).collect()
    }
}
