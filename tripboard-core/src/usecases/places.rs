use tripboard_boundary::{PlaceSource, PlacesQuery};

use super::prelude::*;
use crate::render::places_from_records;

#[must_use]
pub fn places_query(at: Coordinate, category: Option<&str>, source: PlaceSource) -> PlacesQuery {
    PlacesQuery {
        at,
        query: category.map(ToString::to_string),
        source,
    }
}

/// Points of interest around `query.at` that can be shown on the map.
pub async fn places_for<G: TravelGateway>(gateway: &G, query: &PlacesQuery) -> Result<Vec<Place>> {
    let records = gateway.places(query).await?;
    Ok(places_from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_with_category() {
        let at = Coordinate::new(48.85, 2.35);
        let query = places_query(at, Some("museum"), PlaceSource::Osm);
        assert_eq!(query.query.as_deref(), Some("museum"));
        assert_eq!(query.source, PlaceSource::Osm);
        assert!(places_query(at, None, PlaceSource::Auto).query.is_none());
    }
}
