use tripboard_boundary::TravelQuery;

use super::{prelude::*, resolve_query};

/// Both ends of a trip are required; nothing is fetched otherwise.
pub fn travel_query(
    origin: Option<Coordinate>,
    destination: Option<&SelectedDestination>,
    mode: &str,
) -> Result<TravelQuery> {
    let (Some(origin), Some(destination)) = (origin, destination) else {
        return Err(Error::NoDestination);
    };
    Ok(TravelQuery {
        origin,
        destination: destination.coordinate,
        mode: mode.to_string(),
    })
}

#[must_use]
pub fn destination_from_location(location: ResolvedLocation) -> SelectedDestination {
    let ResolvedLocation { coordinate, label } = location;
    SelectedDestination {
        name: label,
        address: None,
        coordinate,
    }
}

/// Geocodes a destination typed by name. Blank input yields `None`.
pub async fn destination_by_name<G: TravelGateway>(
    gateway: &G,
    text: &str,
) -> Result<Option<SelectedDestination>> {
    if super::normalize_query(text).is_none() {
        return Ok(None);
    }
    resolve_query(gateway, text)
        .await?
        .map(destination_from_location)
        .map(Some)
        .ok_or(Error::DestinationNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination() -> SelectedDestination {
        SelectedDestination {
            name: "Louvre".into(),
            address: None,
            coordinate: Coordinate::new(48.86, 2.33),
        }
    }

    #[test]
    fn require_origin_and_destination() {
        let origin = Coordinate::new(48.85, 2.35);
        assert_eq!(
            travel_query(None, Some(&destination()), "driving"),
            Err(Error::NoDestination)
        );
        assert_eq!(
            travel_query(Some(origin), None, "driving"),
            Err(Error::NoDestination)
        );
        let query = travel_query(Some(origin), Some(&destination()), "walking").unwrap();
        assert_eq!(query.origin, origin);
        assert_eq!(query.destination, Coordinate::new(48.86, 2.33));
        assert_eq!(query.mode, "walking");
    }
}
