use tripboard_boundary::{GeocodeHit, GeocodeResponse};

use super::prelude::*;

/// Trimmed search text, `None` if there is nothing to search for.
#[must_use]
pub fn normalize_query(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Takes the first match of a geocoding response.
#[must_use]
pub fn first_location(response: GeocodeResponse, query: &str) -> Option<ResolvedLocation> {
    match response {
        GeocodeResponse::Results { results } => {
            let hit = results.into_iter().next()?;
            let coordinate = Coordinate::new(hit.lat, hit.lon);
            let label = hit
                .display_name
                .clone()
                .unwrap_or_else(|| hit_label(&hit, query));
            Some(ResolvedLocation { coordinate, label })
        }
        GeocodeResponse::Centered { center, label } => Some(ResolvedLocation {
            coordinate: center,
            label: label.unwrap_or_else(|| query.to_string()),
        }),
        GeocodeResponse::Single(hit) => Some(ResolvedLocation {
            coordinate: Coordinate::new(hit.lat, hit.lon),
            label: hit_label(&hit, query),
        }),
    }
}

fn hit_label(hit: &GeocodeHit, query: &str) -> String {
    match (&hit.name, &hit.country) {
        (Some(name), Some(country)) => format!("{name}, {country}"),
        (Some(name), None) => name.clone(),
        _ => hit
            .display_name
            .clone()
            .unwrap_or_else(|| query.to_string()),
    }
}

/// Geocodes a free-text query. Blank input is resolved to `None`
/// without asking the backend.
pub async fn resolve_query<G: TravelGateway>(
    gateway: &G,
    text: &str,
) -> Result<Option<ResolvedLocation>> {
    let Some(query) = normalize_query(text) else {
        return Ok(None);
    };
    log::debug!("Geocode '{query}'");
    let response = gateway.geocode(query).await?;
    let location = first_location(response, query);
    if location.is_none() {
        log::info!("No location found for '{query}'");
    }
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GeocodeResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn blank_queries() {
        assert_eq!(normalize_query("  Paris "), Some("Paris"));
        assert_eq!(normalize_query(" \t\n"), None);
        assert_eq!(normalize_query(""), None);
    }

    #[test]
    fn first_of_many_results() {
        let resp = response(
            r#"{"results":[
                {"lat":48.85,"lon":2.35,"display_name":"Paris, France"},
                {"lat":33.66,"lon":-95.55,"display_name":"Paris, Texas"}
            ]}"#,
        );
        let location = first_location(resp, "Paris").unwrap();
        assert_eq!(location.coordinate, Coordinate::new(48.85, 2.35));
        assert_eq!(location.label, "Paris, France");
    }

    #[test]
    fn zero_results() {
        assert!(first_location(response(r#"{"results":[]}"#), "Atlantis").is_none());
    }

    #[test]
    fn single_city_label() {
        let resp = response(r#"{"lat":52.52,"lon":13.405,"name":"Berlin","country":"DE"}"#);
        assert_eq!(first_location(resp, "berlin").unwrap().label, "Berlin, DE");
    }

    #[test]
    fn centered_without_label() {
        let resp = response(r#"{"center":{"lat":41.9,"lon":12.5}}"#);
        let location = first_location(resp, "Rome").unwrap();
        assert_eq!(location.label, "Rome");
        assert_eq!(location.coordinate, Coordinate::new(41.9, 12.5));
    }
}
