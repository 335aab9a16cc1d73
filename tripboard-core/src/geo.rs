use tripboard_boundary::{Coordinate, MapBbox};

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[must_use]
pub fn is_valid(pos: &Coordinate) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&pos.lat)
        && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&pos.lng)
}

/// Smallest box containing all points.
pub fn bounds_of<'a, I>(points: I) -> Option<MapBbox>
where
    I: IntoIterator<Item = &'a Coordinate>,
{
    points.into_iter().fold(None, |bbox, pos| {
        let Some(MapBbox { sw, ne }) = bbox else {
            return Some(MapBbox { sw: *pos, ne: *pos });
        };
        Some(MapBbox {
            sw: Coordinate::new(sw.lat.min(pos.lat), sw.lng.min(pos.lng)),
            ne: Coordinate::new(ne.lat.max(pos.lat), ne.lng.max(pos.lng)),
        })
    })
}

/// Extends the box on each side by `ratio` of its height and width
/// (the same rule Leaflet's `LatLngBounds.pad` applies).
#[must_use]
pub fn pad_bbox(bbox: &MapBbox, ratio: f64) -> MapBbox {
    let MapBbox { sw, ne } = bbox;
    let lat_ext = (ne.lat - sw.lat).abs() * ratio;
    let lng_ext = (ne.lng - sw.lng).abs() * ratio;
    MapBbox {
        sw: Coordinate::new(
            (sw.lat - lat_ext).max(LAT_DEG_MIN),
            (sw.lng - lng_ext).max(LNG_DEG_MIN),
        ),
        ne: Coordinate::new(
            (ne.lat + lat_ext).min(LAT_DEG_MAX),
            (ne.lng + lng_ext).min(LNG_DEG_MAX),
        ),
    }
}

/// A box that collapsed to a single point cannot be fitted.
#[must_use]
pub fn is_degenerate(bbox: &MapBbox) -> bool {
    bbox.sw == bbox.ne
}

/// Converts a GeoJSON position `[lon, lat, ..]`.
#[must_use]
pub fn from_lon_lat(position: &[f64]) -> Option<Coordinate> {
    let [lng, lat, ..] = position else {
        return None;
    };
    let pos = Coordinate::new(*lat, *lng);
    is_valid(&pos).then_some(pos)
}

/// Converts a GeoJSON line into map order. A line with less than two
/// positions or with any invalid position is rejected as a whole.
#[must_use]
pub fn path_from_lon_lat(positions: &[Vec<f64>]) -> Option<Vec<Coordinate>> {
    if positions.len() < 2 {
        return None;
    }
    positions.iter().map(|p| from_lon_lat(p)).collect()
}
