use tripboard_boundary::NewBookmark;

use super::prelude::*;

/// The bookmark to store for a place of the grid.
#[must_use]
pub fn new_bookmark(place: &Place) -> NewBookmark {
    let Place {
        name,
        address,
        category,
        coordinate,
        external_id,
        ..
    } = place;
    NewBookmark {
        name: name.clone(),
        latitude: coordinate.lat,
        longitude: coordinate.lng,
        address: address.clone(),
        city: None,
        country: None,
        notes: None,
        category: category.clone(),
        external_id: external_id.clone(),
    }
}
