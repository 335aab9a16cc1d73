use js_sys::Promise;
use leptos::window;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError};

use tripboard_boundary::Coordinate;
use tripboard_core::GeolocationError;

/// Asks the browser for the current device position.
pub async fn current_position() -> Result<Coordinate, GeolocationError> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;
    let mut request_failed = false;
    let promise = Promise::new(&mut |resolve, reject| {
        request_failed = geolocation
            .get_current_position_with_error_callback(&resolve, Some(&reject))
            .is_err();
    });
    if request_failed {
        return Err(GeolocationError::Unsupported);
    }
    match JsFuture::from(promise).await {
        Ok(position) => {
            let coords = position
                .dyn_into::<GeolocationPosition>()
                .map_err(|_| GeolocationError::Denied("Invalid position".to_string()))?
                .coords();
            Ok(Coordinate::new(coords.latitude(), coords.longitude()))
        }
        Err(err) => {
            let msg = err
                .dyn_into::<GeolocationPositionError>()
                .map_or_else(|_| "unknown error".to_string(), |e| e.message());
            Err(GeolocationError::Denied(msg))
        }
    }
}
