//! Browser geolocation lookup for the district selector.
//!
//! A successful position lookup resolves to the default demonstration
//! district; the coordinates are not reverse-geocoded in this deployment.
//! Requires a browser environment; SSR paths report unsupported.

use crate::util::catalog::District;
#[cfg(feature = "hydrate")]
use crate::util::catalog::default_district;

/// Ask the browser for the device position and resolve a district.
///
/// `on_result` is invoked exactly once, after this function returns on the
/// success/error paths that go through the browser callback.
pub fn detect_district(on_result: impl Fn(Result<&'static District, String>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok()) else {
            on_result(Err("geolocation unsupported".to_owned()));
            return;
        };

        let on_result = Rc::new(on_result);
        let on_success = {
            let on_result = on_result.clone();
            Closure::<dyn FnMut(wasm_bindgen::JsValue)>::new(move |_position| {
                on_result(Ok(default_district()));
            })
        };
        let on_error = {
            let on_result = on_result.clone();
            Closure::<dyn FnMut(wasm_bindgen::JsValue)>::new(move |_error| {
                on_result(Err("position lookup failed".to_owned()));
            })
        };

        if geolocation
            .get_current_position_with_error_callback(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .is_err()
        {
            on_result(Err("position lookup failed".to_owned()));
            return;
        }

        // One-shot callbacks that outlive this call; the browser holds the
        // only reference after forget.
        on_success.forget();
        on_error.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        on_result(Err("geolocation unsupported".to_owned()));
    }
}
