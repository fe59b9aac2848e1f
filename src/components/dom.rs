//! Small helpers over `web_sys` shared by the page components.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height of the fixed navbar; anchors scroll to just below it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Attach a listener to `window` for the lifetime of the page.
pub fn on_window(event: &str, handler: impl FnMut() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb: Closure<dyn FnMut()> = Closure::new(handler);
	if window
		.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
		.is_err()
	{
		warn!("Failed to listen for window `{}` events", event);
	}
	cb.forget();
}

pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Document offset that puts an element with viewport-relative `element_top`
/// just under the navbar.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
	element_top + scroll_y - header_offset
}

/// Smoothly scroll to the element matching `selector` (an `#id` href).
/// Missing targets are ignored.
pub fn smooth_scroll_to(selector: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(target) = window
		.document()
		.and_then(|d| d.query_selector(selector).ok().flatten())
	else {
		return;
	};

	let top = target.get_bounding_client_rect().top();
	let options = ScrollToOptions::new();
	options.set_top(scroll_target(top, scroll_y(), HEADER_OFFSET));
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}
