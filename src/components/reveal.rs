//! Fade elements in the first time they scroll into view.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const THRESHOLD: f64 = 0.1;
/// Reveal slightly before the element's bottom edge clears the fold.
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Delay added per element so a row of cards cascades in.
pub const STAGGER_SECS: f64 = 0.1;

/// Initial style for the `index`-th element of a revealed group.
pub fn hidden_style(index: usize) -> String {
	format!(
		"opacity: 0; transform: translateY(30px); transition: all 0.6s ease {:.1}s;",
		index as f64 * STAGGER_SECS
	)
}

fn show(element: &HtmlElement) {
	let style = element.style();
	let _ = style.set_property("opacity", "1");
	let _ = style.set_property("transform", "translateY(0)");
}

/// Hide every element under `root` matching `selector`, then reveal each one
/// when it intersects the viewport.
pub fn reveal_on_scroll(root: &Element, selector: &str) {
	let Ok(elements) = root.query_selector_all(selector) else {
		return;
	};

	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if !entry.is_intersecting() {
					continue;
				}
				if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
					show(&element);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(THRESHOLD));
	options.set_root_margin(ROOT_MARGIN);
	let observer =
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(observer) => observer,
			Err(err) => {
				warn!("IntersectionObserver unavailable: {:?}", err);
				return;
			}
		};
	callback.forget();

	for index in 0..elements.length() {
		let Some(element) = elements
			.item(index)
			.and_then(|node| node.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};
		let _ = element.set_attribute("style", &hidden_style(index as usize));
		observer.observe(&element);
	}
}
