use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use log::{debug, info, trace, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::CircuitConfig;
use super::render;
use super::state::{CircuitState, Viewport};
use crate::components::dom;

fn window_viewport(window: &Window) -> Viewport {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::new(
		dimension(window.inner_width()) as u32,
		dimension(window.inner_height()) as u32,
	)
}

/// Full-window animated circuit drawn behind the page content.
#[component]
pub fn CircuitCanvas(#[prop(optional)] config: CircuitConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<CircuitState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("Circuit canvas has no 2d context");
			return;
		};

		let viewport = window_viewport(&window);
		canvas.set_width(viewport.width);
		canvas.set_height(viewport.height);
		*state.borrow_mut() = Some(CircuitState::new(config, viewport, &mut rand::rng()));
		info!(
			"Circuit started with {} nodes at {}x{}",
			config.node_count, viewport.width, viewport.height
		);

		let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
		dom::on_window("resize", move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = window_viewport(&win);
			canvas_resize.set_width(viewport.width);
			canvas_resize.set_height(viewport.height);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(viewport.width, viewport.height);
			}
			debug!("Circuit resized to {}x{}", viewport.width, viewport.height);
		});

		let state_fire = state.clone();
		Interval::new(config.forced_fire_interval_ms, move || {
			if let Some(ref mut s) = *state_fire.borrow_mut() {
				if let Some(idx) = s.activate_random(&mut rand::rng()) {
					trace!("Forced node {} to fire", idx);
				}
			}
		})
		.forget();

		let (state_anim, animate_inner) = (state.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				render::frame(s, &ctx, &mut rand::rng());
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="circuit-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}
