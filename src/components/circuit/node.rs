use std::f64::consts::TAU;

use rand::Rng;

use super::config::{CircuitConfig, Palette};
use super::state::Viewport;
use super::surface::{Paint, Surface};

/// Extra radius a node gains at the top of its pulse.
const PULSE_GROWTH: f64 = 1.5;
const GLOW_SCALE: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub pulse_phase: f64,
	pub pulse_speed: f64,
	pub active_timer: u32,
}

impl Node {
	pub fn random(viewport: Viewport, config: &CircuitConfig, rng: &mut impl Rng) -> Self {
		let (w, h) = viewport.extent();
		let size_span = config.node_size_max - config.node_size_min;
		Self {
			x: rng.random::<f64>() * w,
			y: rng.random::<f64>() * h,
			vx: (rng.random::<f64>() - 0.5) * config.node_speed,
			vy: (rng.random::<f64>() - 0.5) * config.node_speed,
			radius: config.node_size_min + rng.random::<f64>() * size_span,
			pulse_phase: rng.random::<f64>() * TAU,
			pulse_speed: config.pulse_speed + rng.random::<f64>() * 0.01,
			active_timer: 0,
		}
	}

	/// A node is firing for as long as its countdown is running.
	pub fn is_active(&self) -> bool {
		self.active_timer > 0
	}

	pub fn activate(&mut self, ticks: u32) {
		self.active_timer = ticks;
	}

	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	pub fn distance_to(&self, other: &Node) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Advance one tick: move, bounce, pulse, maybe fire, count down.
	pub fn update(&mut self, viewport: Viewport, config: &CircuitConfig, rng: &mut impl Rng) {
		let (w, h) = viewport.extent();
		self.x += self.vx;
		self.y += self.vy;

		// Reflect without re-entering exactly; the clamp below pins the node to the edge.
		if self.x < 0.0 || self.x > w {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > h {
			self.vy = -self.vy;
		}
		self.x = self.x.max(0.0).min(w);
		self.y = self.y.max(0.0).min(h);

		self.pulse_phase += self.pulse_speed;

		if rng.random_bool(config.fire_probability) {
			self.activate(config.fire_duration);
		}
		self.active_timer = self.active_timer.saturating_sub(1);
	}

	/// Pulse intensity in `[0, 1]`.
	pub fn intensity(&self) -> f64 {
		self.pulse_phase.sin() * 0.5 + 0.5
	}

	pub fn draw(&self, surface: &impl Surface, palette: &Palette) {
		let pulse = self.intensity();
		let radius = self.radius + pulse * PULSE_GROWTH;
		let center = self.position();

		if self.is_active() {
			let glow = Paint::Radial {
				center,
				radius: radius * GLOW_SCALE,
				inner: palette.node.with_alpha(0.15),
				outer: palette.node.with_alpha(0.0),
			};
			surface.paint_circle(center, radius * GLOW_SCALE, &glow, 1.0);
		}

		let fill = if self.is_active() {
			palette.node_pulse
		} else {
			palette.node
		};
		surface.paint_circle(center, radius, &Paint::Solid(fill), 0.6 + pulse * 0.4);
	}
}
