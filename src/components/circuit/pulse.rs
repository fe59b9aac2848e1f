use rand::Rng;

use super::config::{CircuitConfig, Palette};
use super::node::Node;
use super::surface::{Paint, Surface};

const HEAD_RADIUS: f64 = 3.0;
/// Fraction of the edge the trail covers behind the head.
const TRAIL_LENGTH: f64 = 0.1;
const TRAIL_WIDTH: f64 = 2.0;

/// A packet travelling along an edge. Endpoints are indices into the node pool.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPulse {
	pub source: usize,
	pub target: usize,
	pub progress: f64,
	pub speed: f64,
	pub alive: bool,
}

impl DataPulse {
	pub fn new(source: usize, target: usize, rng: &mut impl Rng) -> Self {
		Self::with_speed(source, target, 0.02 + rng.random::<f64>() * 0.02)
	}

	pub fn with_speed(source: usize, target: usize, speed: f64) -> Self {
		Self {
			source,
			target,
			progress: 0.0,
			speed,
			alive: true,
		}
	}

	/// Advance along the edge. On arrival the pulse dies and may set its target firing.
	pub fn update(&mut self, nodes: &mut [Node], config: &CircuitConfig, rng: &mut impl Rng) {
		self.progress += self.speed;
		if self.progress >= 1.0 {
			self.alive = false;
			if rng.random_bool(config.relay_probability) {
				if let Some(target) = nodes.get_mut(self.target) {
					target.activate(config.fire_duration);
				}
			}
		}
	}

	fn point_at(&self, nodes: &[Node], t: f64) -> Option<(f64, f64)> {
		let (a, b) = (nodes.get(self.source)?, nodes.get(self.target)?);
		Some((a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t))
	}

	pub fn position(&self, nodes: &[Node]) -> Option<(f64, f64)> {
		self.point_at(nodes, self.progress)
	}

	pub fn draw(&self, nodes: &[Node], surface: &impl Surface, palette: &Palette) {
		let (Some(head), Some(tail)) = (
			self.position(nodes),
			self.point_at(nodes, (self.progress - TRAIL_LENGTH).max(0.0)),
		) else {
			return;
		};

		surface.paint_circle(head, HEAD_RADIUS, &Paint::Solid(palette.node_pulse), 1.0);

		let trail = Paint::Linear {
			start: tail,
			end: head,
			from: palette.node.with_alpha(0.0),
			to: palette.node.with_alpha(0.6),
		};
		surface.paint_line(tail, head, &trail, TRAIL_WIDTH);
	}
}
