use rand::Rng;

use super::config::CircuitConfig;
use super::node::Node;
use super::pulse::DataPulse;

/// Drawable surface dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Viewport {
	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	pub fn extent(&self) -> (f64, f64) {
		(self.width as f64, self.height as f64)
	}
}

/// Everything the animation mutates between frames.
pub struct CircuitState {
	pub config: CircuitConfig,
	pub viewport: Viewport,
	pub nodes: Vec<Node>,
	pub pulses: Vec<DataPulse>,
}

impl CircuitState {
	pub fn new(config: CircuitConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
		let config = config.sanitized();
		let nodes = (0..config.node_count)
			.map(|_| Node::random(viewport, &config, rng))
			.collect();

		Self {
			config,
			viewport,
			nodes,
			pulses: Vec::with_capacity(config.max_pulses),
		}
	}

	/// Nodes left outside a smaller viewport bounce back in on their next update.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.viewport = Viewport::new(width, height);
	}

	/// Force one node chosen uniformly at random to fire. Returns its index.
	pub fn activate_random(&mut self, rng: &mut impl Rng) -> Option<usize> {
		if self.nodes.is_empty() {
			return None;
		}
		let idx = rng.random_range(0..self.nodes.len());
		self.nodes[idx].activate(self.config.forced_fire_duration);
		Some(idx)
	}

	/// Queue a pulse unless the live cap is reached. A refused spawn is dropped.
	pub fn try_spawn_pulse(&mut self, source: usize, target: usize, rng: &mut impl Rng) -> bool {
		if self.pulses.len() >= self.config.max_pulses {
			return false;
		}
		self.pulses.push(DataPulse::new(source, target, rng));
		true
	}
}
