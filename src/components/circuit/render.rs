use rand::Rng;

use super::state::CircuitState;
use super::surface::{Paint, Surface};

const ACTIVE_EDGE_ALPHA: f64 = 0.25;
const ACTIVE_EDGE_WIDTH: f64 = 1.0;
const IDLE_EDGE_ALPHA: f64 = 0.05;
const IDLE_EDGE_WIDTH: f64 = 0.5;

/// Linear falloff: 1 for coincident nodes, approaching 0 at the threshold.
/// `None` means the pair is too far apart to be connected.
pub fn edge_opacity(distance: f64, threshold: f64) -> Option<f64> {
	(distance < threshold).then(|| 1.0 - distance / threshold)
}

/// Advance and draw one animation frame.
pub fn frame(state: &mut CircuitState, surface: &impl Surface, rng: &mut impl Rng) {
	fade(state, surface, rng);
	// Edges go first so nodes paint over them.
	draw_connections(state, surface, rng);
	step_pulses(state, surface, rng);
	step_nodes(state, surface, rng);
}

fn fade(state: &CircuitState, surface: &impl Surface, rng: &mut impl Rng) {
	let (w, h) = state.viewport.extent();
	let config = &state.config;
	let background = config.palette.background;

	surface.paint_rect(0.0, 0.0, w, h, &Paint::Solid(background.with_alpha(config.fade_alpha)));
	if rng.random_bool(config.deep_fade_probability) {
		let deep = background.with_alpha(config.deep_fade_alpha);
		surface.paint_rect(0.0, 0.0, w, h, &Paint::Solid(deep));
	}
}

fn draw_connections(state: &mut CircuitState, surface: &impl Surface, rng: &mut impl Rng) {
	let (threshold, spawn_probability, edge) = (
		state.config.connection_distance,
		state.config.spawn_probability,
		state.config.palette.node,
	);

	for i in 0..state.nodes.len() {
		for j in (i + 1)..state.nodes.len() {
			let (a, b) = (&state.nodes[i], &state.nodes[j]);
			let Some(opacity) = edge_opacity(a.distance_to(b), threshold) else {
				continue;
			};
			let (from, to) = (a.position(), b.position());
			let (a_active, b_active) = (a.is_active(), b.is_active());

			if !(a_active || b_active) {
				let paint = Paint::Solid(edge.with_alpha(opacity * IDLE_EDGE_ALPHA));
				surface.paint_line(from, to, &paint, IDLE_EDGE_WIDTH);
				continue;
			}

			let paint = Paint::Solid(edge.with_alpha(opacity * ACTIVE_EDGE_ALPHA));
			surface.paint_line(from, to, &paint, ACTIVE_EDGE_WIDTH);
			if rng.random_bool(spawn_probability) {
				let (source, target) = if a_active { (i, j) } else { (j, i) };
				state.try_spawn_pulse(source, target, rng);
			}
		}
	}
}

fn step_pulses(state: &mut CircuitState, surface: &impl Surface, rng: &mut impl Rng) {
	let CircuitState {
		config,
		nodes,
		pulses,
		..
	} = state;

	pulses.retain_mut(|pulse| {
		pulse.update(nodes, config, rng);
		if pulse.alive {
			pulse.draw(nodes, surface, &config.palette);
		}
		pulse.alive
	});
}

fn step_nodes(state: &mut CircuitState, surface: &impl Surface, rng: &mut impl Rng) {
	let CircuitState {
		config,
		viewport,
		nodes,
		..
	} = state;

	for node in nodes.iter_mut() {
		node.update(*viewport, config, rng);
		node.draw(surface, &config.palette);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::circuit::config::CircuitConfig;
	use crate::components::circuit::node::Node;
	use crate::components::circuit::pulse::DataPulse;
	use crate::components::circuit::state::Viewport;
	use crate::components::circuit::surface::recording::{Op, Recorder};

	fn node_at(x: f64, y: f64) -> Node {
		Node {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.0,
			pulse_phase: 0.0,
			pulse_speed: 0.01,
			active_timer: 0,
		}
	}

	/// A state with hand-placed nodes and no randomness left to chance.
	fn state_with(nodes: Vec<Node>, tweak: impl FnOnce(&mut CircuitConfig)) -> CircuitState {
		let mut config = CircuitConfig {
			node_count: 0,
			fire_probability: 0.0,
			deep_fade_probability: 0.0,
			spawn_probability: 0.0,
			relay_probability: 0.0,
			..CircuitConfig::default()
		};
		tweak(&mut config);
		let mut rng = StdRng::seed_from_u64(0);
		let mut state = CircuitState::new(config, Viewport::new(1000, 1000), &mut rng);
		state.nodes = nodes;
		state
	}

	#[test]
	fn opacity_is_one_for_coincident_nodes() {
		assert_eq!(edge_opacity(0.0, 120.0), Some(1.0));
	}

	#[test]
	fn opacity_falls_off_linearly_until_threshold() {
		let mut last = f64::INFINITY;
		for d in 0..120 {
			let o = edge_opacity(d as f64, 120.0).unwrap();
			assert!(o < last);
			assert!(o > 0.0);
			last = o;
		}
		assert_eq!(edge_opacity(60.0, 120.0), Some(0.5));
		assert_eq!(edge_opacity(120.0, 120.0), None);
		assert_eq!(edge_opacity(500.0, 120.0), None);
	}

	#[test]
	fn edge_drawn_only_below_threshold() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();

		let mut state = state_with(vec![node_at(0.0, 0.0), node_at(119.0, 0.0)], |_| {});
		draw_connections(&mut state, &surface, &mut rng);
		assert_eq!(surface.lines().len(), 1);
		surface.take();

		let mut state = state_with(vec![node_at(0.0, 0.0), node_at(120.0, 0.0)], |_| {});
		draw_connections(&mut state, &surface, &mut rng);
		assert!(surface.lines().is_empty());
	}

	#[test]
	fn idle_and_active_edges_use_distinct_styles() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();
		let mut state = state_with(vec![node_at(0.0, 0.0), node_at(60.0, 0.0)], |_| {});
		let edge = state.config.palette.node;

		draw_connections(&mut state, &surface, &mut rng);
		state.nodes[1].activate(5);
		draw_connections(&mut state, &surface, &mut rng);

		let lines = surface.lines();
		assert_eq!(
			lines[0],
			Op::Line {
				from: (0.0, 0.0),
				to: (60.0, 0.0),
				paint: Paint::Solid(edge.with_alpha(0.5 * IDLE_EDGE_ALPHA)),
				width: IDLE_EDGE_WIDTH,
			}
		);
		assert_eq!(
			lines[1],
			Op::Line {
				from: (0.0, 0.0),
				to: (60.0, 0.0),
				paint: Paint::Solid(edge.with_alpha(0.5 * ACTIVE_EDGE_ALPHA)),
				width: ACTIVE_EDGE_WIDTH,
			}
		);
	}

	#[test]
	fn pulses_leave_the_active_endpoint() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();
		let mut state = state_with(vec![node_at(0.0, 0.0), node_at(10.0, 0.0)], |c| {
			c.spawn_probability = 1.0;
		});
		state.nodes[1].activate(5);

		draw_connections(&mut state, &surface, &mut rng);
		assert_eq!(state.pulses.len(), 1);
		assert_eq!((state.pulses[0].source, state.pulses[0].target), (1, 0));
	}

	#[test]
	fn idle_edges_never_spawn() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();
		let mut state = state_with(vec![node_at(0.0, 0.0), node_at(10.0, 0.0)], |c| {
			c.spawn_probability = 1.0;
		});
		draw_connections(&mut state, &surface, &mut rng);
		assert!(state.pulses.is_empty());
	}

	#[test]
	fn spawning_stops_at_the_live_cap() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();
		let nodes = (0..6)
			.map(|i| {
				let mut n = node_at(i as f64, 0.0);
				n.activate(10);
				n
			})
			.collect();
		let mut state = state_with(nodes, |c| c.spawn_probability = 1.0);

		// 15 active pairs, each willing to spawn.
		draw_connections(&mut state, &surface, &mut rng);
		assert_eq!(surface.lines().len(), 15);
		assert_eq!(state.pulses.len(), 8);
	}

	#[test]
	fn arriving_pulse_is_dropped_without_drawing() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();
		let mut state = state_with(vec![node_at(0.0, 0.0), node_at(500.0, 0.0)], |_| {});
		state.pulses.push(DataPulse::with_speed(0, 1, 0.6));
		state.pulses.push(DataPulse::with_speed(1, 0, 1.0));

		frame(&mut state, &surface, &mut rng);
		assert_eq!(state.pulses.len(), 1);
		let trails = surface
			.lines()
			.into_iter()
			.filter(|op| matches!(op, Op::Line { width, .. } if *width == 2.0))
			.count();
		assert_eq!(trails, 1);

		frame(&mut state, &surface, &mut rng);
		assert!(state.pulses.is_empty());
	}

	#[test]
	fn frame_fades_before_anything_else() {
		let mut rng = StdRng::seed_from_u64(0);
		let surface = Recorder::default();
		let mut state = state_with(vec![node_at(5.0, 5.0)], |c| c.deep_fade_probability = 1.0);
		let background = state.config.palette.background;

		frame(&mut state, &surface, &mut rng);
		let ops = surface.take();
		assert_eq!(ops[0], Op::Rect(Paint::Solid(background.with_alpha(0.1))));
		assert_eq!(ops[1], Op::Rect(Paint::Solid(background.with_alpha(0.5))));
		assert!(matches!(ops.last(), Some(Op::Circle { .. })));
	}

	#[test]
	fn nodes_stay_inside_a_shrinking_viewport() {
		let mut rng = StdRng::seed_from_u64(42);
		let surface = Recorder::default();
		let config = CircuitConfig {
			node_speed: 40.0,
			..CircuitConfig::default()
		};
		let mut state = CircuitState::new(config, Viewport::new(800, 600), &mut rng);

		let inside = |state: &CircuitState| {
			let (w, h) = state.viewport.extent();
			state
				.nodes
				.iter()
				.all(|n| (0.0..=w).contains(&n.x) && (0.0..=h).contains(&n.y))
		};

		for _ in 0..500 {
			frame(&mut state, &surface, &mut rng);
			assert!(inside(&state));
			assert!(state.pulses.len() <= 8);
			assert!(state.nodes.iter().all(|n| n.is_active() == (n.active_timer > 0)));
			surface.take();
		}

		state.resize(200, 100);
		for _ in 0..100 {
			frame(&mut state, &surface, &mut rng);
			assert!(inside(&state));
			surface.take();
		}
	}
}
