use std::fmt;

/// An sRGB colour with a floating point alpha, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Rgba {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}
}

impl fmt::Display for Rgba {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	/// Idle node fill, also the base hue for edges, glows and trails.
	pub node: Rgba,
	/// Fill for firing nodes and travelling pulses.
	pub node_pulse: Rgba,
	/// Page background, painted translucently every frame to leave trails.
	pub background: Rgba,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			node: Rgba::rgb(212, 165, 116),
			node_pulse: Rgba::rgb(184, 134, 11),
			background: Rgba::rgb(26, 20, 16),
		}
	}
}

/// Tuning for the circuit background. Probabilities are per tick and are
/// clamped into `[0, 1]` by [`CircuitConfig::sanitized`] before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircuitConfig {
	pub node_count: usize,
	pub connection_distance: f64,
	pub node_speed: f64,
	pub pulse_speed: f64,
	pub node_size_min: f64,
	pub node_size_max: f64,
	pub fire_probability: f64,
	pub fire_duration: u32,
	pub forced_fire_duration: u32,
	pub forced_fire_interval_ms: u32,
	pub spawn_probability: f64,
	pub max_pulses: usize,
	pub relay_probability: f64,
	pub fade_alpha: f64,
	pub deep_fade_probability: f64,
	pub deep_fade_alpha: f64,
	pub palette: Palette,
}

impl CircuitConfig {
	/// Copy with every probability clamped into `[0, 1]`; NaN becomes 0.
	pub fn sanitized(self) -> Self {
		let unit = |p: f64| if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
		Self {
			fire_probability: unit(self.fire_probability),
			spawn_probability: unit(self.spawn_probability),
			relay_probability: unit(self.relay_probability),
			deep_fade_probability: unit(self.deep_fade_probability),
			..self
		}
	}
}

impl Default for CircuitConfig {
	fn default() -> Self {
		Self {
			node_count: 35,
			connection_distance: 120.0,
			node_speed: 0.15,
			pulse_speed: 0.01,
			node_size_min: 1.0,
			node_size_max: 2.0,
			fire_probability: 0.0003,
			fire_duration: 40,
			forced_fire_duration: 30,
			forced_fire_interval_ms: 4000,
			spawn_probability: 0.005,
			max_pulses: 8,
			relay_probability: 0.3,
			fade_alpha: 0.1,
			deep_fade_probability: 0.01,
			deep_fade_alpha: 0.5,
			palette: Palette::default(),
		}
	}
}
