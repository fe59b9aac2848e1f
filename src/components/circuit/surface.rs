use std::f64::consts::PI;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::config::Rgba;

/// Fill or stroke source. Gradients only ever need two stops here.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	Solid(Rgba),
	Radial {
		center: (f64, f64),
		radius: f64,
		inner: Rgba,
		outer: Rgba,
	},
	Linear {
		start: (f64, f64),
		end: (f64, f64),
		from: Rgba,
		to: Rgba,
	},
}

/// Immediate-mode drawing primitives the circuit needs.
pub trait Surface {
	fn paint_rect(&self, x: f64, y: f64, width: f64, height: f64, paint: &Paint);
	fn paint_circle(&self, center: (f64, f64), radius: f64, paint: &Paint, alpha: f64);
	fn paint_line(&self, from: (f64, f64), to: (f64, f64), paint: &Paint, width: f64);
}

fn gradient(ctx: &CanvasRenderingContext2d, paint: &Paint) -> Option<CanvasGradient> {
	let (gradient, a, b) = match *paint {
		Paint::Solid(_) => return None,
		Paint::Radial {
			center: (x, y),
			radius,
			inner,
			outer,
		} => (
			ctx.create_radial_gradient(x, y, 0.0, x, y, radius).ok()?,
			inner,
			outer,
		),
		Paint::Linear {
			start: (x0, y0),
			end: (x1, y1),
			from,
			to,
		} => (ctx.create_linear_gradient(x0, y0, x1, y1), from, to),
	};
	let _ = gradient.add_color_stop(0.0, &a.to_string());
	let _ = gradient.add_color_stop(1.0, &b.to_string());
	Some(gradient)
}

#[allow(deprecated)]
fn set_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) {
	match (paint, gradient(ctx, paint)) {
		(Paint::Solid(color), _) => ctx.set_fill_style_str(&color.to_string()),
		(_, Some(g)) => ctx.set_fill_style(&g),
		(_, None) => {}
	}
}

#[allow(deprecated)]
fn set_stroke(ctx: &CanvasRenderingContext2d, paint: &Paint) {
	match (paint, gradient(ctx, paint)) {
		(Paint::Solid(color), _) => ctx.set_stroke_style_str(&color.to_string()),
		(_, Some(g)) => ctx.set_stroke_style(&g),
		(_, None) => {}
	}
}

impl Surface for CanvasRenderingContext2d {
	fn paint_rect(&self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
		set_fill(self, paint);
		self.fill_rect(x, y, width, height);
	}

	fn paint_circle(&self, (x, y): (f64, f64), radius: f64, paint: &Paint, alpha: f64) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		set_fill(self, paint);
		self.set_global_alpha(alpha);
		self.fill();
		self.set_global_alpha(1.0);
	}

	fn paint_line(&self, (x0, y0): (f64, f64), (x1, y1): (f64, f64), paint: &Paint, width: f64) {
		self.begin_path();
		self.move_to(x0, y0);
		self.line_to(x1, y1);
		set_stroke(self, paint);
		self.set_line_width(width);
		self.stroke();
	}
}

#[cfg(test)]
pub mod recording {
	use std::cell::RefCell;

	use super::{Paint, Surface};

	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Rect(Paint),
		Circle {
			center: (f64, f64),
			radius: f64,
			paint: Paint,
			alpha: f64,
		},
		Line {
			from: (f64, f64),
			to: (f64, f64),
			paint: Paint,
			width: f64,
		},
	}

	/// Captures draw calls so tests can assert on what a frame painted.
	#[derive(Default)]
	pub struct Recorder {
		pub ops: RefCell<Vec<Op>>,
	}

	impl Recorder {
		pub fn take(&self) -> Vec<Op> {
			std::mem::take(&mut *self.ops.borrow_mut())
		}

		pub fn lines(&self) -> Vec<Op> {
			self.ops
				.borrow()
				.iter()
				.filter(|op| matches!(op, Op::Line { .. }))
				.cloned()
				.collect()
		}
	}

	impl Surface for Recorder {
		fn paint_rect(&self, _x: f64, _y: f64, _w: f64, _h: f64, paint: &Paint) {
			self.ops.borrow_mut().push(Op::Rect(paint.clone()));
		}

		fn paint_circle(&self, center: (f64, f64), radius: f64, paint: &Paint, alpha: f64) {
			self.ops.borrow_mut().push(Op::Circle {
				center,
				radius,
				paint: paint.clone(),
				alpha,
			});
		}

		fn paint_line(&self, from: (f64, f64), to: (f64, f64), paint: &Paint, width: f64) {
			self.ops.borrow_mut().push(Op::Line {
				from,
				to,
				paint: paint.clone(),
				width,
			});
		}
	}
}
