//! Pointer gesture bookkeeping for node drag and resize.
//!
//! A [`GestureSession`] owns the teardown of every global listener registered
//! at pointer-down. Dropping the session releases them, so ending a gesture
//! is just taking the session out of its slot.

/// Global listener subscriptions held for the lifetime of one gesture.
#[derive(Default)]
pub struct GestureSession {
	teardown: Vec<Box<dyn FnOnce()>>,
}

impl GestureSession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers the release action for one acquired subscription.
	pub fn hold(&mut self, release: impl FnOnce() + 'static) {
		self.teardown.push(Box::new(release));
	}

	pub fn held(&self) -> usize {
		self.teardown.len()
	}
}

impl Drop for GestureSession {
	fn drop(&mut self) {
		for release in self.teardown.drain(..) {
			release();
		}
	}
}

/// Tracks a node drag against the original pointer-down point.
#[derive(Clone, Debug, PartialEq)]
pub struct DragTracker {
	start_x: f64,
	start_y: f64,
	node_start_x: f64,
	node_start_y: f64,
	threshold: f64,
	armed: bool,
}

impl DragTracker {
	pub fn new(pointer: (f64, f64), node: (f64, f64), threshold: f64) -> Self {
		Self {
			start_x: pointer.0,
			start_y: pointer.1,
			node_start_x: node.0,
			node_start_y: node.1,
			threshold,
			armed: false,
		}
	}

	/// New node position for a pointer at `(x, y)`, or `None` while the
	/// pointer has not yet left the threshold box around the down point.
	pub fn position_at(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
		let (dx, dy) = (x - self.start_x, y - self.start_y);
		if !self.armed {
			if dx.abs().max(dy.abs()) <= self.threshold {
				return None;
			}
			self.armed = true;
		}
		Some((self.node_start_x + dx, self.node_start_y + dy))
	}
}

/// Tracks a horizontal resize from the right-edge handle.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeTracker {
	start_x: f64,
	start_width: f64,
	min_width: f64,
}

impl ResizeTracker {
	pub fn new(pointer_x: f64, width: f64, min_width: f64) -> Self {
		Self {
			start_x: pointer_x,
			start_width: width,
			min_width,
		}
	}

	pub fn width_at(&self, x: f64) -> f64 {
		(self.start_width + (x - self.start_x)).max(self.min_width)
	}
}
