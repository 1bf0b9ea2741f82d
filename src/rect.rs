use serde::{Deserialize, Serialize};

/// Axis-aligned box in canvas space. Width/height may be zero or negative;
/// nothing here normalizes them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn center(&self) -> (f64, f64) {
		(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}

	/// Whether the point lies inside the box (edges inclusive).
	pub fn contains(&self, px: f64, py: f64) -> bool {
		px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
	}

	pub fn intersects(&self, other: &Rect) -> bool {
		self.x <= other.right()
			&& other.x <= self.right()
			&& self.y <= other.bottom()
			&& other.y <= self.bottom()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn json_shape() {
		let rect: Rect =
			serde_json::from_str(r#"{"x":0.0,"y":0.0,"width":100.0,"height":50.0}"#).unwrap();
		assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 50.0));
		assert_eq!(
			serde_json::to_string(&rect).unwrap(),
			r#"{"x":0.0,"y":0.0,"width":100.0,"height":50.0}"#
		);
	}

	#[test]
	fn edges_and_center() {
		let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
		assert_eq!(rect.right(), 110.0);
		assert_eq!(rect.bottom(), 70.0);
		assert_eq!(rect.center(), (60.0, 45.0));
	}

	#[test]
	fn contains_is_edge_inclusive() {
		let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
		assert!(rect.contains(0.0, 0.0));
		assert!(rect.contains(100.0, 50.0));
		assert!(rect.contains(50.0, 25.0));
		assert!(!rect.contains(100.1, 25.0));
		assert!(!rect.contains(50.0, -0.1));
	}

	#[test]
	fn intersects_overlapping_and_disjoint() {
		let a = Rect::new(0.0, 0.0, 100.0, 50.0);
		let b = Rect::new(50.0, 25.0, 100.0, 50.0);
		let c = Rect::new(200.0, 200.0, 10.0, 10.0);
		assert!(a.intersects(&b));
		assert!(b.intersects(&a));
		assert!(!a.intersects(&c));
	}
}
