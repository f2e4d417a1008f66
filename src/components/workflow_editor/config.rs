/// Geometry and interaction constants for the editor surface.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Horizontal distance between day gridlines.
	pub grid_spacing: f64,
	pub grid_label_offset: (f64, f64),
	pub min_node_width: f64,
	pub node_height: f64,
	/// Vertical offset of connector endpoints from a node's top edge.
	pub connector_offset_y: f64,
	pub cascade_origin: f64,
	pub cascade_step: f64,
	/// Pointer travel (px) before a pointer-down becomes a drag.
	pub drag_threshold: f64,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			grid_spacing: 100.0,
			grid_label_offset: (5.0, 20.0),
			min_node_width: 120.0,
			node_height: 100.0,
			connector_offset_y: 50.0,
			cascade_origin: 50.0,
			cascade_step: 50.0,
			drag_threshold: 3.0,
		}
	}
}
