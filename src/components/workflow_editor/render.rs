use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::EditorConfig;
use super::error::CanvasError;
use super::types::{Connection, WorkflowNode};

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
	pub x: f64,
	pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub from: (f64, f64),
	pub to: (f64, f64),
}

/// Everything drawn in one redraw of the overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
	pub width: f64,
	pub height: f64,
	pub grid: Vec<GridLine>,
	pub connectors: Vec<Segment>,
}

/// Plans a full redraw: day gridlines across the width, then one connector
/// per connection whose endpoints are both live.
pub fn plan_frame(
	nodes: &[WorkflowNode],
	connections: &[Connection],
	width: f64,
	height: f64,
	config: &EditorConfig,
) -> Frame {
	let mut grid = Vec::new();
	let mut x = 0.0;
	while config.grid_spacing > 0.0 && x < width {
		grid.push(GridLine {
			x,
			label: format!("Day {}", grid.len() + 1),
		});
		x += config.grid_spacing;
	}

	let find = |id: &str| nodes.iter().find(|node| node.id == id);
	let connectors = connections
		.iter()
		.filter_map(|conn| {
			let (from, to) = (find(conn.from.as_str())?, find(conn.to.as_str())?);
			Some(Segment {
				from: (from.x + from.width, from.y + config.connector_offset_y),
				to: (to.x, to.y + config.connector_offset_y),
			})
		})
		.collect();

	Frame {
		width,
		height,
		grid,
		connectors,
	}
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.map_err(|e| CanvasError::Context(format!("{e:?}")))?
		.ok_or_else(|| CanvasError::Context("no context returned".into()))?
		.dyn_into()
		.map_err(|_| CanvasError::Context("not a CanvasRenderingContext2d".into()))
}

pub fn paint(frame: &Frame, ctx: &CanvasRenderingContext2d, config: &EditorConfig) {
	ctx.clear_rect(0.0, 0.0, frame.width, frame.height);

	ctx.set_stroke_style_str("#e0e0e0");
	ctx.set_line_width(1.0);
	ctx.set_font("12px Arial");
	ctx.set_fill_style_str("black");
	let (label_dx, label_y) = config.grid_label_offset;
	for line in &frame.grid {
		ctx.begin_path();
		ctx.move_to(line.x, 0.0);
		ctx.line_to(line.x, frame.height);
		ctx.stroke();
		if let Err(e) = ctx.fill_text(&line.label, line.x + label_dx, label_y) {
			warn!("grid label {:?} not drawn: {e:?}", line.label);
		}
	}

	ctx.set_stroke_style_str("black");
	ctx.set_line_width(2.0);
	for segment in &frame.connectors {
		ctx.begin_path();
		ctx.move_to(segment.from.0, segment.from.1);
		ctx.line_to(segment.to.0, segment.to.1);
		ctx.stroke();
	}
}

/// Matches the canvas bitmap to its rendered size and repaints from scratch.
pub fn redraw(
	canvas: &HtmlCanvasElement,
	nodes: &[WorkflowNode],
	connections: &[Connection],
	config: &EditorConfig,
) -> Result<(), CanvasError> {
	let (w, h) = (canvas.offset_width().max(0), canvas.offset_height().max(0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(canvas)?;
	let frame = plan_frame(nodes, connections, w as f64, h as f64, config);
	paint(&frame, &ctx, config);
	Ok(())
}
