use leptos::ev;
use leptos::prelude::*;
use log::warn;
use web_sys::{DragEvent, HtmlCanvasElement, HtmlElement};

use super::config::EditorConfig;
use super::error::CanvasError;
use super::node_widget::NodeWidget;
use super::render;
use super::state::{ConnectionGesture, EditorState};
use super::types::{NODE_KIND_MIME, NodeKind};
use crate::components::tool_palette::ToolPalette;

fn dropped_kind(ev: &DragEvent) -> Result<NodeKind, CanvasError> {
	let tag = ev
		.data_transfer()
		.and_then(|dt| dt.get_data(NODE_KIND_MIME).ok())
		.filter(|tag| !tag.is_empty())
		.ok_or(CanvasError::MissingPayload(NODE_KIND_MIME))?;
	NodeKind::from_tag(&tag).ok_or(CanvasError::UnknownKind(tag))
}

/// Drop point relative to the surface's padding box, where nodes are positioned.
fn local_point(surface: &HtmlElement, ev: &DragEvent) -> (f64, f64) {
	let rect = surface.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left() - surface.client_left() as f64,
		ev.client_y() as f64 - rect.top() - surface.client_top() as f64,
	)
}

#[component]
pub fn WorkflowEditor(#[prop(optional)] config: Option<EditorConfig>) -> impl IntoView {
	let editor = RwSignal::new(EditorState::new(config.unwrap_or_default()));
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let surface_ref = NodeRef::<leptos::html::Main>::new();

	// Bumped on window resize so the overlay re-measures its container.
	let viewport = RwSignal::new(0u32);
	let on_resize = window_event_listener(ev::resize, move |_| {
		viewport.update(|v| *v = v.wrapping_add(1));
	});
	on_cleanup(move || on_resize.remove());

	Effect::new(move |_| {
		viewport.track();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		editor.with(|s| {
			if let Err(e) = render::redraw(&canvas, s.nodes(), s.connections(), s.config()) {
				warn!("overlay redraw skipped: {e}");
			}
		});
	});

	let on_drop = move |ev: DragEvent| {
		ev.prevent_default();
		let Some(surface) = surface_ref.get() else {
			warn!("drop ignored: {}", CanvasError::NotMounted);
			return;
		};
		let surface: HtmlElement = surface.into();
		match dropped_kind(&ev) {
			Ok(kind) => {
				let (x, y) = local_point(&surface, &ev);
				editor.update(|s| {
					s.add_node_at(kind, x, y);
				});
			}
			Err(e) => warn!("drop ignored: {e}"),
		}
	};

	let node_ids = move || {
		editor.with(|s| {
			s.nodes()
				.iter()
				.map(|node| node.id.clone())
				.collect::<Vec<_>>()
		})
	};

	let pending_hint = move || {
		editor.with(|s| match s.gesture() {
			ConnectionGesture::Pending(src) => format!("Connecting from {src}..."),
			ConnectionGesture::Idle => String::new(),
		})
	};

	view! {
		<div class="workflow-editor">
			<aside class="editor-sidebar">
				<h2>"Available Tasks"</h2>
				<ToolPalette />
				<button
					class="add-node"
					on:click=move |_| {
						editor.update(|s| {
							s.add_node();
						})
					}
				>
					"Add New Task"
				</button>
				<p class="hint">"1. Double-click a node → 2. Double-click another node to connect"</p>
				<p class="pending-hint">{pending_hint}</p>
			</aside>

			<main
				node_ref=surface_ref
				class="editor-surface"
				on:dragover=|ev: DragEvent| ev.prevent_default()
				on:drop=on_drop
			>
				<h2>"Workflow Editor"</h2>
				<canvas node_ref=canvas_ref class="editor-overlay" />
				<For
					each=node_ids
					key=|id: &String| id.clone()
					children=move |id| view! { <NodeWidget id=id editor=editor /> }
				/>
			</main>
		</div>
	}
}
