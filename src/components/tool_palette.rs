use leptos::prelude::*;
use log::warn;
use web_sys::DragEvent;

use crate::components::workflow_editor::{NODE_KIND_MIME, NodeKind};

fn on_drag_start(ev: &DragEvent, kind: NodeKind) {
	let Some(dt) = ev.data_transfer() else {
		return;
	};
	if let Err(e) = dt.set_data(NODE_KIND_MIME, kind.tag()) {
		warn!("palette drag payload not set: {e:?}");
	}
	dt.set_effect_allowed("move");
}

/// Draggable node-type items; the editor surface turns a drop into a node.
#[component]
pub fn ToolPalette() -> impl IntoView {
	view! {
		<div class="tool-palette">
			<h3>"Add Nodes"</h3>
			{NodeKind::ALL
				.into_iter()
				.map(|kind| {
					view! {
						<div
							class="palette-item"
							draggable="true"
							on:dragstart=move |ev: DragEvent| on_drag_start(&ev, kind)
						>
							{kind.label()}
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
