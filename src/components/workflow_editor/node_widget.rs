use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::debug;
use web_sys::MouseEvent;

use super::gesture::{DragTracker, GestureSession, ResizeTracker};
use super::state::EditorState;
use super::types::NodeId;

type SessionSlot = Rc<RefCell<Option<GestureSession>>>;

/// Listens on the window for the rest of the gesture so it keeps tracking
/// the pointer outside the widget. The next mouseup ends the session.
fn begin_session(slot: &SessionSlot, on_move: impl Fn(MouseEvent) + 'static) {
	let mut session = GestureSession::new();
	let moving = window_event_listener(ev::mousemove, on_move);
	session.hold(move || moving.remove());

	let ending = slot.clone();
	let releasing = window_event_listener(ev::mouseup, move |_| {
		let ended = ending.borrow_mut().take();
		drop(ended);
	});
	session.hold(move || releasing.remove());

	debug!("gesture session holding {} listeners", session.held());
	// An unfinished session (mouseup lost to a blurred window) is released here.
	let stale = slot.borrow_mut().replace(session);
	drop(stale);
}

fn pointer(ev: &MouseEvent) -> (f64, f64) {
	(ev.client_x() as f64, ev.client_y() as f64)
}

#[component]
pub fn NodeWidget(id: NodeId, editor: RwSignal<EditorState>) -> impl IntoView {
	let session: SessionSlot = Rc::new(RefCell::new(None));

	let (id_style, id_label, id_pending) = (id.clone(), id.clone(), id.clone());
	let style = move || {
		editor.with(|s| match s.node(&id_style) {
			Some(node) => format!(
				"left: {}px; top: {}px; width: {}px; min-width: {}px; height: {}px;",
				node.x,
				node.y,
				node.width,
				s.config().min_node_width,
				s.config().node_height,
			),
			None => "display: none;".to_string(),
		})
	};
	let label = move || {
		editor.with(|s| {
			s.node(&id_label)
				.map(|node| node.label.clone())
				.unwrap_or_default()
		})
	};
	let pending = move || editor.with(|s| s.is_pending_source(&id_pending));
	let id_kind = id.clone();
	let kind = move || {
		editor.with(|s| {
			s.node(&id_kind)
				.map(|node| node.kind.tag())
				.unwrap_or_default()
		})
	};

	let (session_drag, id_drag) = (session.clone(), id.clone());
	let on_mousedown = move |ev: MouseEvent| {
		if ev.button() != 0 {
			return;
		}
		let Some((origin, threshold)) = editor.with_untracked(|s| {
			s.node(&id_drag)
				.map(|node| ((node.x, node.y), s.config().drag_threshold))
		}) else {
			return;
		};
		let tracker = RefCell::new(DragTracker::new(pointer(&ev), origin, threshold));
		let id = id_drag.clone();
		begin_session(&session_drag, move |ev: MouseEvent| {
			let (x, y) = pointer(&ev);
			if let Some((nx, ny)) = tracker.borrow_mut().position_at(x, y) {
				editor.update(|s| s.move_node(&id, nx, ny));
			}
		});
	};

	let (session_resize, id_resize) = (session.clone(), id.clone());
	let on_resize_mousedown = move |ev: MouseEvent| {
		ev.stop_propagation();
		if ev.button() != 0 {
			return;
		}
		let Some(tracker) = editor.with_untracked(|s| {
			s.node(&id_resize).map(|node| {
				ResizeTracker::new(ev.client_x() as f64, node.width, s.config().min_node_width)
			})
		}) else {
			return;
		};
		let id = id_resize.clone();
		begin_session(&session_resize, move |ev: MouseEvent| {
			let width = tracker.width_at(ev.client_x() as f64);
			editor.update(|s| s.resize_node(&id, width));
		});
	};

	let id_connect = id.clone();
	let on_dblclick = move |_: MouseEvent| {
		editor.update(|s| s.complete_gesture(&id_connect));
	};

	let id_edit = id.clone();
	let on_edit = move |ev: MouseEvent| {
		ev.stop_propagation();
		let reply = window()
			.prompt_with_message("Enter new label:")
			.ok()
			.flatten();
		editor.update(|s| s.rename_node(&id_edit, reply.as_deref()));
	};

	let id_delete = id;
	let on_delete = move |ev: MouseEvent| {
		ev.stop_propagation();
		editor.update(|s| s.delete_node(&id_delete));
	};

	view! {
		<div
			class="workflow-node"
			class:pending=pending
			data-kind=kind
			style=style
			on:mousedown=on_mousedown
			on:dblclick=on_dblclick
		>
			{label}
			<div
				class="node-controls"
				on:mousedown=|ev: MouseEvent| ev.stop_propagation()
				on:dblclick=|ev: MouseEvent| ev.stop_propagation()
			>
				<button title="Edit label" on:click=on_edit>"✏️"</button>
				<button title="Delete node" on:click=on_delete>"❌"</button>
			</div>
			<div
				class="resize-handle"
				on:mousedown=on_resize_mousedown
				on:dblclick=|ev: MouseEvent| ev.stop_propagation()
			/>
		</div>
	}
}
