use log::debug;

use super::config::EditorConfig;
use super::types::{Connection, NodeId, NodeKind, WorkflowNode};

/// Two-step double-click protocol for creating a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionGesture {
	#[default]
	Idle,
	Pending(NodeId),
}

/// Owner of the node and connection lists. Every mutation targeting an
/// unknown id is a silent no-op.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
	config: EditorConfig,
	nodes: Vec<WorkflowNode>,
	connections: Vec<Connection>,
	gesture: ConnectionGesture,
}

impl EditorState {
	pub fn new(config: EditorConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn nodes(&self) -> &[WorkflowNode] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn gesture(&self) -> &ConnectionGesture {
		&self.gesture
	}

	pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
		self.nodes.iter().find(|node| node.id == id)
	}

	fn node_mut(&mut self, id: &str) -> Option<&mut WorkflowNode> {
		self.nodes.iter_mut().find(|node| node.id == id)
	}

	pub fn is_pending_source(&self, id: &str) -> bool {
		matches!(&self.gesture, ConnectionGesture::Pending(src) if src == id)
	}

	/// First free ordinal starting at `count + 1`; only skips ahead after
	/// deletions have left a live `task{count + 1}` behind.
	fn next_ordinal(&self) -> usize {
		let mut ordinal = self.nodes.len() + 1;
		while self.node(&format!("task{ordinal}")).is_some() {
			ordinal += 1;
		}
		ordinal
	}

	/// Appends a node at the next cascading default position.
	pub fn add_node(&mut self) -> NodeId {
		let ordinal = self.next_ordinal();
		let offset = self.config.cascade_origin + self.config.cascade_step * self.nodes.len() as f64;
		self.push_node(format!("Task {ordinal}"), NodeKind::Default, ordinal, offset, offset)
	}

	/// Appends a node of `kind` at an explicit position (palette drop).
	pub fn add_node_at(&mut self, kind: NodeKind, x: f64, y: f64) -> NodeId {
		let ordinal = self.next_ordinal();
		self.push_node(kind.label().to_string(), kind, ordinal, x, y)
	}

	fn push_node(&mut self, label: String, kind: NodeKind, ordinal: usize, x: f64, y: f64) -> NodeId {
		let id = format!("task{ordinal}");
		debug!("add node {id} at ({x}, {y})");
		self.nodes.push(WorkflowNode {
			id: id.clone(),
			label,
			kind,
			x,
			y,
			width: self.config.min_node_width,
		});
		id
	}

	pub fn move_node(&mut self, id: &str, x: f64, y: f64) {
		match self.node_mut(id) {
			Some(node) => {
				node.x = x;
				node.y = y;
			}
			None => debug!("move ignored, no node {id}"),
		}
	}

	pub fn resize_node(&mut self, id: &str, width: f64) {
		let min = self.config.min_node_width;
		match self.node_mut(id) {
			Some(node) => node.width = width.max(min),
			None => debug!("resize ignored, no node {id}"),
		}
	}

	/// Applies a reply from the rename prompt. `None` (cancelled) and empty
	/// replies keep the current label.
	pub fn rename_node(&mut self, id: &str, reply: Option<&str>) {
		let Some(label) = reply.filter(|text| !text.is_empty()) else {
			return;
		};
		if let Some(node) = self.node_mut(id) {
			debug!("rename {id} to {label:?}");
			node.label = label.to_string();
		}
	}

	/// Removes the node and every connection touching it.
	pub fn delete_node(&mut self, id: &str) {
		let before = self.nodes.len();
		self.nodes.retain(|node| node.id != id);
		if self.nodes.len() == before {
			debug!("delete ignored, no node {id}");
			return;
		}
		self.connections.retain(|conn| conn.from != id && conn.to != id);
		if self.is_pending_source(id) {
			self.gesture = ConnectionGesture::Idle;
		}
		debug!("deleted node {id}, {} connections left", self.connections.len());
	}

	/// Advances the connection gesture with a double-click on `id`.
	pub fn complete_gesture(&mut self, id: &str) {
		if self.node(id).is_none() {
			return;
		}
		match std::mem::take(&mut self.gesture) {
			ConnectionGesture::Idle => {
				debug!("connection pending from {id}");
				self.gesture = ConnectionGesture::Pending(id.to_string());
			}
			ConnectionGesture::Pending(src) if src == id => {
				self.gesture = ConnectionGesture::Pending(src);
			}
			ConnectionGesture::Pending(src) => {
				debug!("connect {src} -> {id}");
				self.connections.push(Connection {
					from: src,
					to: id.to_string(),
				});
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn editor_with(n: usize) -> EditorState {
		let mut state = EditorState::default();
		for _ in 0..n {
			state.add_node();
		}
		state
	}

	fn conn(from: &str, to: &str) -> Connection {
		Connection {
			from: from.into(),
			to: to.into(),
		}
	}

	#[test]
	fn add_node_uses_cascading_defaults() {
		let state = editor_with(3);
		let third = &state.nodes()[2];
		assert_eq!(third.id, "task3");
		assert_eq!(third.label, "Task 3");
		assert_eq!((third.x, third.y, third.width), (150.0, 150.0, 120.0));
	}

	proptest! {
		#[test]
		fn add_sequences_follow_default_formula(n in 1usize..40) {
			let state = editor_with(n);
			for (i, node) in state.nodes().iter().enumerate() {
				let pos = 50.0 + 50.0 * i as f64;
				prop_assert_eq!(&node.id, &format!("task{}", i + 1));
				prop_assert_eq!(&node.label, &format!("Task {}", i + 1));
				prop_assert_eq!((node.x, node.y, node.width), (pos, pos, 120.0));
			}
		}
	}

	#[test]
	fn add_after_delete_keeps_ids_unique() {
		let mut state = editor_with(2);
		state.delete_node("task1");
		let id = state.add_node();
		assert_eq!(id, "task3");
		let ids: Vec<_> = state.nodes().iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["task2", "task3"]);
	}

	#[test]
	fn add_node_at_uses_kind_label_and_drop_point() {
		let mut state = editor_with(1);
		let id = state.add_node_at(NodeKind::Approval, 310.0, 42.0);
		let node = state.node(&id).unwrap();
		assert_eq!(node.id, "task2");
		assert_eq!(node.label, "Approval Step");
		assert_eq!(node.kind, NodeKind::Approval);
		assert_eq!((node.x, node.y, node.width), (310.0, 42.0, 120.0));
	}

	#[test]
	fn move_node_only_touches_target() {
		let mut state = editor_with(4);
		let before = state.nodes().to_vec();
		state.move_node("task2", -30.0, 900.0);
		let moved = state.node("task2").unwrap();
		assert_eq!((moved.x, moved.y), (-30.0, 900.0));
		assert_eq!(moved.width, 120.0);
		for (old, new) in before.iter().zip(state.nodes()) {
			if old.id != "task2" {
				assert_eq!(old, new);
			}
		}
		assert_eq!(state.nodes().len(), before.len());
	}

	#[test]
	fn duplicate_and_reverse_connections_are_kept() {
		let mut state = editor_with(2);
		for _ in 0..2 {
			state.complete_gesture("task1");
			state.complete_gesture("task2");
		}
		assert_eq!(
			state.connections(),
			&[conn("task1", "task2"), conn("task1", "task2")]
		);

		state.complete_gesture("task2");
		state.complete_gesture("task1");
		assert_eq!(
			state.connections(),
			&[
				conn("task1", "task2"),
				conn("task1", "task2"),
				conn("task2", "task1"),
			]
		);

		state.delete_node("task2");
		assert!(state.connections().is_empty());
	}

	#[test]
	fn resize_clamps_to_minimum_width() {
		let mut state = editor_with(1);
		state.resize_node("task1", 50.0);
		assert_eq!(state.node("task1").unwrap().width, 120.0);
		state.resize_node("task1", 300.0);
		assert_eq!(state.node("task1").unwrap().width, 300.0);
	}

	#[test]
	fn unknown_ids_are_no_ops() {
		let mut state = editor_with(2);
		let before = state.nodes().to_vec();
		state.move_node("nope", 1.0, 1.0);
		state.resize_node("nope", 500.0);
		state.rename_node("nope", Some("x"));
		state.delete_node("nope");
		state.complete_gesture("nope");
		assert_eq!(state.nodes(), &before[..]);
		assert_eq!(state.gesture(), &ConnectionGesture::Idle);
	}

	#[test]
	fn rename_ignores_cancel_and_empty() {
		let mut state = editor_with(1);
		state.rename_node("task1", None);
		state.rename_node("task1", Some(""));
		assert_eq!(state.node("task1").unwrap().label, "Task 1");
		state.rename_node("task1", Some("Review"));
		assert_eq!(state.node("task1").unwrap().label, "Review");
	}

	#[test]
	fn delete_cascades_connections_in_order() {
		let mut state = editor_with(4);
		let pairs = [
			("task1", "task2"),
			("task2", "task3"),
			("task3", "task4"),
			("task4", "task1"),
		];
		for (a, b) in pairs {
			state.complete_gesture(a);
			state.complete_gesture(b);
		}
		state.delete_node("task2");
		assert!(state.node("task2").is_none());
		assert_eq!(
			state.connections(),
			&[conn("task3", "task4"), conn("task4", "task1")]
		);
	}

	#[test]
	fn gesture_connects_then_returns_to_idle() {
		let mut state = editor_with(3);
		state.complete_gesture("task1");
		assert_eq!(state.gesture(), &ConnectionGesture::Pending("task1".into()));
		assert!(state.connections().is_empty());

		state.complete_gesture("task2");
		assert_eq!(state.connections(), &[conn("task1", "task2")]);
		assert_eq!(state.gesture(), &ConnectionGesture::Idle);

		state.complete_gesture("task3");
		assert_eq!(state.gesture(), &ConnectionGesture::Pending("task3".into()));
		assert_eq!(state.connections().len(), 1);
	}

	#[test]
	fn reselecting_pending_source_keeps_it_pending() {
		let mut state = editor_with(2);
		state.complete_gesture("task1");
		state.complete_gesture("task1");
		assert!(state.is_pending_source("task1"));
		assert!(state.connections().is_empty());
	}

	#[test]
	fn deleting_pending_source_resets_gesture() {
		let mut state = editor_with(2);
		state.complete_gesture("task1");
		state.delete_node("task1");
		assert_eq!(state.gesture(), &ConnectionGesture::Idle);
		state.complete_gesture("task2");
		assert!(state.connections().is_empty());
	}
}
