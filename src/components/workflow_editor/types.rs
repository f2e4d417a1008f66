/// Stable identifier of a node for its whole lifetime, e.g. `task3`.
pub type NodeId = String;

/// Drag payload type carried by palette items.
pub const NODE_KIND_MIME: &str = "application/reactflow";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
	#[default]
	Default,
	Approval,
	File,
}

impl NodeKind {
	pub const ALL: [NodeKind; 3] = [NodeKind::Default, NodeKind::Approval, NodeKind::File];

	/// Tag written into the drag payload.
	pub fn tag(self) -> &'static str {
		match self {
			NodeKind::Default => "default",
			NodeKind::Approval => "approval",
			NodeKind::File => "file",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			NodeKind::Default => "Basic Process",
			NodeKind::Approval => "Approval Step",
			NodeKind::File => "File Attachment",
		}
	}

	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.tag() == tag)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkflowNode {
	pub id: NodeId,
	pub label: String,
	pub kind: NodeKind,
	pub x: f64,
	pub y: f64,
	pub width: f64,
}

/// Directed edge between two node ids. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
	pub from: NodeId,
	pub to: NodeId,
}
