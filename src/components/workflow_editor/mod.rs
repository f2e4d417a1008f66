mod component;
mod config;
mod error;
mod gesture;
mod node_widget;
mod render;
mod state;
mod types;

pub use component::WorkflowEditor;
pub use config::EditorConfig;
pub use types::{NODE_KIND_MIME, NodeKind};
