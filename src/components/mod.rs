pub mod tool_palette;
pub mod workflow_editor;
