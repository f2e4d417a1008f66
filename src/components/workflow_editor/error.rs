use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
	#[error("overlay canvas is not mounted")]
	NotMounted,

	#[error("2d rendering context unavailable: {0}")]
	Context(String),

	#[error("drop carried no `{0}` payload")]
	MissingPayload(&'static str),

	#[error("unknown node kind tag `{0}`")]
	UnknownKind(String),
}
