//! Errors raised by the animation engine.

#[derive(Debug, thiserror::Error)]
pub enum AnimationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
