#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluateError {
    #[error("invalid path {0:?}: evaluation paths must start with '/'")]
    InvalidPath(String),
}
