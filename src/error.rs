use thiserror::Error;

pub type Result<T> = std::result::Result<T, BloomError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BloomError {
    /// Bad construction parameters. Fix them and build a new filter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A bit position outside the store. With a well-behaved hash function
    /// the filter never produces one, so seeing this means a broken
    /// collaborator rather than a transient fault.
    #[error("Index out of bounds: {index} >= {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },
}
