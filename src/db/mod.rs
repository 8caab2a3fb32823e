mod memory;
pub use memory::*;

use std::fmt;

use crate::models::{Blueprint, Point};

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The requested author or blueprint does not exist.
    NotFound(String),
    /// The write was rejected, e.g. a blueprint with the same author and name exists.
    Persistence(String),
}

impl StoreError {
    pub fn author_not_found(author: &str) -> Self {
        StoreError::NotFound(format!("no blueprints found for author '{author}'"))
    }

    pub fn blueprint_not_found(author: &str, name: &str) -> Self {
        StoreError::NotFound(format!("blueprint '{author}/{name}' not found"))
    }

    pub fn already_exists(author: &str, name: &str) -> Self {
        StoreError::Persistence(format!("blueprint '{author}/{name}' already exists"))
    }

    pub fn message(&self) -> &str {
        match self {
            StoreError::NotFound(message) | StoreError::Persistence(message) => message,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StoreError {}

/// Holds every blueprint and owns all of their state.
///
/// Implementations must keep `(author, name)` unique and must stay consistent
/// when called from several workers at once.
pub trait BlueprintStore: Send + Sync {
    fn get_all(&self) -> Vec<Blueprint>;

    /// Fails with [`StoreError::NotFound`] when the author has no blueprints.
    fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>>;

    fn get(&self, author: &str, name: &str) -> Result<Blueprint>;

    /// Fails with [`StoreError::Persistence`] when `(author, name)` is taken.
    fn add(&self, blueprint: Blueprint) -> Result<()>;

    /// Appends `point` to the end of an existing blueprint. Never creates one.
    fn add_point(&self, author: &str, name: &str, point: Point) -> Result<()>;
}
