//! Two named values compared by text or by number

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A left/right pair of values of the same type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

impl<T> Pair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }
}

impl<T: Display> Pair<T> {
    /// True when both values render to the same string
    pub fn same_text(&self) -> bool {
        self.left.to_string() == self.right.to_string()
    }
}

impl<T: Copy + Into<f64>> Pair<T> {
    /// True when both values are equal as `f64`
    pub fn same_number(&self) -> bool {
        let left: f64 = self.left.into();
        let right: f64 = self.right.into();
        left == right
    }
}
