//! Scratch storage for intermediate results

/// Holds the most recent array of items and an insertion-ordered list of
/// accumulated items.
#[derive(Debug, Clone)]
pub struct Scratch<T> {
    current: Vec<T>,
    collected: Vec<T>,
}

impl<T> Default for Scratch<T> {
    fn default() -> Self {
        Self {
            current: Vec::new(),
            collected: Vec::new(),
        }
    }
}

impl<T> Scratch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently stored array
    pub fn current(&self) -> &[T] {
        &self.current
    }

    /// Replace the current array
    pub fn set_current(&mut self, items: Vec<T>) {
        self.current = items;
    }

    /// Append a value to the accumulated list
    pub fn accumulate(&mut self, value: T) {
        self.collected.push(value);
    }

    pub fn collected(&self) -> &[T] {
        &self.collected
    }

    /// Drain the accumulated list, leaving it empty
    pub fn take_collected(&mut self) -> Vec<T> {
        std::mem::take(&mut self.collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_preserves_order() {
        let mut scratch = Scratch::new();
        scratch.accumulate("b");
        scratch.accumulate("a");
        scratch.accumulate("c");
        assert_eq!(scratch.collected(), &["b", "a", "c"]);
    }

    #[test]
    fn test_take_collected_resets() {
        let mut scratch = Scratch::new();
        scratch.accumulate(1);
        assert_eq!(scratch.take_collected(), vec![1]);
        assert!(scratch.collected().is_empty());
    }

    #[test]
    fn test_set_current_replaces() {
        let mut scratch = Scratch::new();
        scratch.set_current(vec![1, 2]);
        scratch.set_current(vec![3]);
        assert_eq!(scratch.current(), &[3]);
    }
}
