//! Sequence configuration parameters.

/// Configuration for a [`Sequence`](crate::Sequence).
///
/// Controls the up-front reservation and the optional growth ceiling.
/// All values are immutable after the sequence is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeqConfig {
    /// Number of element slots reserved at creation.
    ///
    /// Default: 16.
    pub initial_capacity: usize,

    /// Hard ceiling on the element count, or `None` for unbounded.
    ///
    /// When set, a push that would exceed the ceiling fails with
    /// [`SeqError::AllocationFailed`](crate::SeqError::AllocationFailed)
    /// and leaves the sequence unchanged.
    pub max_len: Option<usize>,
}

impl SeqConfig {
    /// Default up-front reservation, in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Create a config with the default reservation and no ceiling.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_len: None,
        }
    }

    /// Replace the up-front reservation.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Replace the growth ceiling.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reservation_is_16() {
        let config = SeqConfig::new();
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.max_len, None);
    }

    #[test]
    fn builder_style_overrides() {
        let config = SeqConfig::new().with_initial_capacity(4).with_max_len(8);
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.max_len, Some(8));
    }
}
