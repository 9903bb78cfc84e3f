/// Number of metric cards in the hero; the rotation wraps at this size.
pub const METRIC_COUNT: usize = 3;

/// Which hero metric card is currently emphasised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationState {
    index: usize,
}

impl RotationState {
    pub fn index(&self) -> usize {
        self.index
    }

    /// One timer tick.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % METRIC_COUNT;
    }
}
