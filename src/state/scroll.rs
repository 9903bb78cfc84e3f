use crate::config::NAV_FADE_DISTANCE;

/// Last vertical scroll offset reported by the window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
}

impl ScrollState {
    pub fn record(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn nav_opacity(&self) -> f64 {
        nav_opacity(self.offset)
    }
}

/// `min(offset / 100, 1)`, floored at zero. Overscroll on some platforms
/// reports negative offsets.
pub fn nav_opacity(offset: f64) -> f64 {
    if !offset.is_finite() {
        return if offset == f64::INFINITY { 1.0 } else { 0.0 };
    }
    (offset / NAV_FADE_DISTANCE).clamp(0.0, 1.0)
}
