// File: crates/daycount-core/src/scale.rs
// Summary: Linear domain-to-range mapping used by the color scale.

/// Linearly map `n` from `[from_low, from_high]` onto `[to_low, to_high]`.
///
/// No clamping: values outside the domain extrapolate. A degenerate domain
/// (`from_low == from_high`) yields a non-finite result; guard before calling.
#[inline]
pub fn map_range(from_low: f64, from_high: f64, to_low: f64, to_high: f64, n: f64) -> f64 {
    to_low + (to_high - to_low) / (from_high - from_low) * (n - from_low)
}

/// Domain and range bundled together, checked for degeneracy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// True when the domain has zero width and no mapping exists.
    pub fn is_degenerate(&self) -> bool {
        (self.domain.1 - self.domain.0).abs() < f64::EPSILON
    }

    /// Map `v` from domain to range; `None` for a degenerate domain.
    #[inline]
    pub fn map(&self, v: f64) -> Option<f64> {
        if self.is_degenerate() { return None; }
        Some(map_range(self.domain.0, self.domain.1, self.range.0, self.range.1, v))
    }

    /// Map `v` from range back to domain; `None` for a degenerate range.
    #[inline]
    pub fn invert(&self, v: f64) -> Option<f64> {
        if (self.range.1 - self.range.0).abs() < f64::EPSILON { return None; }
        Some(map_range(self.range.0, self.range.1, self.domain.0, self.domain.1, v))
    }
}
