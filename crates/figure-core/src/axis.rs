// File: crates/figure-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Axis spanning the data range padded by `margin` (fraction of the
    /// span) on both ends. A degenerate or empty range widens to a unit
    /// span so rendering never divides by zero.
    pub fn fit_with_margin(label: impl Into<String>, data: &[f64], margin: f64) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in data {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 1.0;
        }
        let span = (hi - lo).max(1e-9);
        Self::new(label, lo - span * margin, hi + span * margin)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn fit_pads_both_ends() {
        let a = Axis::fit_with_margin("x", &[0.0, 10.0], 0.05);
        assert!(a.min < 0.0 && a.max > 10.0);
        assert!((a.min + 0.5).abs() < 1e-9);
        assert!((a.max - 10.5).abs() < 1e-9);
    }

    #[test]
    fn fit_empty_data_is_unit_span() {
        let a = Axis::fit_with_margin("x", &[], 0.05);
        assert!(a.span() > 0.0);
    }
}
