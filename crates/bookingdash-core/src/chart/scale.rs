//! Linear value axis with "nice" tick spacing.

/// Upper bound on gridlines per axis.
pub const DEFAULT_MAX_TICKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl LinearScale {
    /// Fit a scale to `[lo, hi]` using at most `max_ticks` gridlines. With
    /// `include_zero` the range is stretched to contain zero, as bar charts
    /// need a baseline.
    ///
    /// Returns `None` when no finite scale covers the range, e.g. when the
    /// span itself overflows `f64`.
    pub fn fit(lo: f64, hi: f64, max_ticks: usize, include_zero: bool) -> Option<Self> {
        let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        if include_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        // Spans this narrow relative to the values are treated as flat.
        let magnitude = lo.abs().max(hi.abs()).max(1.0);
        if hi - lo < magnitude * 1e-9 {
            if include_zero && lo == 0.0 {
                hi = 1.0;
            } else {
                // Padding must exceed one f64 step at this magnitude.
                let pad = (magnitude * 0.1).max(1.0);
                lo -= pad;
                hi += pad;
            }
        }

        let span = hi - lo;
        if !span.is_finite() || span <= 0.0 {
            return None;
        }
        let intervals = max_ticks.max(2) - 1;
        let range = nice_num(span, false);
        let step = nice_num(range / intervals as f64, true);
        let scale = Self {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        };
        let usable = scale.min.is_finite()
            && scale.max.is_finite()
            && scale.step.is_finite()
            && scale.step > 0.0;
        usable.then_some(scale)
    }

    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    /// Map `value` linearly so that `min` lands on `from` and `max` on `to`.
    pub fn project(&self, value: f64, from: f64, to: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return from;
        }
        from + (value - self.min) / span * (to - from)
    }
}

/// Round `range` to 1, 2, 5 or 10 times a power of ten.
fn nice_num(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = range / magnitude;
    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Whole numbers print without a decimal point; anything else keeps at most
/// two decimals.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_sample_range() {
        let scale = LinearScale::fit(3.0, 9.0, DEFAULT_MAX_TICKS, false).unwrap();
        assert_eq!(scale, LinearScale { min: 2.0, max: 10.0, step: 2.0 });
        assert_eq!(scale.ticks(), vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn bar_sample_range_starts_at_zero() {
        let scale = LinearScale::fit(3.0, 12.0, DEFAULT_MAX_TICKS, true).unwrap();
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 15.0);
        assert_eq!(scale.ticks(), vec![0.0, 5.0, 10.0, 15.0]);
    }

    #[test]
    fn flat_range_widens() {
        let scale = LinearScale::fit(4.0, 4.0, DEFAULT_MAX_TICKS, false).unwrap();
        assert!(scale.min < 4.0 && scale.max > 4.0);

        let zero = LinearScale::fit(0.0, 0.0, DEFAULT_MAX_TICKS, true).unwrap();
        assert_eq!(zero.min, 0.0);
        assert!(zero.max >= 1.0);
    }

    #[test]
    fn flat_range_widens_at_large_magnitude() {
        let scale = LinearScale::fit(1e17, 1e17, DEFAULT_MAX_TICKS, false).unwrap();
        assert!(scale.min < 1e17 && scale.max > 1e17);
        assert!(scale.step > 0.0);
        assert!(scale.ticks().iter().all(|t| t.is_finite()));
    }

    #[test]
    fn overflowing_span_has_no_scale() {
        assert_eq!(LinearScale::fit(-1e308, 1e308, DEFAULT_MAX_TICKS, false), None);
        assert_eq!(LinearScale::fit(-1e308, 1e308, DEFAULT_MAX_TICKS, true), None);
    }

    #[test]
    fn negative_values_keep_zero_inside() {
        let scale = LinearScale::fit(-7.0, 3.0, DEFAULT_MAX_TICKS, true).unwrap();
        assert!(scale.min <= -7.0);
        assert!(scale.max >= 3.0);
        assert!(scale.ticks().contains(&0.0));
    }

    #[test]
    fn project_flips_for_svg() {
        let scale = LinearScale { min: 0.0, max: 10.0, step: 2.0 };
        assert_eq!(scale.project(0.0, 200.0, 0.0), 200.0);
        assert_eq!(scale.project(10.0, 200.0, 0.0), 0.0);
        assert_eq!(scale.project(5.0, 200.0, 0.0), 100.0);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(-5.0), "-5");
        assert_eq!(format_tick(0.5), "0.5");
        assert_eq!(format_tick(0.25), "0.25");
    }
}
