//! Rose curve sampling, computed entirely on the client.

use std::f64::consts::PI;
use std::fmt;

use crate::series::PlotSeries;

/// Angular step between samples.
pub const STEP: f64 = 0.01;

/// Accepted amplitude interval.
pub const A_RANGE: (f64, f64) = (0.1, 5.0);
/// Accepted interval for both `n` and `d`.
pub const RATIO_RANGE: (f64, f64) = (1.0, 15.0);
/// Upper bound on the number of samples: a full curve at `d = 15`.
pub const MAX_SAMPLES: usize = 9425;

/// Trigonometric function of a rose curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trig {
    /// r = a·cos(kθ)
    #[default]
    Cos,
    /// r = a·sin(kθ)
    Sin,
}

impl Trig {
    /// The other function.
    pub fn toggle(self) -> Self {
        match self {
            Self::Cos => Self::Sin,
            Self::Sin => Self::Cos,
        }
    }

    /// Function name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cos => "cos",
            Self::Sin => "sin",
        }
    }

    fn apply(self, v: f64) -> f64 {
        match self {
            Self::Cos => v.cos(),
            Self::Sin => v.sin(),
        }
    }
}

/// Parameters of `r = a·f((n/d)·θ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoseParams {
    /// Amplitude.
    pub a: f64,
    /// Ratio numerator.
    pub n: f64,
    /// Ratio denominator.
    pub d: f64,
    /// cos or sin.
    pub trig: Trig,
}

impl Default for RoseParams {
    fn default() -> Self {
        Self {
            a: 1.0,
            n: 2.0,
            d: 5.0,
            trig: Trig::Cos,
        }
    }
}

impl RoseParams {
    /// Copy with `a`, `n` and `d` clamped into their accepted intervals.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64, (lo, hi): (f64, f64)| v.clamp(lo, hi);
        Self {
            a: clamp(self.a, A_RANGE),
            n: clamp(self.n, RATIO_RANGE),
            d: clamp(self.d, RATIO_RANGE),
            trig: self.trig,
        }
    }

    /// Upper end (exclusive) of the sampled angle.
    pub fn theta_end(&self) -> f64 {
        2.0 * self.d * PI
    }

    /// Number of samples in `[0, theta_end)`, at most [`MAX_SAMPLES`].
    pub fn sample_count(&self) -> usize {
        let end = self.theta_end();
        if !end.is_finite() || end <= 0.0 {
            return 0;
        }
        let count = (end / STEP).ceil();
        if count >= MAX_SAMPLES as f64 {
            MAX_SAMPLES
        } else {
            count as usize
        }
    }
}

impl fmt::Display for RoseParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r = {} * {}(({}/{})θ)",
            self.a,
            self.trig.name(),
            self.n,
            self.d
        )
    }
}

/// Sample the rose curve.
///
/// `θ_i = i·STEP` for every `θ_i < 2·d·π`, emitting `(r·cos θ, r·sin θ)` with
/// `r = a·f(k·θ)`, `k = n/d`. The angle is computed from the index so the
/// sample count and endpoints do not depend on accumulated rounding.
pub fn sample(params: &RoseParams) -> PlotSeries {
    let k = params.n / params.d;
    let points = (0..params.sample_count())
        .map(|i| {
            let theta = i as f64 * STEP;
            let r = params.a * params.trig.apply(k * theta);
            (r * theta.cos(), r * theta.sin())
        })
        .collect();
    PlotSeries::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_point_of_default_rose() {
        let series = sample(&RoseParams::default());
        let (x, y) = series.points()[0];
        assert_eq!((x, y), (1.0, 0.0));
    }

    #[test]
    fn points_stay_within_amplitude() {
        for &(a, n, d) in &[(1.0, 2.0, 5.0), (2.5, 7.0, 3.0), (0.3, 1.0, 1.0), (4.0, 15.0, 15.0)] {
            for trig in [Trig::Cos, Trig::Sin] {
                let params = RoseParams { a, n, d, trig };
                let series = sample(&params);
                assert!(!series.is_empty());
                let limit = (a + 1e-9) * (a + 1e-9);
                assert!(series.points().iter().all(|(x, y)| x * x + y * y <= limit));
            }
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let params = RoseParams {
            a: 1.7,
            n: 3.0,
            d: 4.0,
            trig: Trig::Sin,
        };
        assert_eq!(sample(&params), sample(&params));
    }

    #[test]
    fn sample_count_covers_half_open_interval() {
        let params = RoseParams {
            d: 1.0,
            ..RoseParams::default()
        };
        let series = sample(&params);
        assert_eq!(series.len(), 629);
        let last_theta = (series.len() - 1) as f64 * STEP;
        assert!(last_theta < params.theta_end());
        assert!(last_theta + STEP >= params.theta_end());
    }

    #[test]
    fn non_positive_denominator_yields_nothing() {
        let params = RoseParams {
            d: 0.0,
            ..RoseParams::default()
        };
        assert!(sample(&params).is_empty());
    }

    #[test]
    fn fractional_denominator_closes_over_its_own_period() {
        let params = RoseParams {
            a: 2.0,
            n: 3.0,
            d: 2.5,
            trig: Trig::Cos,
        };
        let series = sample(&params);
        assert_eq!(series.len(), 1571);
        assert_eq!(series.points()[0], (2.0, 0.0));
        let limit = (2.0 + 1e-9) * (2.0 + 1e-9);
        assert!(series.points().iter().all(|(x, y)| x * x + y * y <= limit));
    }

    #[test]
    fn sample_count_is_capped_for_huge_denominators() {
        let top = RoseParams {
            d: RATIO_RANGE.1,
            ..RoseParams::default()
        };
        assert_eq!(top.sample_count(), MAX_SAMPLES);

        let huge = RoseParams {
            d: 1e20,
            ..RoseParams::default()
        };
        assert_eq!(sample(&huge).len(), MAX_SAMPLES);
    }

    #[test]
    fn clamped_keeps_parameters_in_range() {
        let wild = RoseParams {
            a: 40.0,
            n: 0.2,
            d: 1e20,
            trig: Trig::Sin,
        };
        let tame = wild.clamped();
        assert_eq!((tame.a, tame.n, tame.d), (5.0, 1.0, 15.0));
        assert_eq!(tame.trig, Trig::Sin);
        assert_eq!(RoseParams::default().clamped(), RoseParams::default());
    }

    #[test]
    fn label_reads_like_formula() {
        assert_eq!(RoseParams::default().to_string(), "r = 1 * cos((2/5)θ)");
    }
}
