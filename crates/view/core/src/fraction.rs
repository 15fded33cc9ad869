//! Numeric-to-visual mapping for stat bars.
//!
//! Display data comes straight from callers and may be malformed. Nothing in
//! here fails: bad input degrades to an empty bar.

/// Linear fill fraction for `current` out of `maximum`.
///
/// - `maximum <= 0`, or either input not finite: `0.0`
/// - otherwise `current / maximum`, clamped to `[0, 1]`
///
/// The result is never `NaN` and never negative.
pub fn display_fraction(current: f64, maximum: f64) -> f64 {
    if !current.is_finite() || !maximum.is_finite() || maximum <= 0.0 {
        return 0.0;
    }
    (current / maximum).clamp(0.0, 1.0)
}

/// A fill fraction guaranteed to lie in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Fraction(f64);

impl Fraction {
    pub const EMPTY: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    pub fn of(current: f64, maximum: f64) -> Self {
        Self(display_fraction(current, maximum))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0.0
    }

    /// Inline width style for a filled bar, e.g. `width: 25.0%`.
    pub fn width_style(self, precision: usize) -> String {
        format!("width: {:.*}%", precision, self.percent())
    }
}

/// A labelled scalar stat such as health or energy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatValue {
    pub label: String,
    pub current: f64,
    pub maximum: f64,
}

impl StatValue {
    pub fn new(label: impl Into<String>, current: impl Into<f64>, maximum: impl Into<f64>) -> Self {
        Self {
            label: label.into(),
            current: current.into(),
            maximum: maximum.into(),
        }
    }

    pub fn fraction(&self) -> Fraction {
        Fraction::of(self.current, self.maximum)
    }

    /// Human-readable `current/maximum`; non-finite values show as 0.
    pub fn summary(&self) -> String {
        format!(
            "{}/{}",
            finite_or_zero(self.current),
            finite_or_zero(self.maximum)
        )
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
