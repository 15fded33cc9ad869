use proptest::prelude::*;
use view_core::{Fraction, StatValue, display_fraction};

proptest! {
    #[test]
    fn non_positive_maximum_is_zero(current in any::<f64>(), maximum in -1.0e12f64..=0.0) {
        let fraction = display_fraction(current, maximum);
        prop_assert_eq!(fraction, 0.0);
    }

    #[test]
    fn in_range_values_divide_exactly(maximum in 1.0e-6f64..1.0e9, ratio in 0.0f64..=1.0) {
        let current = maximum * ratio;
        prop_assume!(current <= maximum);
        prop_assert_eq!(display_fraction(current, maximum), current / maximum);
    }

    #[test]
    fn never_nan_or_out_of_range(current in any::<f64>(), maximum in any::<f64>()) {
        let fraction = display_fraction(current, maximum);
        prop_assert!(!fraction.is_nan());
        prop_assert!((0.0..=1.0).contains(&fraction));
    }
}

#[test]
fn health_thirty_of_one_twenty_is_a_quarter() {
    let stat = StatValue::new("HP", 30, 120);
    assert_eq!(stat.fraction().value(), 0.25);
    assert_eq!(stat.fraction().percent(), 25.0);
}

#[test]
fn zero_maximum_renders_empty_bar() {
    let stat = StatValue::new("HP", 30, 0);
    assert_eq!(stat.fraction(), Fraction::EMPTY);
}
