// Rounding rules shared by the derivations.
//
// Derived values must be reproducible across implementations, so these follow
// fixed tie-breaking rules rather than `f64::round` (ties away from zero).

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to two decimal places using the exact binary value of `x`.
///
/// `1.005` is stored just below 1.005 and therefore rounds to `1.0`. Exact
/// ties (values of the form k/8 with k odd) round away from zero.
pub fn round_to_cents(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let eighths = x.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        // x * 100 is exactly representable here and sits on .5.
        let cents = (x.abs() * 100.0).floor() + 1.0;
        return (cents / 100.0).copysign(x);
    }
    format!("{x:.2}").parse().unwrap_or(x)
}

/// Round to a whole percentage, ties away from zero.
pub fn round_percent(x: f64) -> i64 {
    x.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_up_ties_go_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn cents_uses_exact_binary_value() {
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(0.444), 0.44);
        assert_eq!(round_to_cents(0.446), 0.45);
    }

    #[test]
    fn cents_exact_ties_round_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(-0.125), -0.13);
    }

    #[test]
    fn cents_leaves_non_finite_alone() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn percent_rounding() {
        assert_eq!(round_percent(102.5), 103);
        assert_eq!(round_percent(-33.5), -34);
        assert_eq!(round_percent(11.1), 11);
    }
}
