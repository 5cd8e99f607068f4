//! Text formatting helpers shared by the card and terminal renderers.

/// Largest denominator used when printing quantities.
const MAX_DENOMINATOR: u128 = 32;

/// Fractional parts smaller than 2^-120 are treated as zero.
const MAX_SHIFT: u32 = 120;

/// Format a quantity as a mixed number, e.g. `1.5` as `"1 1/2"` and `0.25`
/// as `"1/4"`.
///
/// The fractional part is approximated by the closest fraction with a
/// denominator of at most 32. A fraction that rounds to a whole number is
/// carried into the integer part. Zero and negative values produce an
/// empty string.
pub fn fraction(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return String::new();
    }
    let mut integer = value.trunc() as u64;
    let (mut num, den) = match exact_ratio(value - value.trunc()) {
        Some((n, d)) => limit_denominator(n, d, MAX_DENOMINATOR),
        None => (0, 1),
    };
    if num == den {
        integer += 1;
        num = 0;
    }

    match (integer, num) {
        (0, 0) => String::new(),
        (0, _) => format!("{num}/{den}"),
        (_, 0) => integer.to_string(),
        _ => format!("{integer} {num}/{den}"),
    }
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts after any character that is not alphabetic, so
/// `"on the rocks"` becomes `"On The Rocks"` and `"mai-tai"` becomes
/// `"Mai-Tai"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if in_word {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        in_word = ch.is_alphabetic();
    }
    out
}

/// English plural of a unit name.
pub(crate) fn pluralize(word: &str) -> String {
    let sibilant = ["s", "x", "z", "sh", "ch"]
        .iter()
        .any(|suffix| word.ends_with(suffix));
    if sibilant {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// Exact `numerator / denominator` of a value in `[0, 1)`.
fn exact_ratio(value: f64) -> Option<(u128, u128)> {
    if value == 0.0 {
        return Some((0, 1));
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction_bits = (bits & ((1u64 << 52) - 1)) as u128;
    let (mantissa, exponent) = if biased == 0 {
        (fraction_bits, -1074)
    } else {
        (fraction_bits | (1u128 << 52), biased - 1075)
    };
    let shift = u32::try_from(-exponent).ok()?;
    if shift > MAX_SHIFT {
        return None;
    }
    let tz = mantissa.trailing_zeros().min(shift);
    Some((mantissa >> tz, 1u128 << (shift - tz)))
}

/// Closest fraction to `num / den` whose denominator is at most `max`.
///
/// Walks the continued fraction expansion and picks between the last
/// convergent and the best semiconvergent.
fn limit_denominator(num: u128, den: u128, max: u128) -> (u128, u128) {
    if den <= max {
        return (num, den);
    }
    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (num, den);
    while d != 0 {
        let a = n / d;
        let q2 = q0.saturating_add(a.saturating_mul(q1));
        if q2 > max {
            break;
        }
        let p2 = p0.saturating_add(a.saturating_mul(p1));
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        (n, d) = (d, n - a * d);
    }
    let k = (max - q0) / q1;
    if 2 * d * (q0 + k * q1) <= den {
        (p1, q1)
    } else {
        (p0 + k * p1, q0 + k * q1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // fraction
    // =========================================================================

    #[test]
    fn whole_numbers() {
        assert_eq!(fraction(2.0), "2");
        assert_eq!(fraction(1.0), "1");
    }

    #[test]
    fn simple_fractions() {
        assert_eq!(fraction(0.5), "1/2");
        assert_eq!(fraction(0.25), "1/4");
        assert_eq!(fraction(0.75), "3/4");
        assert_eq!(fraction(1.5), "1 1/2");
    }

    #[test]
    fn repeating_decimals_are_approximated() {
        assert_eq!(fraction(1.0 / 3.0), "1/3");
        assert_eq!(fraction(0.33), "1/3");
        assert_eq!(fraction(2.0 / 3.0), "2/3");
        assert_eq!(fraction(0.1), "1/10");
        assert_eq!(fraction(0.125), "1/8");
    }

    #[test]
    fn near_whole_values_carry() {
        assert_eq!(fraction(0.999), "1");
        assert_eq!(fraction(1.999), "2");
        assert_eq!(fraction(2.001), "2");
    }

    #[test]
    fn zero_and_negative_are_empty() {
        assert_eq!(fraction(0.0), "");
        assert_eq!(fraction(-1.0), "");
        assert_eq!(fraction(f64::NAN), "");
    }

    #[test]
    fn limit_denominator_prefers_closest() {
        // Exactly halfway between 0 and 1/32 keeps the convergent.
        assert_eq!(limit_denominator(1, 64, 32), (0, 1));
        assert_eq!(limit_denominator(3, 100, 32), (1, 32));
        assert_eq!(limit_denominator(7, 16, 32), (7, 16));
    }

    // =========================================================================
    // title_case
    // =========================================================================

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("on the rocks"), "On The Rocks");
        assert_eq!(title_case("STIRRED"), "Stirred");
        assert_eq!(title_case("mai-tai"), "Mai-Tai");
        assert_eq!(title_case(""), "");
    }

    // =========================================================================
    // pluralize
    // =========================================================================

    #[test]
    fn plural_units() {
        assert_eq!(pluralize("ounce"), "ounces");
        assert_eq!(pluralize("dash"), "dashes");
        assert_eq!(pluralize("splash"), "splashes");
        assert_eq!(pluralize("spritz"), "spritzes");
        assert_eq!(pluralize("twist"), "twists");
    }
}
