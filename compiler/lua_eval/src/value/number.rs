//! Number rendering.

/// Decimal exponents from this one up print in exponent form.
const EXP_UPPER: i32 = 6;
/// Decimal exponents below this one print in exponent form.
const EXP_LOWER: i32 = -4;

/// Render a number the way `print` shows it.
///
/// The digits are the shortest that read back to the same double. The
/// layout is `%g`-style: plain decimal (`100000`, `0.0001`, `2.5`) unless the
/// decimal exponent is below -4 or at least 6, in which case exponent form
/// with a sign and at least two exponent digits (`1e+06`, `1.5e-07`).
/// Infinities and NaN print as `+Inf`, `-Inf` and `NaN`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{n:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };
    if (EXP_LOWER..EXP_UPPER).contains(&exponent) {
        return n.to_string();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
