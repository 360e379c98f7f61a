use crate::equation::coefficients::CoefficientMap;
use crate::equation::config::RenderStyle;
use itertools::Itertools;
use tabled::{builder::Builder, settings::Style};

/// printf-style `%.<precision>g`: `precision` significant digits, fixed notation for decimal
/// exponents in [-4, precision), scientific otherwise, trailing zeros removed.
///# Example
/// ```
/// use RustedPoly::equation::reduced_form::format_g;
/// assert_eq!(format_g(-1.5, 6), "-1.5");
/// assert_eq!(format_g(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(format_g(1234567.0, 6), "1.23457e+06");
/// assert_eq!(format_g(0.00001, 6), "1e-05");
/// ```
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    let precision = precision.max(1);
    // rounding to `precision` significant digits first decides the notation
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn sign_of(coefficient: f64) -> char {
    if coefficient < 0.0 { '-' } else { '+' }
}

/// the reduced equation `<terms> = 0`, terms in ascending exponent order, zero coefficients included.
///# Example
/// ```
/// use RustedPoly::equation::coefficients::CoefficientMap;
/// use RustedPoly::equation::config::RenderStyle;
/// use RustedPoly::equation::reduced_form::reduced_form;
/// let map: CoefficientMap = vec![(0, 4.0), (1, 4.0), (2, -9.3)].into_iter().collect();
/// assert_eq!(reduced_form(&map, RenderStyle::Compact, 6), "4 * X^0 +4 * X^1 -9.3 * X^2 = 0");
/// assert_eq!(reduced_form(&map, RenderStyle::Spaced, 6), "4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0");
/// ```
pub fn reduced_form(map: &CoefficientMap, style: RenderStyle, precision: usize) -> String {
    if map.is_empty() {
        return "0 * X^0 = 0".to_string();
    }
    let body = match style {
        RenderStyle::Compact => {
            let joined = map
                .iter()
                .map(|(exponent, c)| {
                    format!(
                        "{}{} * X^{}",
                        sign_of(c),
                        format_g(c.abs(), precision),
                        exponent
                    )
                })
                .join(" ");
            joined
                .strip_prefix('+')
                .map(|rest| rest.trim_start().to_string())
                .unwrap_or(joined)
        }
        RenderStyle::Spaced => map
            .iter()
            .enumerate()
            .map(|(i, (exponent, c))| {
                let magnitude = format_g(c.abs(), precision);
                match (i, sign_of(c)) {
                    (0, '-') => format!("-{} * X^{}", magnitude, exponent),
                    (0, _) => format!("{} * X^{}", magnitude, exponent),
                    (_, sign) => format!(" {} {} * X^{}", sign, magnitude, exponent),
                }
            })
            .collect::<String>(),
    };
    format!("{} = 0", body)
}

/// pretty table of the reduced coefficients
pub fn coefficient_table(map: &CoefficientMap, precision: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(["term".to_string(), "coefficient".to_string()]);
    for (exponent, coefficient) in map.iter() {
        builder.push_record([format!("X^{}", exponent), format_g(coefficient, precision)]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}
