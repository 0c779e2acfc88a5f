//! Display formatting for weights (pt-BR number convention)
//!
//! Kept apart from the engine so numeric results stay locale-agnostic.

/// Render kilograms with magnitude-dependent precision.
///
/// Tiny masses keep their significant digits instead of collapsing to
/// "0,000": below 0.0001 kg eight decimals, below 0.001 kg six decimals,
/// otherwise three decimals with `.` grouping and `,` as decimal mark.
/// Negative masses fall in the eight-decimal tier.
pub fn format_weight(kg: f64) -> String {
    if kg == 0.0 || !kg.is_finite() {
        return "0".to_string();
    }
    if kg < 0.0001 {
        return format!("{:.8}", kg).replace('.', ",");
    }
    if kg < 0.001 {
        return format!("{:.6}", kg).replace('.', ",");
    }
    format_decimal_pt_br(kg, 3)
}

/// Fixed-precision number with `.` thousands separator and `,` decimal mark.
///
/// Rounds the shortest decimal form of `value` half away from zero, so
/// 1.0005 renders as "1,001" although its binary value sits just below.
pub fn format_decimal_pt_br(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let (int_part, frac_part) = round_half_up(value.abs(), decimals);

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + decimals + 2);
    let is_zero = int_part.chars().chain(frac_part.chars()).all(|c| c == '0');
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if decimals > 0 {
        out.push(',');
        out.push_str(&frac_part);
    }
    out
}

/// Integer with `.` thousands separator ("1.240")
pub fn format_integer_pt_br(value: i64) -> String {
    let digits = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Integer and fraction digits of a non-negative `value` rounded to
/// `decimals` places on its shortest round-trip decimal string
fn round_half_up(value: f64, decimals: usize) -> (String, String) {
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let text: String = digits.iter().map(|&d| char::from(d)).collect();
    (text[..split].to_string(), text[split..].to_string())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
