//! Bounded-precision decimal rendering.
//!
//! Rounding operates on the shortest decimal representation of the value,
//! half away from zero, so `1.2345` bounded to three decimals renders as
//! `1.235` even though the nearest double sits a hair below.

/// Render with at most `max_decimals` fractional digits, trailing zeros
/// trimmed.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::to_max_fixed;
///
/// assert_eq!(to_max_fixed(std::f64::consts::PI, 2), "3.14");
/// assert_eq!(to_max_fixed(std::f64::consts::PI, 3), "3.142");
/// assert_eq!(to_max_fixed(1.23, 3), "1.23");
/// assert_eq!(to_max_fixed(-1.1, 5), "-1.1");
/// ```
pub fn to_max_fixed(n: f64, max_decimals: usize) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    round_decimal(&n.to_string(), max_decimals)
}

/// [`to_max_fixed`] with thousands grouping in the integer part.
pub fn to_max_fixed_grouped(n: f64, max_decimals: usize) -> String {
    group_integer_part(&to_max_fixed(n, max_decimals))
}

/// Render with at most `max_digits` significant digits.
///
/// # Examples
///
/// ```
/// use kitbag_util::strings::to_max_significant;
///
/// assert_eq!(to_max_significant(std::f64::consts::PI, 2), "3.1");
/// assert_eq!(to_max_significant(-1_234_567.0, 3), "-1230000");
/// assert_eq!(to_max_significant(-1_234_567.0, 4), "-1235000");
/// assert_eq!(to_max_significant(1.23, 4), "1.23");
/// ```
pub fn to_max_significant(n: f64, max_digits: usize) -> String {
    let max_digits = max_digits.max(1);
    if !n.is_finite() {
        return n.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs().log10().floor() as i32;
    let decimals = max_digits as i32 - 1 - magnitude;
    if decimals >= 0 {
        to_max_fixed(n, decimals as usize)
    } else {
        let scale = 10f64.powi(-decimals);
        let rounded = (n / scale).round() * scale;
        if rounded.abs() < 9.2e18 {
            (rounded as i64).to_string()
        } else {
            rounded.to_string()
        }
    }
}

/// [`to_max_significant`] with thousands grouping in the integer part.
pub fn to_max_significant_grouped(n: f64, max_digits: usize) -> String {
    group_integer_part(&to_max_significant(n, max_digits))
}

// Round the decimal text to `max_frac` fractional digits, half away from
// zero, and trim trailing fractional zeros.
fn round_decimal(text: &str, max_frac: usize) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    if frac_part.len() <= max_frac {
        return assemble(sign, int_part, frac_part);
    }

    let kept = &frac_part[..max_frac];
    let round_up = frac_part.as_bytes()[max_frac] >= b'5';

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if round_up {
        let mut at = digits.len();
        loop {
            if at == 0 {
                digits.insert(0, b'1');
                break;
            }
            at -= 1;
            if digits[at] == b'9' {
                digits[at] = b'0';
            } else {
                digits[at] += 1;
                break;
            }
        }
    }

    let split = digits.len() - max_frac;
    let int_out = String::from_utf8(digits[..split].to_vec()).expect("decimal digits");
    let frac_out = String::from_utf8(digits[split..].to_vec()).expect("decimal digits");
    assemble(sign, &int_out, &frac_out)
}

fn assemble(sign: &str, int_part: &str, frac_part: &str) -> String {
    let frac_trimmed = frac_part.trim_end_matches('0');
    let int_out = if int_part.is_empty() { "0" } else { int_part };
    let mut out = String::new();
    // no negative zero
    if !(int_out.chars().all(|c| c == '0') && frac_trimmed.is_empty()) {
        out.push_str(sign);
    }
    out.push_str(int_out);
    if !frac_trimmed.is_empty() {
        out.push('.');
        out.push_str(frac_trimmed);
    }
    out
}

fn group_integer_part(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (index, ch) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
