// label.rs - Number text for history entries
//
// Entries read the same as the browser would print them: values in
// JS `Number` form, coordinates with one decimal rounded half away
// from zero on the exact binary value.

/// One decimal, ties away from zero. Magnitudes from 1e21 up fall back to
/// `number`.
pub fn fixed1(v: f64) -> String {
    if !v.is_finite() || v.abs() >= 1e21 {
        return number(v);
    }

    // 40 places is past the last digit that can tell a double from a tie
    let exact = format!("{:.40}", v.abs());
    let (int, frac) = exact.split_once('.').unwrap_or((exact.as_str(), "0"));
    let mut frac = frac.bytes();
    let tenth = frac.next().unwrap_or(b'0');
    let round_up = frac.next().unwrap_or(b'0') >= b'5';

    let mut digits: Vec<u8> = int.bytes().chain(std::iter::once(tenth)).collect();
    if round_up {
        carry(&mut digits);
    }

    let split = digits.len() - 1;
    let sign = if v < 0.0 { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(&digits[..split]),
        digits[split] as char
    )
}

// Add one to a run of ASCII digits.
fn carry(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// JS `Number` to string: shortest round-trip digits, `-0` as `0`,
/// exponent form outside `[1e-6, 1e21)`.
pub fn number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v == 0.0 {
        return "0".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }

    // `{:e}` gives the shortest round-trip mantissa, e.g. "1.5e-7"
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let tail = if k > 1 { format!(".{}", &digits[1..]) } else { String::new() };
        format!("{}{}e{}{}", &digits[..1], tail, sign, e.abs())
    };

    if v < 0.0 { format!("-{body}") } else { body }
}
