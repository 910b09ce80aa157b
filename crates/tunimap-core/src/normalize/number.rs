// crates/tunimap-core/src/normalize/number.rs
//
// Decimal parsing for source coordinates.
// Sources mix "36,8" (decimal comma) and "36.8"; only the first comma is
// rewritten. The longest leading number is read and the rest ignored, so
// "36,5 N" is 36.5, "12 Rue de Rome" is 12 and "1,234,5" is 1.234.

/// Parse the leading decimal of a trimmed value, accepting a decimal comma.
///
/// Returns `None` when the text does not start with a number or the number
/// is not finite. Spellings such as `inf` or `NaN` count as text.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let dotted = s.replacen(',', ".", 1);
    let end = numeric_prefix_len(dotted.as_bytes());
    if end == 0 {
        return None;
    }
    match dotted[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Length of the longest prefix matching
/// `[+-]?(digits(.digits?)?|.digits)([eE][+-]?digits)?`, or 0.
fn numeric_prefix_len(b: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0usize;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut end = int_end;
    let has_int = int_end > i;

    if end < b.len() && b[end] == b'.' {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            end = frac_end;
        } else if !has_int {
            return 0;
        }
    }
    if !has_int && end == int_end {
        return 0;
    }

    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut j = end + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }

    end
}
