use crate::ast::Value;

/// Shape of a numeric literal, decided before any conversion is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Hexadecimal,
    Binary,
    Octal,
    Integer,
    Double,
}

/// Classifies `text` as a numeric literal, or `None` if it does not look like one.
pub fn classify(text: &str) -> Option<NumberKind> {
    let bytes = text.as_bytes();

    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .then_some(NumberKind::Hexadecimal);
    }

    if let Some(digits) = text.strip_prefix("0b") {
        return (!digits.is_empty() && digits.bytes().all(|b| b == b'0' || b == b'1'))
            .then_some(NumberKind::Binary);
    }

    if bytes.len() > 1 && bytes[0] == b'0' && bytes[1..].iter().all(|b| (b'0'..=b'7').contains(b)) {
        return Some(NumberKind::Octal);
    }

    classify_decimal(bytes)
}

fn classify_decimal(bytes: &[u8]) -> Option<NumberKind> {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return None;
    }

    if i == bytes.len() {
        return Some(NumberKind::Integer);
    }

    // A fraction needs digits on both sides of the point.
    if bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return None;
        }
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }

    (i == bytes.len()).then_some(NumberKind::Double)
}

/// Parses `text` as an integer or double literal. Rejects anything that does not
/// convert in full, including integers that overflow `i64`.
pub fn parse_number(text: &str) -> Option<Value> {
    let kind = classify(text)?;

    let value = match kind {
        NumberKind::Hexadecimal => Value::Integer(i64::from_str_radix(&text[2..], 16).ok()?),
        NumberKind::Binary => Value::Integer(i64::from_str_radix(&text[2..], 2).ok()?),
        NumberKind::Octal => Value::Integer(i64::from_str_radix(&text[1..], 8).ok()?),
        NumberKind::Integer => Value::Integer(text.parse::<i64>().ok()?),
        NumberKind::Double => Value::Double(text.parse::<f64>().ok()?),
    };

    Some(value)
}
