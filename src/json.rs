//! ECMAScript-compatible value rendering.
//!
//! Fingerprints must match byte for byte across implementations, so the
//! two conversions collectors' values go through are reproduced exactly:
//!
//! - [`to_js_string`]: `String(value)`
//! - [`stringify`]: compact `JSON.stringify(value)`
//!
//! Both share [`js_number`] (Number::toString) and [`escape_into`]
//! (JSON string quoting).

use serde_json::{Map, Number, Value};

/// Render a finite or non-finite double the way `Number.prototype.toString()` does.
pub fn js_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        // -0 included
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let sci = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return x.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return x.to_string();
    };
    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if let Some(even) = even_tie(x.abs(), &digits, exponent) {
        digits = even;
    }

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, e_sign, e.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Shortest digits with an even last digit when `x` sits exactly halfway
/// between two shortest candidates. Number::toString takes the even one;
/// `{:e}` does not.
fn even_tie(x: f64, digits: &str, exponent: i32) -> Option<String> {
    let k = digits.len();
    // Half a unit in the 15th digit is already wider than any double's ulp
    if k < 15 {
        return None;
    }

    // A double expands to at most 767 significant decimal digits
    let exact = format!("{:.800e}", x);
    let (mantissa, exact_exponent) = exact.split_once('e')?;
    if exact_exponent.parse::<i32>().ok()? != exponent {
        return None;
    }
    let exact_digits: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();
    let (head, tail) = exact_digits.split_at(k);
    if tail.first() != Some(&b'5') || tail[1..].iter().any(|d| *d != b'0') {
        return None;
    }

    let mut candidate = head.to_vec();
    if (candidate.last()? - b'0') % 2 == 1 {
        // round the odd floor up, carrying through nines
        let mut i = candidate.len();
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            if candidate[i] == b'9' {
                candidate[i] = b'0';
            } else {
                candidate[i] += 1;
                break;
            }
        }
    }
    while candidate.len() > 1 && candidate.last() == Some(&b'0') {
        candidate.pop();
    }

    let candidate = String::from_utf8(candidate).ok()?;
    let scale = exponent - (candidate.len() as i32 - 1);
    let round_trips = format!("{}e{}", candidate, scale).parse::<f64>().ok()? == x;
    (round_trips && candidate != digits).then_some(candidate)
}

fn number_to_js(n: &Number) -> String {
    // JS holds every number as a double, large integers included
    match n.as_f64() {
        Some(x) => js_number(x),
        None => n.to_string(),
    }
}

/// Append `s` as a quoted JSON string using `JSON.stringify` escaping.
///
/// Only `"`, `\` and C0 controls are escaped; `/`, DEL and all non-ASCII
/// text are emitted raw.
pub fn escape_into(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// `String(value)` for a present value.
pub fn to_js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_js(n),
        Value::String(s) => s.clone(),
        // Array.prototype.join renders null holes as empty
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JS truthiness of a present value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |x| x != 0.0 && !x.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Compact `JSON.stringify(value)`.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&number_to_js(n)),
        Value::String(s) => escape_into(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in own_keys(map).into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                escape_into(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

/// Members in ECMAScript own-property order: array indices ascending,
/// then the remaining keys in insertion order.
fn own_keys(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut indices: Vec<(u32, (&String, &Value))> = Vec::new();
    let mut named = Vec::new();
    for entry in map.iter() {
        match array_index(entry.0) {
            Some(index) => indices.push((index, entry)),
            None => named.push(entry),
        }
    }
    indices.sort_by_key(|(index, _)| *index);
    indices.into_iter().map(|(_, entry)| entry).chain(named).collect()
}

/// Canonical array index: no sign, no leading zeros, below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_number_integers() {
        assert_eq!(js_number(1.0), "1");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(24.0), "24");
        assert_eq!(js_number(-120.0), "-120");
        assert_eq!(js_number(9007199254740992.0), "9007199254740992");
    }

    #[test]
    fn test_js_number_fractions() {
        assert_eq!(js_number(0.1), "0.1");
        assert_eq!(js_number(-1.5), "-1.5");
        assert_eq!(js_number(3.141592653589793), "3.141592653589793");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(0.000001234), "0.000001234");
    }

    #[test]
    fn test_js_number_exponent_boundaries() {
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(1e20), "100000000000000000000");
        assert_eq!(js_number(1.633123935319537e16), "16331239353195370");
        assert_eq!(js_number(1e-7), "1e-7");
        assert_eq!(js_number(-9.614302481290016e-17), "-9.614302481290016e-17");
        assert_eq!(js_number(1.7976931348623157e308), "1.7976931348623157e+308");
        assert_eq!(js_number(5e-324), "5e-324");
    }

    #[test]
    fn test_js_number_exact_ties_pick_even_digit() {
        // exact value ends in ...5 one place past the shortest digits
        assert_eq!(js_number(-8.952713012695312), "-8.952713012695312");
        assert_eq!(js_number(942.7261352539062), "942.7261352539062");
        assert_eq!(js_number(-1549568176.2695312), "-1549568176.2695312");
        assert_eq!(js_number(31740.188598632812), "31740.188598632812");
        // odd floor rounds up
        assert_eq!(js_number(-19.567489624023438), "-19.567489624023438");
        assert_eq!(js_number(2237663.2690429688), "2237663.2690429688");
        assert_eq!(js_number(-0.11265182495117188), "-0.11265182495117188");
    }

    #[test]
    fn test_numbers_parsed_from_json_text() {
        // Rendered the same as String(JSON.parse(text)) in a browser
        let cases = [
            "-10040891170.501709",
            "1930.4001331329346",
            "123456789012345680000",
            "-8.952713012695312",
            "942.7261352539062",
            "-1549568176.2695312",
            "-19.567489624023438",
            "2237663.2690429688",
            "-1.4214488238747245",
        ];
        for text in cases {
            let value: Value = serde_json::from_str(text).unwrap();
            assert_eq!(to_js_string(&value), text);
        }

        let math: Value = serde_json::from_str(
            r#"{"sin":-8.952713012695312,"log":1930.4001331329346,"big":123456789012345680000}"#,
        )
        .unwrap();
        assert_eq!(
            stringify(&math),
            r#"{"sin":-8.952713012695312,"log":1930.4001331329346,"big":123456789012345680000}"#
        );
    }

    #[test]
    fn test_js_number_non_finite() {
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(f64::INFINITY), "Infinity");
        assert_eq!(js_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_js_string_scalars() {
        assert_eq!(to_js_string(&Value::Null), "null");
        assert_eq!(to_js_string(&json!(true)), "true");
        assert_eq!(to_js_string(&json!(false)), "false");
        assert_eq!(to_js_string(&json!(1.0)), "1");
        assert_eq!(to_js_string(&json!("N/A")), "N/A");
        assert_eq!(to_js_string(&json!("")), "");
    }

    #[test]
    fn test_to_js_string_composites() {
        assert_eq!(to_js_string(&json!([32767, 32767])), "32767,32767");
        assert_eq!(to_js_string(&json!([1, null, [2, 3], "x"])), "1,,2,3,x");
        assert_eq!(to_js_string(&json!([])), "");
        assert_eq!(to_js_string(&json!({ "a": 1 })), "[object Object]");
        assert_eq!(to_js_string(&json!([{ "a": 1 }])), "[object Object]");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(-0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("N/A")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_escaping_matches_json_stringify() {
        let mut out = String::new();
        escape_into(&mut out, "a\"b\\c/d\u{7f}\u{01}\u{1f}\n\r\t\u{08}\u{0c}");
        assert_eq!(out, "\"a\\\"b\\\\c/d\u{7f}\\u0001\\u001f\\n\\r\\t\\b\\f\"");
    }

    #[test]
    fn test_escaping_keeps_cjk_raw() {
        let mut out = String::new();
        escape_into(&mut out, "canvasprint.js 个個칼");
        assert_eq!(out, "\"canvasprint.js 个個칼\"");
    }

    #[test]
    fn test_stringify_compact() {
        let value = json!({
            "type": "landscape-primary",
            "angle": 0,
            "dims": [32767.0, 1.5],
            "nested": { "ok": true, "none": null }
        });
        assert_eq!(
            stringify(&value),
            r#"{"type":"landscape-primary","angle":0,"dims":[32767,1.5],"nested":{"ok":true,"none":null}}"#
        );
    }

    #[test]
    fn test_stringify_preserves_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        assert_eq!(stringify(&value), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_stringify_integer_keys_first() {
        let value: Value = serde_json::from_str(r#"{"b":1,"10":2,"a":3,"2":4,"01":5}"#).unwrap();
        assert_eq!(stringify(&value), r#"{"2":4,"10":2,"b":1,"a":3,"01":5}"#);
    }
}
