use crate::json_kind::JsonKind;
use serde_json::{Number, Value};

const ROOT: &str = "$";

/// Flattens a JSON tree into one `path: Kind(value)` line per leaf, for debug logging only.
pub fn dump(value: &Value) -> Vec<String> {
    let mut lines = Vec::new();
    dump_value(value, ROOT.to_string(), &mut lines);
    lines
}

fn dump_value(value: &Value, path: String, lines: &mut Vec<String>) {
    match value {
        Value::Object(object) if !object.is_empty() => {
            for (key, member) in object {
                dump_value(member, format!("{}.{}", path, key), lines);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                dump_value(item, format!("{}[{}]", path, index), lines);
            }
        }
        leaf => lines.push(format!("{}: {}", path, describe(leaf))),
    }
}

fn describe(value: &Value) -> String {
    let kind = JsonKind::of(value);
    match value {
        Value::Bool(value) => format!("{}({})", kind, value),
        Value::Number(number) => format!("{}({})", kind, format_number(number)),
        Value::String(text) => format!("{}({:?})", kind, text),
        _ => kind.to_string(),
    }
}

// Integral doubles are written without a fraction
fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e15 => format!("{}", float as i64),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn dumps_nested_objects_and_arrays() {
        let json = json!({
            "devices": [
                {"geo": null, "hw": {"features": ["hdmi"]}, "id": 7}
            ],
            "ok": true
        });

        assert_eq!(
            dump(&json),
            vec![
                "$.devices[0].geo: Null",
                "$.devices[0].hw.features[0]: String(\"hdmi\")",
                "$.devices[0].id: Double(7)",
                "$.ok: Bool(true)",
            ]
        );
    }

    #[rstest]
    #[case::integer(json!(42), "$: Double(42)")]
    #[case::integral_float(json!(42.0), "$: Double(42)")]
    #[case::float(json!(1.5), "$: Double(1.5)")]
    #[case::negative(json!(-3), "$: Double(-3)")]
    #[case::escaped_string(json!("say \"hi\""), "$: String(\"say \\\"hi\\\"\")")]
    #[case::empty_object(json!({}), "$: Object")]
    #[case::empty_array(json!([]), "$: Array")]
    fn dumps_a_single_leaf(#[case] json: Value, #[case] expected: &str) {
        assert_eq!(dump(&json), vec![expected.to_string()]);
    }

    #[test]
    fn keeps_empty_containers_visible() {
        let json = json!({"maintenance": [], "offline": {}});

        assert_eq!(dump(&json), vec!["$.maintenance: Array", "$.offline: Object"]);
    }
}
