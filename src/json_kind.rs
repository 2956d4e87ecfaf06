use serde_json::Value;
use std::fmt::Display;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JsonKind {
    Null,
    Bool,
    Double,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Double,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JsonKind::Null => "Null",
            JsonKind::Bool => "Bool",
            JsonKind::Double => "Double",
            JsonKind::String => "String",
            JsonKind::Array => "Array",
            JsonKind::Object => "Object",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), "Null")]
    #[case(json!(false), "Bool")]
    #[case(json!(42), "Double")]
    #[case(json!(4.2), "Double")]
    #[case(json!("text"), "String")]
    #[case(json!([1]), "Array")]
    #[case(json!({"a": 1}), "Object")]
    fn names_every_kind(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(JsonKind::of(&value).to_string(), expected);
    }
}
