use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::Value;

/// Assertion kinds whose expected value is numeric in the target schema.
pub const NUMERIC_ASSERTIONS: [&str; 3] = ["max_latency_ms", "min_tokens", "max_tokens"];

/// One assertion entry of the specification document.
///
/// Renders as a single-key mapping from assertion kind to its expected
/// value, e.g. `{must_contain: "Paris"}`. Numeric kinds keep a YAML number
/// as their expected value, never a quoted string.
#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    pub kind: String,
    pub expected: Value,
}

impl Assertion {
    pub fn new(kind: impl Into<String>, expected: Value) -> Self {
        Self {
            kind: kind.into(),
            expected,
        }
    }

    /// Builds an assertion from a raw canvas value, coercing it to the type
    /// the target schema expects for this kind: numeric kinds become YAML
    /// numbers, `must_call_tool` keeps a sequence, everything else becomes
    /// a string.
    pub fn coerced(kind: impl Into<String>, value: Value) -> Self {
        let kind = kind.into();
        let expected = if kind == "must_call_tool" && value.is_sequence() {
            value
        } else if NUMERIC_ASSERTIONS.contains(&kind.as_str()) {
            coerce_number(value)
        } else {
            coerce_string(value)
        };
        Self { kind, expected }
    }
}

fn coerce_number(value: Value) -> Value {
    match value {
        Value::Number(_) => value,
        Value::String(s) => {
            if let Ok(int) = s.trim().parse::<i64>() {
                Value::from(int)
            } else if let Ok(float) = s.trim().parse::<f64>() {
                Value::from(float)
            } else {
                Value::String(s)
            }
        }
        other => other,
    }
}

fn coerce_string(value: Value) -> Value {
    match value {
        Value::String(_) => value,
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(b) => Value::String(b.to_string()),
        other => other,
    }
}

impl Serialize for Assertion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.kind, &self.expected)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Assertion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AssertionVisitor;

        impl<'de> Visitor<'de> for AssertionVisitor {
            type Value = Assertion;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a single-key assertion mapping")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Assertion, A::Error>
            where
                A: MapAccess<'de>,
            {
                let (kind, expected): (String, Value) = access
                    .next_entry()?
                    .ok_or_else(|| de::Error::custom("assertion mapping is empty"))?;
                // Only the first entry is meaningful; extra keys are dropped.
                while access.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Assertion { kind, expected })
            }
        }

        deserializer.deserialize_map(AssertionVisitor)
    }
}
