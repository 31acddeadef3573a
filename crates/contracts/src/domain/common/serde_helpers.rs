//! Десериализация значений, которые разные хранилища отдают по-разному.
//!
//! SQLite хранит булевы значения как 0/1, PostgREST отдаёт `true`/`false`.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Принимает `true`/`false`, `0`/`1` и строки `"true"`/`"false"`/`"0"`/`"1"`.
/// `null` и отсутствие поля трактуются как `false` (вместе с `#[serde(default)]`).
pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolLike>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolLike::Bool(b)) => Ok(b),
        Some(BoolLike::Int(0)) => Ok(false),
        Some(BoolLike::Int(1)) => Ok(true),
        Some(BoolLike::Int(n)) => Err(de::Error::custom(format!("invalid boolean: {}", n))),
        Some(BoolLike::Text(s)) => match s.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(de::Error::custom(format!("invalid boolean: {}", other))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "bool_from_any")]
        flag: bool,
    }

    fn parse(json: &str) -> Result<bool, serde_json::Error> {
        serde_json::from_str::<Probe>(json).map(|p| p.flag)
    }

    #[test]
    fn test_accepts_bool_int_and_text() {
        assert!(parse(r#"{"flag": true}"#).unwrap());
        assert!(parse(r#"{"flag": 1}"#).unwrap());
        assert!(parse(r#"{"flag": "true"}"#).unwrap());
        assert!(!parse(r#"{"flag": 0}"#).unwrap());
        assert!(!parse(r#"{"flag": null}"#).unwrap());
        assert!(!parse(r#"{}"#).unwrap());
    }

    #[test]
    fn test_rejects_other_numbers() {
        assert!(parse(r#"{"flag": 2}"#).is_err());
        assert!(parse(r#"{"flag": "yes"}"#).is_err());
    }
}
