//! Formato de los valores en el cable
//!
//! Helpers de serde para los campos que no se mapean 1:1 con JSON:
//! fechas `YYYY-MM-DD` (vacías cuando no hay valor), identificadores
//! que siempre viajan como string y números que el formulario puede
//! enviar como texto.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serializer};
use std::str::FromStr;

/// Formato de fecha de calendario (ISO-8601, sin hora)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parsear una fecha del cable; `""` significa "sin fecha"
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map(Some)
}

/// Fecha opcional -> string, `""` cuando no hay valor
pub fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn serialize_date<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*value))
}

/// Acepta `"YYYY-MM-DD"`, `""` o `null`
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_date(&raw)
            .map_err(|_| de::Error::custom(format!("invalid date '{}', expected YYYY-MM-DD", raw))),
        None => Ok(None),
    }
}

pub fn serialize_id<S>(id: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(id)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Acepta el id como número o como string numérico
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(raw) => raw
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid id '{}'", raw))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInteger {
    Number(i32),
    Text(String),
}

/// Entero opcional: número, string numérico, `""` o `null`
pub fn deserialize_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawInteger>::deserialize(deserializer)? {
        Some(RawInteger::Number(value)) => Ok(Some(value)),
        Some(RawInteger::Text(raw)) => parse_blank_or(&raw, |value| value.parse::<i32>().ok())
            .ok_or_else(|| de::Error::custom(format!("invalid integer '{}'", raw))),
        None => Ok(None),
    }
}

// El string va primero: un número nunca se confunde con texto
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Text(String),
    Number(Decimal),
}

/// Decimal opcional: número, string numérico, `""` o `null`
pub fn deserialize_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDecimal>::deserialize(deserializer)? {
        Some(RawDecimal::Number(value)) => Ok(Some(value)),
        Some(RawDecimal::Text(raw)) => parse_blank_or(&raw, |value| {
            Decimal::from_str(value)
                .or_else(|_| Decimal::from_scientific(value))
                .ok()
        })
        .ok_or_else(|| de::Error::custom(format!("invalid number '{}'", raw))),
        None => Ok(None),
    }
}

// `None` si el texto no es válido; `Some(None)` si está vacío
fn parse_blank_or<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Option<T>> {
    let value = raw.trim();
    if value.is_empty() {
        return Some(None);
    }
    parse(value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Sample {
        #[serde(serialize_with = "serialize_id", deserialize_with = "deserialize_id")]
        id: i64,
        #[serde(default, serialize_with = "serialize_date", deserialize_with = "deserialize_date")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_missing_date_serializes_empty() {
        let value = serde_json::to_value(Sample { id: 7, date: None }).unwrap();
        assert_eq!(value, json!({ "id": "7", "date": "" }));
    }

    #[test]
    fn test_present_date_has_no_time() {
        let date = NaiveDate::from_ymd_opt(1990, 3, 9);
        let value = serde_json::to_value(Sample { id: 1, date }).unwrap();
        assert_eq!(value["date"], "1990-03-09");
    }

    #[test]
    fn test_blank_null_and_missing_dates_are_none() {
        for body in [json!({ "id": 1, "date": "" }), json!({ "id": 1, "date": null }), json!({ "id": 1 })] {
            let sample: Sample = serde_json::from_value(body).unwrap();
            assert_eq!(sample.date, None);
        }
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = serde_json::from_value::<Sample>(json!({ "id": 1, "date": "09.03.1990" }));
        assert!(result.unwrap_err().to_string().contains("invalid date"));
    }

    #[test]
    fn test_id_accepts_string_or_number() {
        let from_text: Sample = serde_json::from_value(json!({ "id": " 42 " })).unwrap();
        let from_number: Sample = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(from_text.id, 42);
        assert_eq!(from_number.id, 42);
        assert!(serde_json::from_value::<Sample>(json!({ "id": "abc" })).is_err());
    }

    #[derive(Deserialize, Debug, Default)]
    struct Measures {
        #[serde(default, deserialize_with = "deserialize_opt_i32")]
        year: Option<i32>,
        #[serde(default, deserialize_with = "deserialize_opt_decimal")]
        power: Option<Decimal>,
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        let measures: Measures = serde_json::from_value(json!({ "year": " 2021 ", "power": "106.5" })).unwrap();
        assert_eq!(measures.year, Some(2021));
        assert_eq!(measures.power, Decimal::from_str("106.5").ok());

        let measures: Measures = serde_json::from_value(json!({ "year": 1999, "power": 90 })).unwrap();
        assert_eq!(measures.year, Some(1999));
        assert_eq!(measures.power, Some(Decimal::from(90)));
    }

    #[test]
    fn test_blank_and_null_numbers_are_none() {
        for body in [json!({ "year": "", "power": "" }), json!({ "year": null, "power": null }), json!({})] {
            let measures: Measures = serde_json::from_value(body).unwrap();
            assert_eq!(measures.year, None);
            assert_eq!(measures.power, None);
        }
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let error = serde_json::from_value::<Measures>(json!({ "year": "new" })).unwrap_err();
        assert!(error.to_string().contains("invalid integer"));
        let error = serde_json::from_value::<Measures>(json!({ "power": "fast" })).unwrap_err();
        assert!(error.to_string().contains("invalid number"));
        assert!(serde_json::from_value::<Measures>(json!({ "year": 2.5 })).is_err());
    }
}
