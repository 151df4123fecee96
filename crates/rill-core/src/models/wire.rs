//! Serde adapters for the controller backend's legacy JSON encoding.
//!
//! The backend stores whatever the previous web client sent and echoes it
//! back verbatim, so stored fields arrive in several shapes: numbers,
//! numeric strings, empty strings for unset dropdowns, nulls for unset
//! pickers, RFC 3339 datetimes for dates and times, or nothing at all.
//! The decoders here accept all of them and map anything unusable to
//! `None`. The encoders write the canonical shapes: unset dropdowns as
//! `""`, unset pickers as `null`, dates as `YYYY-MM-DD`, times as
//! `HH:MM:SS`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

use super::settings::ValvePosition;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const TIME_FORMAT_SHORT: &str = "%H:%M";
const DATETIME_FORMAT_NAIVE: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Scalar shapes a stored field may come back as.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl RawScalar {
    fn into_number(self) -> Option<u32> {
        match self {
            Self::Integer(value) => u32::try_from(value).ok(),
            Self::Float(value) => {
                if value.is_finite()
                    && value >= 0.0
                    && value <= f64::from(u32::MAX)
                    && value.fract().abs() < f64::EPSILON
                {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let value = value as u32;
                    Some(value)
                } else {
                    None
                }
            }
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    text.parse().ok()
                }
            }
            Self::Bool(_) => None,
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Integer(_) | Self::Float(_) | Self::Bool(_) => None,
        }
    }
}

/// Optional numeric selection, stored as a number, a numeric string, or `""`.
pub mod opt_number {
    use super::{Deserialize, Deserializer, RawScalar, Serializer};

    pub fn serialize<S>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(number) => serializer.serialize_u32(*number),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawScalar>::deserialize(deserializer)?;
        Ok(raw.and_then(RawScalar::into_number))
    }
}

/// Optional calendar date, stored as `YYYY-MM-DD` or a legacy datetime.
pub mod opt_date {
    use super::{parse_date, Deserialize, Deserializer, NaiveDate, RawScalar, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(super::DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawScalar>::deserialize(deserializer)?;
        Ok(raw
            .and_then(RawScalar::into_text)
            .and_then(|text| parse_date(&text)))
    }
}

/// Optional time of day, stored as `HH:MM:SS` or a legacy datetime.
pub mod opt_time {
    use super::{parse_time, Deserialize, Deserializer, NaiveTime, RawScalar, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(super::TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawScalar>::deserialize(deserializer)?;
        Ok(raw
            .and_then(RawScalar::into_text)
            .and_then(|text| parse_time(&text)))
    }
}

/// Optional valve position, stored as `"1"`, `"0"`, or `""`.
pub mod valve_position {
    use super::{Deserialize, Deserializer, RawScalar, Serializer, ValvePosition};

    pub fn serialize<S>(value: &Option<ValvePosition>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(position) => serializer.serialize_str(position.as_wire()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ValvePosition>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawScalar>::deserialize(deserializer)?;
        Ok(raw.and_then(|scalar| match scalar {
            RawScalar::Text(text) => ValvePosition::from_wire(&text),
            other => other.into_number().and_then(|value| match value {
                1 => Some(ValvePosition::NormallyOpen),
                0 => Some(ValvePosition::NormallyClosed),
                _ => None,
            }),
        }))
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_NAIVE)
        .ok()
        .map(|datetime| datetime.date())
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(time) = NaiveTime::parse_from_str(raw, TIME_FORMAT) {
        return Some(time);
    }
    if let Ok(time) = NaiveTime::parse_from_str(raw, TIME_FORMAT_SHORT) {
        return Some(time);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.time());
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT_NAIVE)
        .ok()
        .map(|datetime| datetime.time())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct NumberField {
        #[serde(default, with = "opt_number")]
        value: Option<u32>,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct DateField {
        #[serde(default, with = "opt_date")]
        value: Option<NaiveDate>,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct TimeField {
        #[serde(default, with = "opt_time")]
        value: Option<NaiveTime>,
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct ValveField {
        #[serde(default, with = "valve_position")]
        value: Option<ValvePosition>,
    }

    fn number_of(payload: serde_json::Value) -> Option<u32> {
        serde_json::from_value::<NumberField>(payload).unwrap().value
    }

    #[test]
    fn numbers_decode_from_every_stored_shape() {
        assert_eq!(number_of(json!({ "value": 15 })), Some(15));
        assert_eq!(number_of(json!({ "value": 15.0 })), Some(15));
        assert_eq!(number_of(json!({ "value": "15" })), Some(15));
        assert_eq!(number_of(json!({ "value": " 15 " })), Some(15));
    }

    #[test]
    fn unusable_numbers_decode_as_unset() {
        assert_eq!(number_of(json!({ "value": "" })), None);
        assert_eq!(number_of(json!({ "value": null })), None);
        assert_eq!(number_of(json!({})), None);
        assert_eq!(number_of(json!({ "value": "soon" })), None);
        assert_eq!(number_of(json!({ "value": -5 })), None);
        assert_eq!(number_of(json!({ "value": 15.5 })), None);
        assert_eq!(number_of(json!({ "value": true })), None);
    }

    #[test]
    fn numbers_encode_as_number_or_empty_string() {
        let set = serde_json::to_value(NumberField { value: Some(40) }).unwrap();
        assert_eq!(set, json!({ "value": 40 }));

        let unset = serde_json::to_value(NumberField { value: None }).unwrap();
        assert_eq!(unset, json!({ "value": "" }));
    }

    #[test]
    fn dates_decode_from_plain_and_legacy_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);

        let plain: DateField = serde_json::from_value(json!({ "value": "2024-05-01" })).unwrap();
        assert_eq!(plain.value, expected);

        let legacy: DateField =
            serde_json::from_value(json!({ "value": "2024-05-01T14:30:00.000Z" })).unwrap();
        assert_eq!(legacy.value, expected);

        let naive: DateField =
            serde_json::from_value(json!({ "value": "2024-05-01T14:30:00" })).unwrap();
        assert_eq!(naive.value, expected);
    }

    #[test]
    fn unusable_dates_decode_as_unset() {
        for payload in [
            json!({ "value": null }),
            json!({ "value": "" }),
            json!({ "value": "yesterday" }),
            json!({ "value": 20240501 }),
            json!({}),
        ] {
            let field: DateField = serde_json::from_value(payload).unwrap();
            assert_eq!(field.value, None);
        }
    }

    #[test]
    fn dates_encode_as_plain_date_or_null() {
        let set = serde_json::to_value(DateField {
            value: NaiveDate::from_ymd_opt(2024, 5, 1),
        })
        .unwrap();
        assert_eq!(set, json!({ "value": "2024-05-01" }));

        let unset = serde_json::to_value(DateField { value: None }).unwrap();
        assert_eq!(unset, json!({ "value": null }));
    }

    #[test]
    fn times_decode_from_plain_and_legacy_forms() {
        let expected = NaiveTime::from_hms_opt(14, 30, 0);

        let plain: TimeField = serde_json::from_value(json!({ "value": "14:30:00" })).unwrap();
        assert_eq!(plain.value, expected);

        let short: TimeField = serde_json::from_value(json!({ "value": "14:30" })).unwrap();
        assert_eq!(short.value, expected);

        let legacy: TimeField =
            serde_json::from_value(json!({ "value": "2024-05-01T14:30:00.000Z" })).unwrap();
        assert_eq!(legacy.value, expected);
    }

    #[test]
    fn times_encode_as_clock_time_or_null() {
        let set = serde_json::to_value(TimeField {
            value: NaiveTime::from_hms_opt(6, 15, 0),
        })
        .unwrap();
        assert_eq!(set, json!({ "value": "06:15:00" }));

        let unset = serde_json::to_value(TimeField { value: None }).unwrap();
        assert_eq!(unset, json!({ "value": null }));
    }

    #[test]
    fn valve_positions_decode_from_stored_encodings() {
        let open: ValveField = serde_json::from_value(json!({ "value": "1" })).unwrap();
        assert_eq!(open.value, Some(ValvePosition::NormallyOpen));

        let closed: ValveField = serde_json::from_value(json!({ "value": "0" })).unwrap();
        assert_eq!(closed.value, Some(ValvePosition::NormallyClosed));

        let numeric: ValveField = serde_json::from_value(json!({ "value": 1 })).unwrap();
        assert_eq!(numeric.value, Some(ValvePosition::NormallyOpen));
    }

    #[test]
    fn unknown_valve_positions_decode_as_unset() {
        for payload in [
            json!({ "value": "" }),
            json!({ "value": null }),
            json!({ "value": "2" }),
            json!({ "value": "open" }),
            json!({}),
        ] {
            let field: ValveField = serde_json::from_value(payload).unwrap();
            assert_eq!(field.value, None);
        }
    }

    #[test]
    fn valve_positions_encode_as_wire_strings() {
        let open = serde_json::to_value(ValveField {
            value: Some(ValvePosition::NormallyOpen),
        })
        .unwrap();
        assert_eq!(open, json!({ "value": "1" }));

        let unset = serde_json::to_value(ValveField { value: None }).unwrap();
        assert_eq!(unset, json!({ "value": "" }));
    }

    #[test]
    fn parse_date_ignores_surrounding_whitespace() {
        assert_eq!(
            parse_date(" 2024-05-01 "),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }

    #[test]
    fn parse_time_keeps_the_written_clock_time() {
        // Legacy records carry a full datetime; the clock time is taken as
        // written, never shifted into another timezone.
        assert_eq!(
            parse_time("2024-05-01T23:45:10+02:00"),
            NaiveTime::from_hms_opt(23, 45, 10)
        );
    }
}
