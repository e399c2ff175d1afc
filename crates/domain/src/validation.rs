//! Request validation
//!
//! Checks that the fields an operation needs are present in an arbitrary decoded
//! JSON body and lifts them into a typed query. Values are not coerced; a field
//! only has to exist and be a scalar.
//!
//! Inbound field names are part of the public contract. The stop search expects
//! `location.longtitude` (sic); `location.longitude` is accepted as a fallback
//! when the misspelled key is absent.

use serde_json::Value;

use crate::errors::DomainError;
use crate::queries::{NaptanId, PredictionQuery, QueryValue, StopQuery};

const LONGITUDE_FALLBACK: &str = "location.longitude";
const API_NAME: &str = "application.apiName";

/// Validator turning caller bodies into typed queries
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    /// Required field paths of a stop search, in the order they are checked
    pub const STOP_FIELDS: [&'static str; 5] = [
        "location.latitude",
        "location.longtitude",
        "location.radius",
        "location.stopTypes",
        "location.returnLines",
    ];

    /// Required field paths of a predictions request
    pub const PREDICTION_FIELDS: [&'static str; 1] = ["stop.naptanId"];

    /// Validate a stop search body
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` for the first required field that is
    /// absent, or `DomainError::InvalidField` if a field is not a scalar.
    pub fn validate_stops(body: &Value) -> Result<StopQuery, DomainError> {
        let [latitude, longitude, radius, stop_types, return_lines] = Self::STOP_FIELDS;

        let latitude = require(body, latitude)?;
        let longitude_path =
            if lookup(body, longitude).is_none() && lookup(body, LONGITUDE_FALLBACK).is_some() {
                LONGITUDE_FALLBACK
            } else {
                longitude
            };

        Ok(StopQuery {
            latitude,
            longitude: require(body, longitude_path)?,
            radius: require(body, radius)?,
            stop_types: require(body, stop_types)?,
            return_lines: require(body, return_lines)?,
        })
    }

    /// Validate a predictions body
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if `stop.naptanId` is absent, not a scalar, or blank.
    pub fn validate_predictions(body: &Value) -> Result<PredictionQuery, DomainError> {
        let [naptan_id] = Self::PREDICTION_FIELDS;

        let naptan_id = require(body, naptan_id)?;
        Ok(PredictionQuery::new(NaptanId::new(naptan_id.as_param())?))
    }

    /// Provider explicitly requested by the caller through `application.apiName`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if the field is present but not a string.
    pub fn requested_provider(body: &Value) -> Result<Option<&str>, DomainError> {
        match lookup(body, API_NAME) {
            None => Ok(None),
            Some(Value::String(name)) => Ok(Some(name.as_str())),
            Some(_) => Err(DomainError::invalid_field(API_NAME, "must be a string")),
        }
    }
}

/// Walk a dotted path of object keys; `null` counts as absent
fn lookup<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(body, |node, key| node.get(key))
        .filter(|value| !value.is_null())
}

fn require(body: &Value, path: &str) -> Result<QueryValue, DomainError> {
    let value = lookup(body, path).ok_or_else(|| DomainError::MissingField(path.to_string()))?;
    QueryValue::from_json(value)
        .ok_or_else(|| DomainError::invalid_field(path, "must be a string, number or boolean"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stops_body() -> Value {
        json!({
            "location": {
                "latitude": "51.492628",
                "longtitude": "-0.223060",
                "radius": "200",
                "stopTypes": "NaptanPublicBusCoachTram",
                "returnLines": "False"
            }
        })
    }

    #[test]
    fn valid_stops_body_passes_values_through() {
        let query = RequestValidator::validate_stops(&stops_body()).unwrap();
        assert_eq!(query.latitude, QueryValue::from("51.492628"));
        assert_eq!(query.longitude, QueryValue::from("-0.223060"));
        assert_eq!(query.radius, QueryValue::from("200"));
        assert_eq!(query.stop_types, QueryValue::from("NaptanPublicBusCoachTram"));
        assert_eq!(query.return_lines, QueryValue::from("False"));
    }

    #[test]
    fn numeric_and_boolean_values_are_accepted() {
        let body = json!({
            "location": {
                "latitude": 51.492_628,
                "longtitude": -0.223_06,
                "radius": 200,
                "stopTypes": "NaptanPublicBusCoachTram",
                "returnLines": false
            }
        });
        let query = RequestValidator::validate_stops(&body).unwrap();
        assert_eq!(query.radius, QueryValue::from(200));
        assert_eq!(query.return_lines, QueryValue::Flag(false));
    }

    #[test]
    fn missing_location_object_is_rejected() {
        let body = json!({ "loca": stops_body()["location"].clone() });
        let err = RequestValidator::validate_stops(&body).unwrap_err();
        assert!(matches!(err, DomainError::MissingField(_)));
    }

    #[test]
    fn every_stop_field_is_required() {
        for field in ["latitude", "longtitude", "radius", "stopTypes", "returnLines"] {
            let mut body = stops_body();
            body["location"].as_object_mut().unwrap().remove(field);
            let err = RequestValidator::validate_stops(&body).unwrap_err();
            assert_eq!(err.field_path(), format!("location.{field}"));
        }
    }

    #[test]
    fn correctly_spelled_longitude_is_a_fallback() {
        let mut body = stops_body();
        let location = body["location"].as_object_mut().unwrap();
        location.remove("longtitude");
        location.insert("longitude".to_string(), json!("-0.1"));
        let query = RequestValidator::validate_stops(&body).unwrap();
        assert_eq!(query.longitude, QueryValue::from("-0.1"));
    }

    #[test]
    fn misspelled_longitude_wins_when_both_present() {
        let mut body = stops_body();
        body["location"]["longitude"] = json!("9.9");
        let query = RequestValidator::validate_stops(&body).unwrap();
        assert_eq!(query.longitude, QueryValue::from("-0.223060"));
    }

    #[test]
    fn null_counts_as_missing() {
        let mut body = stops_body();
        body["location"]["radius"] = Value::Null;
        let err = RequestValidator::validate_stops(&body).unwrap_err();
        assert_eq!(err, DomainError::MissingField("location.radius".to_string()));
    }

    #[test]
    fn nested_values_are_invalid() {
        let mut body = stops_body();
        body["location"]["radius"] = json!({ "value": 200 });
        let err = RequestValidator::validate_stops(&body).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { .. }));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(RequestValidator::validate_stops(&json!([1, 2, 3])).is_err());
        assert!(RequestValidator::validate_stops(&json!("location")).is_err());
        assert!(RequestValidator::validate_predictions(&Value::Null).is_err());
    }

    #[test]
    fn valid_predictions_body() {
        let body = json!({ "stop": { "naptanId": "490004290L" } });
        let query = RequestValidator::validate_predictions(&body).unwrap();
        assert_eq!(query.naptan_id.as_str(), "490004290L");
    }

    #[test]
    fn misnamed_predictions_body_is_rejected() {
        let body = json!({ "st": { "nanId": "490004290L" } });
        let err = RequestValidator::validate_predictions(&body).unwrap_err();
        assert_eq!(err, DomainError::MissingField("stop.naptanId".to_string()));
    }

    #[test]
    fn blank_naptan_id_is_rejected() {
        let body = json!({ "stop": { "naptanId": "  " } });
        let err = RequestValidator::validate_predictions(&body).unwrap_err();
        assert!(matches!(err, DomainError::InvalidField { .. }));
    }

    #[test]
    fn requested_provider_is_optional() {
        assert_eq!(RequestValidator::requested_provider(&stops_body()), Ok(None));

        let body = json!({ "application": { "apiName": "TflApi" } });
        assert_eq!(RequestValidator::requested_provider(&body), Ok(Some("TflApi")));

        let body = json!({ "application": { "apiName": 7 } });
        assert!(RequestValidator::requested_provider(&body).is_err());
    }

    #[test]
    fn stop_fields_drive_validation() {
        for (index, field) in RequestValidator::STOP_FIELDS.iter().enumerate() {
            let (_, key) = field.split_once('.').unwrap();
            let mut body = stops_body();
            body["location"].as_object_mut().unwrap().remove(key);

            let err = RequestValidator::validate_stops(&body).unwrap_err();
            assert_eq!(err.field_path(), *field, "field #{index}");
        }
    }

    #[test]
    fn prediction_fields_drive_validation() {
        let [field] = RequestValidator::PREDICTION_FIELDS;
        let err = RequestValidator::validate_predictions(&json!({ "stop": {} })).unwrap_err();
        assert_eq!(err.field_path(), field);
    }

    #[test]
    fn stop_fields_are_checked_in_order() {
        let err = RequestValidator::validate_stops(&json!({ "location": {} })).unwrap_err();
        assert_eq!(err.field_path(), RequestValidator::STOP_FIELDS[0]);
    }
}
