use rustc_serialize::json::{Json, Object};

use crate::common::{ParseCommandError, ParseCommandResult, PlanetId};

type Result<T> = ParseCommandResult<T>;

pub fn parse_json(string: &str) -> Result<Json> {
    Json::from_str(string)
        .map_err(ParseCommandError::ParserError)
}

pub fn parse_json_as_object(json: &Json) -> Result<&Object> {
    json.as_object()
        .ok_or_else(|| incompatible_type_error(""))
}

pub fn parse_string_from_json_object<'a>(object: &'a Object, property: &str) -> Result<&'a str> {
    parse_value_from_json_object(object, property)?
        .as_string()
        .ok_or_else(|| incompatible_type_error(property))
}

pub fn parse_planet_id_from_json_object(object: &Object, property: &str) -> Result<PlanetId> {
    parse_u64_from_json_object(object, property)
        .map(|planet_id| planet_id as PlanetId)
}

pub fn parse_u64_from_json_object(object: &Object, property: &str) -> Result<u64> {
    parse_value_from_json_object(object, property)?
        .as_u64()
        .ok_or_else(|| incompatible_type_error(property))
}

pub fn parse_bool_from_json_object(object: &Object, property: &str) -> Result<bool> {
    parse_value_from_json_object(object, property)?
        .as_boolean()
        .ok_or_else(|| incompatible_type_error(property))
}

/// A missing property is `Ok(None)`; a present property of the wrong type is
/// still an error.
pub fn parse_optional_f64_from_json_object(object: &Object, property: &str) -> Result<Option<f64>> {
    match object.get(property) {
        None => Ok(None),
        Some(value) => value.as_f64()
            .map(Some)
            .ok_or_else(|| incompatible_type_error(property))
    }
}

pub fn parse_optional_u64_from_json_object(object: &Object, property: &str) -> Result<Option<u64>> {
    match object.get(property) {
        None => Ok(None),
        Some(value) => value.as_u64()
            .map(Some)
            .ok_or_else(|| incompatible_type_error(property))
    }
}

pub fn parse_optional_string_from_json_object<'a>(object: &'a Object, property: &str) -> Result<Option<&'a str>> {
    match object.get(property) {
        None => Ok(None),
        Some(value) => value.as_string()
            .map(Some)
            .ok_or_else(|| incompatible_type_error(property))
    }
}

pub fn parse_optional_object_from_json_object<'a>(object: &'a Object, property: &str) -> Result<Option<&'a Object>> {
    match object.get(property) {
        None => Ok(None),
        Some(value) => value.as_object()
            .map(Some)
            .ok_or_else(|| incompatible_type_error(property))
    }
}

fn parse_value_from_json_object<'a>(object: &'a Object, property: &str) -> Result<&'a Json> {
    object.get(property)
        .ok_or_else(|| missed_property_error(property))
}

fn missed_property_error(property: &str) -> ParseCommandError {
    ParseCommandError::MissedProperty(property.to_string())
}

fn incompatible_type_error(property: &str) -> ParseCommandError {
    ParseCommandError::IncompatibleType(property.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_typed_properties() {
        let json = parse_json(r#"{"id": 3, "rate": 0.5, "name": "x", "on": true}"#).unwrap();
        let object = parse_json_as_object(&json).unwrap();

        assert_eq!(parse_planet_id_from_json_object(object, "id").unwrap(), 3);
        assert_eq!(parse_optional_f64_from_json_object(object, "rate").unwrap(), Some(0.5));
        assert_eq!(parse_string_from_json_object(object, "name").unwrap(), "x");
        assert!(parse_bool_from_json_object(object, "on").unwrap());
    }

    #[test]
    fn missing_and_mistyped_properties_are_reported() {
        let json = parse_json(r#"{"id": "three"}"#).unwrap();
        let object = parse_json_as_object(&json).unwrap();

        match parse_u64_from_json_object(object, "id") {
            Err(ParseCommandError::IncompatibleType(property)) => assert_eq!(property, "id"),
            other => panic!("unexpected {:?}", other)
        }

        match parse_u64_from_json_object(object, "other") {
            Err(ParseCommandError::MissedProperty(property)) => assert_eq!(property, "other"),
            other => panic!("unexpected {:?}", other)
        }

        assert_eq!(parse_optional_f64_from_json_object(object, "other").unwrap(), None);
        assert!(parse_optional_u64_from_json_object(object, "id").is_err());
    }

    #[test]
    fn integer_json_reads_as_f64() {
        let json = parse_json(r#"{"speed": 3}"#).unwrap();
        let object = parse_json_as_object(&json).unwrap();

        assert_eq!(parse_optional_f64_from_json_object(object, "speed").unwrap(), Some(3.0));
    }
}
