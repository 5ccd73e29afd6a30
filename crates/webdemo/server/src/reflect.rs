//! Payload reflection
//!
//! Echoes a generic envelope back to the caller. The incoming `data` is
//! resolved against the closed set of [`Payload`] variants in two steps:
//! the `kind` discriminator is checked first, then the declared shape is
//! decoded. Anything that does not resolve is an
//! [`ReflectError::UnsupportedVariant`]; no partial response is produced.

use crate::error::ReflectError;
use serde_json::Value;
use webdemo_types::{GenericRequest, GenericResponse, Payload, PayloadKind};

/// Reflect a generic envelope
pub fn reflect(
    request: GenericRequest<Value>,
) -> Result<GenericResponse<Payload>, ReflectError> {
    let GenericRequest { name, data } = request;
    let payload = resolve(data)?;

    let response = match payload {
        Payload::Simple(simple) => {
            tracing::debug!(name = %name, value = %simple.value, "Reflecting simple payload");
            GenericResponse::new(name, Payload::Simple(simple))
        }
        Payload::Complex(complex) => {
            tracing::debug!(
                name = %name,
                items = complex.items.len(),
                labels = complex.labels.len(),
                "Reflecting complex payload"
            );
            GenericResponse::new(name, Payload::Complex(complex))
        }
    };

    Ok(response)
}

/// Resolve raw payload JSON into one of the declared variants
pub fn resolve(data: Value) -> Result<Payload, ReflectError> {
    let kind = match data.get("kind") {
        Some(Value::String(kind)) => kind
            .parse::<PayloadKind>()
            .map_err(|e| ReflectError::UnsupportedVariant(e.to_string()))?,
        Some(other) => {
            return Err(ReflectError::UnsupportedVariant(format!(
                "payload kind must be a string, got {other}"
            )))
        }
        None => {
            return Err(ReflectError::UnsupportedVariant(
                "payload has no kind discriminator".to_string(),
            ))
        }
    };

    serde_json::from_value(data).map_err(|e| {
        ReflectError::UnsupportedVariant(format!(
            "payload does not match the {kind} shape: {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use webdemo_types::ComplexDataPayload;

    fn envelope(name: &str, data: Value) -> GenericRequest<Value> {
        GenericRequest {
            name: name.to_string(),
            data,
        }
    }

    #[test]
    fn test_simple_scenario() {
        let input = json!({ "name": "n1", "data": { "kind": "simple", "value": "x" } });
        let request: GenericRequest<Value> = serde_json::from_value(input.clone()).unwrap();

        let response = reflect(request).unwrap();

        assert_eq!(response.name, "n1");
        assert_eq!(response.data, Payload::simple("x"));
        assert_eq!(serde_json::to_value(&response).unwrap(), input);
    }

    #[test]
    fn test_complex_scenario() {
        let input = json!({ "name": "n2", "data": { "kind": "complex", "items": [1, 2, 3] } });
        let request: GenericRequest<Value> = serde_json::from_value(input.clone()).unwrap();

        let response = reflect(request).unwrap();

        assert_eq!(response.data.kind(), PayloadKind::Complex);
        assert_eq!(serde_json::to_value(&response).unwrap(), input);
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let result = reflect(envelope("n3", json!({ "kind": "exotic", "value": "x" })));

        match result {
            Err(ReflectError::UnsupportedVariant(reason)) => assert!(reason.contains("exotic")),
            Ok(response) => panic!("expected failure, got {:?}", response),
        }
    }

    #[test]
    fn test_missing_kind_is_unsupported() {
        let result = reflect(envelope("n4", json!({ "value": "x" })));
        assert!(matches!(result, Err(ReflectError::UnsupportedVariant(_))));
    }

    #[test]
    fn test_non_string_kind_is_unsupported() {
        let result = reflect(envelope("n5", json!({ "kind": 7, "value": "x" })));
        assert!(matches!(result, Err(ReflectError::UnsupportedVariant(_))));
    }

    #[test]
    fn test_declared_kind_with_wrong_shape_is_unsupported() {
        let result = resolve(json!({ "kind": "complex", "value": "x" }));

        let Err(ReflectError::UnsupportedVariant(reason)) = result else {
            panic!("expected unsupported variant");
        };
        assert!(reason.contains("complex"));
    }

    #[test]
    fn test_non_object_payload_is_unsupported() {
        assert!(resolve(json!("simple")).is_err());
        assert!(resolve(json!([1, 2, 3])).is_err());
        assert!(resolve(Value::Null).is_err());
    }

    fn arb_complex() -> impl Strategy<Value = ComplexDataPayload> {
        (
            prop::collection::vec(any::<i64>(), 0..16),
            prop::collection::btree_map("[a-z]{1,8}", ".{0,12}", 0..4),
        )
            .prop_map(|(items, labels)| ComplexDataPayload { items, labels })
    }

    proptest! {
        /// Simple payloads come back value-equal under the same name.
        #[test]
        fn simple_payloads_echo(name in ".{0,24}", value in ".{0,64}") {
            let payload = Payload::simple(value);
            let data = serde_json::to_value(&payload).unwrap();

            let response = reflect(envelope(&name, data)).unwrap();

            prop_assert_eq!(response.name, name);
            prop_assert_eq!(response.data, payload);
        }

        /// Complex payloads come back value-equal under the same name.
        #[test]
        fn complex_payloads_echo(name in ".{0,24}", complex in arb_complex()) {
            let payload = Payload::Complex(complex);
            let data = serde_json::to_value(&payload).unwrap();

            let response = reflect(envelope(&name, data)).unwrap();

            prop_assert_eq!(response.name, name);
            prop_assert_eq!(response.data, payload);
        }

        /// Any kind outside the closed set fails.
        #[test]
        fn undeclared_kinds_fail(kind in "[a-z]{1,12}") {
            prop_assume!(kind.parse::<PayloadKind>().is_err());

            let result = reflect(envelope("n", json!({ "kind": kind, "value": "x", "items": [] })));

            prop_assert!(matches!(result, Err(ReflectError::UnsupportedVariant(_))));
        }
    }
}
