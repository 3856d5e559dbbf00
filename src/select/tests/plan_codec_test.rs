//! Tests for the JSON plan form of a projection request.

use datatypes::{ColumnSchema, ConcreteDatatype, Schema};
use select::{
    PlanCodecError, ProjectionRequest, SelectBuilder, SelectCollectionHandling, SelectError,
    SelectSource, decode_request, encode_request, encode_request_pretty,
};

struct PlanSource;

impl SelectSource for PlanSource {
    type Output = ProjectionRequest;
    type Error = SelectError;

    fn select(self, request: ProjectionRequest) -> Result<ProjectionRequest, SelectError> {
        Ok(request)
    }
}

fn grouped_request() -> ProjectionRequest {
    SelectBuilder::new(PlanSource)
        .key(None, Some("region.code"))
        .and_then(|b| b.sum("amount", Some("total")))
        .and_then(|b| b.path_to_list("lines", None, SelectCollectionHandling::Flatten))
        .unwrap()
        .destination(Schema::new(vec![
            ColumnSchema::new("code".to_string(), ConcreteDatatype::String),
            ColumnSchema::new("total".to_string(), ConcreteDatatype::Float64),
            ColumnSchema::new(
                "lines".to_string(),
                ConcreteDatatype::list(ConcreteDatatype::Int64),
            ),
        ]))
        .null_checking(true)
        .build()
        .unwrap()
}

#[test]
fn encoded_plan_decodes_to_the_same_request() {
    let request = grouped_request();
    let encoded = encode_request(&request).unwrap();
    assert_eq!(decode_request(&encoded).unwrap(), request);

    let pretty = encode_request_pretty(&request).unwrap();
    assert!(pretty.contains("\"kind\": \"path_to_list\""));
    assert!(pretty.contains("\"collection_handling\": \"flatten\""));
}

#[test]
fn plan_json_layout() {
    let json: serde_json::Value =
        serde_json::from_str(&encode_request(&grouped_request()).unwrap()).unwrap();
    assert_eq!(json["null_checking"], true);
    assert_eq!(json["parts"][0]["kind"], "key");
    assert_eq!(json["parts"][0]["path"], "Key.region.code");
    assert_eq!(json["destination"][1]["name"], "total");
}

#[test]
fn missing_optional_fields_take_defaults() {
    let request =
        decode_request(r#"{"parts":[{"kind":"count","property_name":"n"}]}"#).unwrap();
    assert!(!request.null_checking);
    assert!(request.destination.is_none());
}

#[test]
fn decode_rejects_invalid_plans() {
    let cases = [
        (r#"{"parts":[]}"#, SelectError::EmptySpecification),
        (
            r#"{"parts":[{"kind":"count","property_name":"n"},{"kind":"to_list","property_name":"n"}]}"#,
            SelectError::DuplicateName("n".to_string()),
        ),
        (
            r#"{"parts":[{"kind":"sum","property_name":"total","path":""}]}"#,
            SelectError::MissingPath("total".to_string()),
        ),
        (
            r#"{"parts":[{"kind":"key","property_name":"code","path":"region.code"}]}"#,
            SelectError::InvalidKeyPath("region.code".to_string()),
        ),
    ];

    for (raw, expected) in cases {
        match decode_request(raw) {
            Err(PlanCodecError::Invalid(err)) => assert_eq!(err, expected, "{raw}"),
            other => panic!("{raw}: expected Invalid({expected:?}), got {other:?}"),
        }
    }
}

#[test]
fn decode_reports_malformed_json() {
    assert!(matches!(
        decode_request(r#"{"parts":[{"kind":"median","property_name":"m"}]}"#),
        Err(PlanCodecError::Deserialize(_))
    ));
}
