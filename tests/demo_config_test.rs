//! Runs the bundled demo configuration through the explain source.

use std::path::PathBuf;

use datatypes::{ConcreteDatatype, DataType};
use select::{SelectCollectionHandling, SelectKind};
use select_flow::{AppConfig, ExplainSource, ExplainedPlan};

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/orders_by_region.yaml")
}

#[test]
fn demo_config_explains_grouped_projection() {
    let config = AppConfig::load_required(demo_path()).expect("demo config should load");
    let rendered = config
        .select
        .builder(ExplainSource::new(config.select.source.as_str()))
        .expect("demo parts should validate")
        .build()
        .expect("demo plan should render");

    let plan: ExplainedPlan = serde_json::from_str(&rendered).unwrap();
    assert_eq!(plan.source, "orders");
    assert!(plan.request.null_checking);
    assert!(
        plan.unmapped_properties.is_empty(),
        "unmapped: {:?}",
        plan.unmapped_properties
    );

    let kinds = plan
        .request
        .parts
        .iter()
        .map(|part| part.kind())
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            SelectKind::Key,
            SelectKind::Sum,
            SelectKind::Average,
            SelectKind::Count,
            SelectKind::PathToList,
        ]
    );
    assert_eq!(
        plan.request.parts[4].collection_handling(),
        Some(SelectCollectionHandling::LeaveAsIs)
    );

    let lines = plan
        .request
        .destination
        .as_ref()
        .and_then(|schema| schema.column_schema_by_name("lines"))
        .map(|column| column.data_type.clone())
        .unwrap();
    assert_eq!(lines.name(), "List<Struct<sku: String, quantity: Int64>>");
    assert!(matches!(lines, ConcreteDatatype::List(_)));
}
