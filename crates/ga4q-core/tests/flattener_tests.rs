use ga4q_core::report::{flatten_rows, ReportResponse};
use serde_json::json;

const TWO_ROWS: &str = r#"{
  "dimensionHeaders": [{"name": "date"}],
  "metricHeaders": [{"name": "totalUsers"}],
  "rows": [
    {"dimensionValues": [{"value": "20240101"}], "metricValues": [{"value": "12"}]},
    {"dimensionValues": [{"value": "20240102"}], "metricValues": []}
  ],
  "rowCount": 2,
  "kind": "analyticsData#runReport"
}"#;

#[test]
fn test_second_row_missing_metric_maps_to_null() {
    // GIVEN a response whose second row omits its metric value
    let response = ReportResponse::from_json(TWO_ROWS).expect("Should parse");

    // WHEN flattening
    let rows = flatten_rows(&response);

    // THEN both rows keep both keys and the missing one is null
    assert_eq!(rows.len(), 2);
    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            {"date": "20240101", "totalUsers": "12"},
            {"date": "20240102", "totalUsers": null}
        ])
    );
}

#[test]
fn test_row_order_and_duplicates_are_kept() {
    let response = ReportResponse::from_value(json!({
        "dimensionHeaders": [{"name": "country"}],
        "rows": [
            {"dimensionValues": [{"value": "NO"}]},
            {"dimensionValues": [{"value": "FR"}]},
            {"dimensionValues": [{"value": "NO"}]}
        ]
    }))
    .unwrap();

    let countries: Vec<_> = flatten_rows(&response)
        .iter()
        .map(|row| row.get("country").flatten().unwrap_or_default().to_string())
        .collect();

    assert_eq!(countries, vec!["NO", "FR", "NO"]);
}

#[test]
fn test_serialised_keys_follow_header_order() {
    let response = ReportResponse::from_value(json!({
        "dimensionHeaders": [{"name": "zeta"}, {"name": "alpha"}],
        "metricHeaders": [{"name": "middle"}],
        "rows": [{
            "dimensionValues": [{"value": "z"}, {"value": "a"}],
            "metricValues": [{"value": "m"}]
        }]
    }))
    .unwrap();

    let rows = flatten_rows(&response);
    let text = serde_json::to_string(&rows[0]).unwrap();

    assert_eq!(text, r#"{"zeta":"z","alpha":"a","middle":"m"}"#);
}

#[test]
fn test_empty_response_has_no_rows() {
    let response = ReportResponse::from_json("{}").unwrap();
    assert!(flatten_rows(&response).is_empty());
    assert_eq!(response.row_count, None);
}
