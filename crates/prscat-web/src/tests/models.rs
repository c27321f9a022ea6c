use axum::http::StatusCode;
use serde_json::{Value, json};

use super::harness::{TestHarness, decode_json};

#[tokio::test]
async fn prs_models_by_traits_returns_distinct_models_with_message() {
    let harness = TestHarness::setup();
    let response = harness
        .post_json("/api/prs-models/by-traits", json!({"traitIds": [1, 2]}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = decode_json(response).await;
    let ids = payload["prsModels"]
        .as_array()
        .expect("prsModels array")
        .iter()
        .map(|model| model["id"].as_i64().expect("id"))
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![101, 102, 103]);
    assert_eq!(payload["prsModels"][0]["pgscId"], "PGS000001");
    assert_eq!(payload["prsModels"][0]["numberOfSNP"], 3290);
    assert_eq!(
        payload["message"],
        "found 3 PRS models linked to the selected traits"
    );
}

#[tokio::test]
async fn prs_models_by_traits_rejects_empty_and_non_numeric_ids() {
    let harness = TestHarness::setup();
    for body in [
        json!({"traitIds": []}),
        json!({}),
        json!({"traitIds": ["1", "x"]}),
    ] {
        let response = harness.post_json("/api/prs-models/by-traits", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload: Value = decode_json(response).await;
        assert_eq!(payload["code"], "VALIDATION_FAILED");
        assert_eq!(payload["operation"], "prs_models.by_traits");
    }
}

#[tokio::test]
async fn prs_models_by_ancestry_id_carries_the_requested_share() {
    let harness = TestHarness::setup();
    let response = harness
        .get("/api/prs-models/by-ancestry?broadAncestryId=4")
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = decode_json(response).await;
    assert_eq!(
        payload,
        json!([{
            "id": 104,
            "name": "PRS_BreastCancer_Multi",
            "pgscId": "PGS000004",
            "pgscURL": "https://www.pgscatalog.org/score/PGS000004/",
            "broadAncestryCategories": [
                {"percentage": 40.0, "label": "South Asian", "symbol": "SAS"}
            ]
        }])
    );
}

#[tokio::test]
async fn prs_models_by_ancestry_id_requires_a_numeric_id() {
    let harness = TestHarness::setup();
    for path in [
        "/api/prs-models/by-ancestry",
        "/api/prs-models/by-ancestry?broadAncestryId=",
        "/api/prs-models/by-ancestry?broadAncestryId=EUR",
    ] {
        let response = harness.get(path).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
    }
}

#[tokio::test]
async fn prs_models_by_ancestry_label_lists_every_development_ancestry() {
    let harness = TestHarness::setup();
    let response = harness
        .post_json(
            "/api/prs-models/by-ancestry-label",
            json!({"ancestryLabel": "European"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = decode_json(response).await;
    assert_eq!(payload["message"], "found 2 PRS models for ancestry \"European\"");
    assert_eq!(
        payload["prsModels"][1]["broadAncestryCategories"],
        json!([
            {"id": 1, "label": "European"},
            {"id": 4, "label": "South Asian"}
        ])
    );
}

#[tokio::test]
async fn prs_models_by_ancestry_label_blank_or_unknown() {
    let harness = TestHarness::setup();
    let blank = harness
        .post_json(
            "/api/prs-models/by-ancestry-label",
            json!({"ancestryLabel": "   "}),
        )
        .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let unknown = harness
        .post_json(
            "/api/prs-models/by-ancestry-label",
            json!({"ancestryLabel": "Oceanian"}),
        )
        .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    let payload: Value = decode_json(unknown).await;
    assert_eq!(payload["code"], "NOT_FOUND");
}
