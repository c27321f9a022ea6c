use tempfile::tempdir;

use crate::models::{
    AncestryPopulation, CatalogSnapshot, OntologyRefs, SnapshotAncestryShare, SnapshotCategory,
    SnapshotEvaluationSample, SnapshotPrsModel, SnapshotTrait,
};

use super::*;

fn model(id: i64, developed_on: &[i64], evaluation_sample_ids: &[i64]) -> SnapshotPrsModel {
    SnapshotPrsModel {
        id,
        name: format!("PRS{id}"),
        number_of_snp: Some(id * 10),
        pgsc_id: Some(format!("PGS{id:06}")),
        pgsc_url: Some(format!("https://www.pgscatalog.org/score/PGS{id:06}/")),
        publication_id: Some(1),
        developed_on: developed_on
            .iter()
            .map(|ancestry_id| SnapshotAncestryShare {
                ancestry_id: *ancestry_id,
                percentage: Some(100.0 / developed_on.len() as f64),
            })
            .collect(),
        evaluation_sample_ids: evaluation_sample_ids.to_vec(),
    }
}

fn snapshot_trait(id: i64, label: &str, prs_model_ids: &[i64]) -> SnapshotTrait {
    SnapshotTrait {
        id,
        label: label.to_string(),
        description: Some(format!("{label} description")),
        url: Some(format!("http://www.ebi.ac.uk/efo/EFO_{id:07}")),
        ontology: OntologyRefs::default(),
        prs_model_ids: prs_model_ids.to_vec(),
    }
}

fn population(id: i64, label: &str, symbol: &str) -> AncestryPopulation {
    AncestryPopulation {
        id,
        label: label.to_string(),
        symbol: Some(symbol.to_string()),
    }
}

/// Category 1 "Body measurement" holds Weight (2) then Height (1); category 3
/// "Cancer" holds Breast carcinoma (5). Model 101 is developed on European (1),
/// model 103 is evaluated on a sample of African (2), model 102 on neither.
fn body_measurement_snapshot() -> CatalogSnapshot {
    let mut height = snapshot_trait(1, "Height", &[101, 102, 102]);
    height.ontology.efo_id = Some("EFO_0004339".to_string());
    let mut weight = snapshot_trait(2, "Weight", &[101, 103]);
    weight.ontology.efo_id = Some(String::new());
    weight.ontology.mondo_id = Some("MONDO_0000001".to_string());
    let mut breast = snapshot_trait(5, "Breast carcinoma", &[104]);
    breast.ontology.efo_id = Some("EFO_0000305".to_string());

    CatalogSnapshot {
        ancestry_populations: vec![
            population(1, "European", "EUR"),
            population(2, "African", "AFR"),
            population(3, "East Asian", "EAS"),
        ],
        evaluation_samples: vec![
            SnapshotEvaluationSample {
                id: 11,
                ancestry_id: Some(2),
            },
            SnapshotEvaluationSample {
                id: 12,
                ancestry_id: None,
            },
        ],
        prs_models: vec![
            model(101, &[1], &[]),
            model(102, &[], &[12]),
            model(103, &[], &[11]),
            model(104, &[1, 3], &[11]),
        ],
        traits: vec![height, weight, breast],
        categories: vec![
            SnapshotCategory {
                id: 3,
                label: "Cancer".to_string(),
                trait_ids: vec![5],
            },
            SnapshotCategory {
                id: 1,
                label: "Body measurement".to_string(),
                trait_ids: vec![2, 1, 2],
            },
        ],
    }
}

fn seeded_store() -> SqliteCatalogStore {
    let store = SqliteCatalogStore::open_in_memory().expect("open");
    store
        .import_snapshot(&body_measurement_snapshot())
        .expect("import");
    store
}

#[test]
fn import_reports_row_counts() {
    let store = SqliteCatalogStore::open_in_memory().expect("open");
    let report = store
        .import_snapshot(&body_measurement_snapshot())
        .expect("import");
    assert_eq!(report.ancestry_populations, 3);
    assert_eq!(report.evaluation_samples, 2);
    assert_eq!(report.prs_models, 4);
    assert_eq!(report.traits, 3);
    assert_eq!(report.categories, 2);
    assert_eq!(report.trait_links, 6);
}

#[test]
fn import_replaces_previous_contents() {
    let store = seeded_store();
    let mut smaller = body_measurement_snapshot();
    smaller.categories.retain(|category| category.id == 3);
    store.import_snapshot(&smaller).expect("reimport");

    let categories = store.fetch_categories_with_traits().expect("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].label, "Cancer");
}

#[test]
fn failed_import_leaves_previous_contents_in_place() {
    let store = seeded_store();
    let mut broken = body_measurement_snapshot();
    broken.categories[0].trait_ids.push(999);
    let err = store.import_snapshot(&broken).expect_err("unknown trait");
    assert_eq!(err.code(), "SQLITE_ERROR");

    let categories = store.fetch_categories_with_traits().expect("categories");
    assert_eq!(categories.len(), 2);
}

#[test]
fn categories_are_ordered_by_id_with_traits_in_membership_order() {
    let store = seeded_store();
    let categories = store.fetch_categories_with_traits().expect("categories");
    let ids = categories.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 3]);

    let labels = categories[0]
        .traits
        .iter()
        .map(|item| item.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Weight", "Height"]);
}

#[test]
fn trait_links_keep_record_order_and_duplicates() {
    let store = seeded_store();
    let category = store
        .fetch_category_with_traits(1)
        .expect("fetch")
        .expect("category");
    let height = category
        .traits
        .iter()
        .find(|item| item.id == 1)
        .expect("height");
    let model_ids = height
        .prs_links
        .iter()
        .map(|link| link.prs_model_id)
        .collect::<Vec<_>>();
    assert_eq!(model_ids, vec![101, 102, 102]);
    assert_eq!(height.ontology.efo_id.as_deref(), Some("EFO_0004339"));
}

#[test]
fn missing_category_is_none() {
    let store = seeded_store();
    assert!(store.fetch_category_with_traits(42).expect("fetch").is_none());
}

#[test]
fn developed_and_evaluated_queries_are_distinct_per_relation() {
    let store = seeded_store();
    assert_eq!(
        store.prs_model_ids_developed_on(&[1]).expect("developed"),
        vec![101, 104]
    );
    assert_eq!(
        store.prs_model_ids_developed_on(&[1, 3]).expect("developed"),
        vec![101, 104]
    );
    assert_eq!(
        store.prs_model_ids_evaluated_on(&[2]).expect("evaluated"),
        vec![103, 104]
    );
    assert!(store.prs_model_ids_evaluated_on(&[]).expect("empty").is_empty());
    assert!(store.prs_model_ids_developed_on(&[9]).expect("unknown").is_empty());
}

#[test]
fn ancestry_queries_accept_more_ids_than_sqlite_binds_at_once() {
    let store = seeded_store();
    let mut ancestry_ids = (1_000..41_000).collect::<Vec<i64>>();
    ancestry_ids.push(1);
    ancestry_ids.insert(0, 3);
    assert_eq!(
        store.prs_model_ids_developed_on(&ancestry_ids).expect("developed"),
        vec![101, 104]
    );
    ancestry_ids.push(2);
    assert_eq!(
        store.prs_model_ids_evaluated_on(&ancestry_ids).expect("evaluated"),
        vec![103, 104]
    );
}

#[test]
fn models_by_traits_keep_first_link_order_across_chunks() {
    let store = seeded_store();
    let mut trait_ids = vec![2];
    trait_ids.extend(1_000..(1_000 + MAX_BOUND_IDS as i64 * 3));
    trait_ids.push(1);
    let ids = store
        .prs_models_by_traits(&trait_ids)
        .expect("models")
        .iter()
        .map(|m| m.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[test]
fn trait_details_and_labels() {
    let store = seeded_store();
    let details = store.fetch_trait_details(1).expect("details").expect("found");
    assert_eq!(details.label, "Height");
    assert_eq!(
        details.ontology_url.as_deref(),
        Some("http://www.ebi.ac.uk/efo/EFO_0000001")
    );
    assert!(store.fetch_trait_details(77).expect("details").is_none());

    assert_eq!(
        store.trait_labels_by_category(1).expect("labels"),
        vec!["Weight".to_string(), "Height".to_string()]
    );
    assert!(store.trait_labels_by_category(42).expect("labels").is_empty());
}

#[test]
fn models_by_traits_are_distinct_in_first_link_order() {
    let store = seeded_store();
    let models = store.prs_models_by_traits(&[2, 1]).expect("models");
    let ids = models.iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![101, 102, 103]);
    assert_eq!(models[0].pgsc_id.as_deref(), Some("PGS000101"));
    assert!(store.prs_models_by_traits(&[]).expect("empty").is_empty());
}

#[test]
fn models_by_ancestry_id_carry_only_the_requested_share() {
    let store = seeded_store();
    let models = store.prs_models_by_ancestry_id(1).expect("models");
    let ids = models.iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![101, 104]);
    let share = &models[1].broad_ancestry_categories;
    assert_eq!(share.len(), 1);
    assert_eq!(share[0].label, "European");
    assert_eq!(share[0].symbol.as_deref(), Some("EUR"));
    assert_eq!(share[0].percentage, Some(50.0));
}

#[test]
fn models_by_ancestry_label_list_every_development_ancestry() {
    let store = seeded_store();
    let models = store
        .prs_models_by_ancestry_label("East Asian")
        .expect("models");
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].model.id, 104);
    let labels = models[0]
        .broad_ancestry_categories
        .iter()
        .map(|a| a.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["European", "East Asian"]);
    assert!(store.prs_models_by_ancestry_label("Martian").expect("none").is_empty());
}

#[test]
fn efo_traits_skip_blank_ids_and_group_categories() {
    let store = seeded_store();
    let traits = store.traits_with_efo_id().expect("traits");
    let rows = traits
        .iter()
        .map(|t| (t.id, t.efo_id.as_str(), t.category_ids.clone()))
        .collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![(1, "EFO_0004339", vec![1]), (5, "EFO_0000305", vec![3])]
    );
}

#[test]
fn populations_are_listed_by_id() {
    let store = seeded_store();
    let labels = store
        .list_ancestry_populations()
        .expect("populations")
        .into_iter()
        .map(|p| p.label)
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["European", "African", "East Asian"]);
}

#[test]
fn open_creates_parent_dirs_and_persists() {
    let temp = tempdir().expect("tempdir");
    let db_path = temp.path().join("nested").join("catalog.sqlite3");
    {
        let store = SqliteCatalogStore::open(&db_path).expect("open");
        store
            .import_snapshot(&body_measurement_snapshot())
            .expect("import");
    }
    let reopened = SqliteCatalogStore::open(&db_path).expect("reopen");
    assert_eq!(
        reopened.fetch_categories_with_traits().expect("categories").len(),
        2
    );
}

#[test]
fn import_snapshot_file_rejects_unknown_fields() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("snapshot.json");
    std::fs::write(&path, r#"{"categories": [], "publications": []}"#).expect("write");
    let store = SqliteCatalogStore::open_in_memory().expect("open");
    let err = store.import_snapshot_file(&path).expect_err("unknown field");
    assert_eq!(err.code(), "JSON_ERROR");
}

#[cfg(unix)]
#[test]
fn open_hardens_catalog_db_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().expect("tempdir");
    let db_path = temp.path().join("catalog.sqlite3");
    let _store = SqliteCatalogStore::open(&db_path).expect("open");

    let mode = std::fs::metadata(&db_path)
        .expect("metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}
