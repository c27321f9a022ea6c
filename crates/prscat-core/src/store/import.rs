use std::path::Path;

use rusqlite::params;

use crate::error::Result;
use crate::models::{CatalogSnapshot, ImportReport};

use super::SqliteCatalogStore;

impl SqliteCatalogStore {
    pub fn import_snapshot_file(&self, path: impl AsRef<Path>) -> Result<ImportReport> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;
        self.import_snapshot(&snapshot)
    }

    /// Replaces the catalog contents with `snapshot` in one transaction.
    pub fn import_snapshot(&self, snapshot: &CatalogSnapshot) -> Result<ImportReport> {
        self.with_tx(|tx| {
            tx.execute_batch(
                r"
                DELETE FROM trait_to_category;
                DELETE FROM trait_categories;
                DELETE FROM prs_model_to_trait;
                DELETE FROM traits;
                DELETE FROM model_evaluations;
                DELETE FROM prs_model_to_ancestry;
                DELETE FROM prs_models;
                DELETE FROM evaluation_samples;
                DELETE FROM ancestry_populations;
                ",
            )?;

            let mut report = ImportReport::default();
            for population in &snapshot.ancestry_populations {
                tx.execute(
                    "INSERT INTO ancestry_populations(id, label, symbol) VALUES (?1, ?2, ?3)",
                    params![population.id, population.label, population.symbol],
                )?;
                report.ancestry_populations += 1;
            }

            for sample in &snapshot.evaluation_samples {
                tx.execute(
                    "INSERT INTO evaluation_samples(id, ancestry_id) VALUES (?1, ?2)",
                    params![sample.id, sample.ancestry_id],
                )?;
                report.evaluation_samples += 1;
            }

            for model in &snapshot.prs_models {
                tx.execute(
                    r"
                    INSERT INTO prs_models(
                        id, name, number_of_snp, pgsc_id, pgsc_url, publication_id
                    )
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    ",
                    params![
                        model.id,
                        model.name,
                        model.number_of_snp,
                        model.pgsc_id,
                        model.pgsc_url,
                        model.publication_id,
                    ],
                )?;
                for share in &model.developed_on {
                    tx.execute(
                        r"
                        INSERT INTO prs_model_to_ancestry(prs_model_id, ancestry_id, percentage)
                        VALUES (?1, ?2, ?3)
                        ",
                        params![model.id, share.ancestry_id, share.percentage],
                    )?;
                }
                for sample_id in &model.evaluation_sample_ids {
                    tx.execute(
                        "INSERT INTO model_evaluations(prs_model_id, sample_id) VALUES (?1, ?2)",
                        params![model.id, sample_id],
                    )?;
                }
                report.prs_models += 1;
            }

            for item in &snapshot.traits {
                tx.execute(
                    r"
                    INSERT INTO traits(
                        id, label, description, url, efo_id, mondo_id, hpo_id, orpha_id
                    )
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                    ",
                    params![
                        item.id,
                        item.label,
                        item.description,
                        item.url,
                        item.ontology.efo_id,
                        item.ontology.mondo_id,
                        item.ontology.hpo_id,
                        item.ontology.orpha_id,
                    ],
                )?;
                for prs_model_id in &item.prs_model_ids {
                    tx.execute(
                        "INSERT INTO prs_model_to_trait(trait_id, prs_model_id) VALUES (?1, ?2)",
                        params![item.id, prs_model_id],
                    )?;
                    report.trait_links += 1;
                }
                report.traits += 1;
            }

            for category in &snapshot.categories {
                tx.execute(
                    "INSERT INTO trait_categories(id, label) VALUES (?1, ?2)",
                    params![category.id, category.label],
                )?;
                for trait_id in &category.trait_ids {
                    tx.execute(
                        r"
                        INSERT OR IGNORE INTO trait_to_category(category_id, trait_id)
                        VALUES (?1, ?2)
                        ",
                        params![category.id, trait_id],
                    )?;
                }
                report.categories += 1;
            }

            Ok(report)
        })
    }
}
