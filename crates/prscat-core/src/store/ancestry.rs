use std::collections::{BTreeSet, HashMap};

use rusqlite::{Connection, params, params_from_iter};

use crate::error::Result;
use crate::models::{
    AncestryPopulation, AncestryRef, AncestryScopedPrsModel, AncestryShare, PrsModel,
    PrsModelWithAncestries,
};

use super::{MAX_BOUND_IDS, in_placeholders};

pub(super) fn developed_on(conn: &Connection, ancestry_ids: &[i64]) -> Result<Vec<i64>> {
    select_distinct_ids(conn, ancestry_ids, |placeholders| {
        format!(
            r"
            SELECT DISTINCT m.id
            FROM prs_models m
            JOIN prs_model_to_ancestry a ON a.prs_model_id = m.id
            WHERE a.ancestry_id IN ({placeholders})
            "
        )
    })
}

pub(super) fn evaluated_on(conn: &Connection, ancestry_ids: &[i64]) -> Result<Vec<i64>> {
    select_distinct_ids(conn, ancestry_ids, |placeholders| {
        format!(
            r"
            SELECT DISTINCT m.id
            FROM prs_models m
            JOIN model_evaluations e ON e.prs_model_id = m.id
            JOIN evaluation_samples s ON s.id = e.sample_id
            WHERE s.ancestry_id IN ({placeholders})
            "
        )
    })
}

/// Runs the id query once per chunk of `bound` and returns the distinct ids
/// in ascending order.
fn select_distinct_ids(
    conn: &Connection,
    bound: &[i64],
    sql_for: impl Fn(&str) -> String,
) -> Result<Vec<i64>> {
    let mut ids = BTreeSet::new();
    for chunk in bound.chunks(MAX_BOUND_IDS) {
        let sql = sql_for(&in_placeholders(chunk.len()));
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(chunk.iter()), |row| row.get::<_, i64>(0))?;
        for row in rows {
            ids.insert(row?);
        }
    }
    Ok(ids.into_iter().collect())
}

pub(super) fn models_by_ancestry_id(
    conn: &Connection,
    ancestry_id: i64,
) -> Result<Vec<AncestryScopedPrsModel>> {
    let mut stmt = conn.prepare(
        r"
        SELECT m.id, m.name, m.pgsc_id, m.pgsc_url, a.percentage, p.label, p.symbol
        FROM prs_models m
        JOIN prs_model_to_ancestry a ON a.prs_model_id = m.id
        JOIN ancestry_populations p ON p.id = a.ancestry_id
        WHERE a.ancestry_id = ?1
        ORDER BY m.id ASC
        ",
    )?;
    let rows = stmt.query_map(params![ancestry_id], |row| {
        Ok(AncestryScopedPrsModel {
            id: row.get(0)?,
            name: row.get(1)?,
            pgsc_id: row.get(2)?,
            pgsc_url: row.get(3)?,
            broad_ancestry_categories: vec![AncestryShare {
                percentage: row.get(4)?,
                label: row.get(5)?,
                symbol: row.get(6)?,
            }],
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Models developed on the population labelled `label`, each listing all of its
/// development ancestries.
pub(super) fn models_by_ancestry_label(
    conn: &Connection,
    label: &str,
) -> Result<Vec<PrsModelWithAncestries>> {
    let mut stmt = conn.prepare(
        r"
        SELECT
          m.id, m.name, m.number_of_snp, m.pgsc_id, m.pgsc_url, m.publication_id,
          p.id, p.label
        FROM prs_models m
        JOIN prs_model_to_ancestry a ON a.prs_model_id = m.id
        JOIN ancestry_populations p ON p.id = a.ancestry_id
        WHERE m.id IN (
            SELECT a2.prs_model_id
            FROM prs_model_to_ancestry a2
            JOIN ancestry_populations p2 ON p2.id = a2.ancestry_id
            WHERE p2.label = ?1
        )
        ORDER BY m.id ASC, p.id ASC
        ",
    )?;
    let rows = stmt.query_map(params![label], |row| {
        let model = PrsModel {
            id: row.get(0)?,
            name: row.get(1)?,
            number_of_snp: row.get(2)?,
            pgsc_id: row.get(3)?,
            pgsc_url: row.get(4)?,
            publication_id: row.get(5)?,
        };
        let ancestry = AncestryRef {
            id: row.get(6)?,
            label: row.get(7)?,
        };
        Ok((model, ancestry))
    })?;

    let mut out: Vec<PrsModelWithAncestries> = Vec::new();
    let mut position: HashMap<i64, usize> = HashMap::new();
    for row in rows {
        let (model, ancestry) = row?;
        if let Some(&idx) = position.get(&model.id) {
            out[idx].broad_ancestry_categories.push(ancestry);
            continue;
        }
        position.insert(model.id, out.len());
        out.push(PrsModelWithAncestries {
            model,
            broad_ancestry_categories: vec![ancestry],
        });
    }
    Ok(out)
}

pub(super) fn list_populations(conn: &Connection) -> Result<Vec<AncestryPopulation>> {
    let mut stmt = conn.prepare(
        r"
        SELECT id, label, symbol
        FROM ancestry_populations
        ORDER BY id ASC
        ",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(AncestryPopulation {
            id: row.get(0)?,
            label: row.get(1)?,
            symbol: row.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}
