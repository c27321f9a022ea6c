use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use crate::error::Result;
use crate::models::{EfoTrait, PrsModel, TraitDetails};

use super::{MAX_BOUND_IDS, in_placeholders};

pub(super) fn trait_details(conn: &Connection, trait_id: i64) -> Result<Option<TraitDetails>> {
    let details = conn
        .query_row(
            "SELECT id, label, description, url FROM traits WHERE id = ?1",
            params![trait_id],
            |row| {
                Ok(TraitDetails {
                    id: row.get(0)?,
                    label: row.get(1)?,
                    description: row.get(2)?,
                    ontology_url: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(details)
}

pub(super) fn trait_labels_by_category(conn: &Connection, category_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r"
        SELECT t.label
        FROM trait_to_category tc
        JOIN traits t ON t.id = tc.trait_id
        WHERE tc.category_id = ?1
        ORDER BY tc.rowid ASC
        ",
    )?;
    let rows = stmt.query_map(params![category_id], |row| row.get::<_, String>(0))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

/// Models linked to any of `trait_ids`, one entry per model, in first-link order.
/// Long id lists are queried in chunks; each model keeps its lowest link id
/// across chunks.
pub(super) fn prs_models_by_traits(conn: &Connection, trait_ids: &[i64]) -> Result<Vec<PrsModel>> {
    let mut first_links: HashMap<i64, (i64, PrsModel)> = HashMap::new();
    for chunk in trait_ids.chunks(MAX_BOUND_IDS) {
        let sql = format!(
            r"
            SELECT
              MIN(l.id),
              m.id, m.name, m.number_of_snp, m.pgsc_id, m.pgsc_url, m.publication_id
            FROM prs_model_to_trait l
            JOIN prs_models m ON m.id = l.prs_model_id
            WHERE l.trait_id IN ({})
            GROUP BY m.id
            ",
            in_placeholders(chunk.len())
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(chunk.iter()), |row| {
            let first_link = row.get::<_, i64>(0)?;
            let model = PrsModel {
                id: row.get(1)?,
                name: row.get(2)?,
                number_of_snp: row.get(3)?,
                pgsc_id: row.get(4)?,
                pgsc_url: row.get(5)?,
                publication_id: row.get(6)?,
            };
            Ok((first_link, model))
        })?;
        for row in rows {
            let (first_link, model) = row?;
            match first_links.get_mut(&model.id) {
                Some(entry) if entry.0 <= first_link => {}
                Some(entry) => entry.0 = first_link,
                None => {
                    first_links.insert(model.id, (first_link, model));
                }
            }
        }
    }

    let mut ordered = first_links.into_values().collect::<Vec<_>>();
    ordered.sort_by_key(|(first_link, _)| *first_link);
    Ok(ordered.into_iter().map(|(_, model)| model).collect())
}

pub(super) fn traits_with_efo_id(conn: &Connection) -> Result<Vec<EfoTrait>> {
    let mut stmt = conn.prepare(
        r"
        SELECT t.id, t.efo_id, tc.category_id
        FROM traits t
        LEFT JOIN trait_to_category tc ON tc.trait_id = t.id
        WHERE t.efo_id IS NOT NULL AND trim(t.efo_id) <> ''
        ORDER BY t.id ASC, tc.category_id ASC
        ",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<i64>>(2)?,
        ))
    })?;

    let mut out: Vec<EfoTrait> = Vec::new();
    let mut position: HashMap<i64, usize> = HashMap::new();
    for row in rows {
        let (id, efo_id, category_id) = row?;
        let idx = *position.entry(id).or_insert_with(|| {
            out.push(EfoTrait {
                id,
                efo_id,
                category_ids: Vec::new(),
            });
            out.len() - 1
        });
        if let Some(category_id) = category_id {
            out[idx].category_ids.push(category_id);
        }
    }
    Ok(out)
}
