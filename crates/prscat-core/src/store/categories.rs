use std::collections::HashMap;

use rusqlite::{Connection, params};

use crate::error::Result;
use crate::models::{CategoryWithTraits, OntologyRefs, PrsModelLink, TraitWithLinks};

/// Loads categories with nested traits and links. `only` restricts the load to
/// one category id. Traits keep their membership insertion order; links keep
/// their record order.
pub(super) fn load_categories(
    conn: &Connection,
    only: Option<i64>,
) -> Result<Vec<CategoryWithTraits>> {
    let mut stmt = conn.prepare(
        r"
        SELECT id, label
        FROM trait_categories
        WHERE ?1 IS NULL OR id = ?1
        ORDER BY id ASC
        ",
    )?;
    let rows = stmt.query_map(params![only], |row| {
        Ok(CategoryWithTraits {
            id: row.get(0)?,
            label: row.get(1)?,
            traits: Vec::new(),
        })
    })?;
    let mut categories = Vec::new();
    for row in rows {
        categories.push(row?);
    }
    if categories.is_empty() {
        return Ok(categories);
    }

    let links = load_links(conn, only)?;
    let mut members = load_members(conn, only)?;
    for category in &mut categories {
        let Some(traits) = members.remove(&category.id) else {
            continue;
        };
        category.traits = traits
            .into_iter()
            .map(|mut item| {
                item.prs_links = links.get(&item.id).cloned().unwrap_or_default();
                item
            })
            .collect();
    }
    Ok(categories)
}

fn load_members(
    conn: &Connection,
    only: Option<i64>,
) -> Result<HashMap<i64, Vec<TraitWithLinks>>> {
    let mut stmt = conn.prepare(
        r"
        SELECT
          tc.category_id,
          t.id,
          t.label,
          t.description,
          t.url,
          t.efo_id,
          t.mondo_id,
          t.hpo_id,
          t.orpha_id
        FROM trait_to_category tc
        JOIN traits t ON t.id = tc.trait_id
        WHERE ?1 IS NULL OR tc.category_id = ?1
        ORDER BY tc.category_id ASC, tc.rowid ASC
        ",
    )?;
    let rows = stmt.query_map(params![only], |row| {
        let category_id = row.get::<_, i64>(0)?;
        let item = TraitWithLinks {
            id: row.get(1)?,
            label: row.get(2)?,
            description: row.get(3)?,
            url: row.get(4)?,
            ontology: OntologyRefs {
                efo_id: row.get(5)?,
                mondo_id: row.get(6)?,
                hpo_id: row.get(7)?,
                orpha_id: row.get(8)?,
            },
            prs_links: Vec::new(),
        };
        Ok((category_id, item))
    })?;

    let mut out: HashMap<i64, Vec<TraitWithLinks>> = HashMap::new();
    for row in rows {
        let (category_id, item) = row?;
        out.entry(category_id).or_default().push(item);
    }
    Ok(out)
}

fn load_links(conn: &Connection, only: Option<i64>) -> Result<HashMap<i64, Vec<PrsModelLink>>> {
    let mut stmt = conn.prepare(
        r"
        SELECT l.trait_id, l.id, l.prs_model_id
        FROM prs_model_to_trait l
        WHERE l.trait_id IN (
            SELECT tc.trait_id
            FROM trait_to_category tc
            WHERE ?1 IS NULL OR tc.category_id = ?1
        )
        ORDER BY l.trait_id ASC, l.id ASC
        ",
    )?;
    let rows = stmt.query_map(params![only], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            PrsModelLink {
                link_id: row.get(1)?,
                prs_model_id: row.get(2)?,
            },
        ))
    })?;

    let mut out: HashMap<i64, Vec<PrsModelLink>> = HashMap::new();
    for row in rows {
        let (trait_id, link) = row?;
        out.entry(trait_id).or_default().push(link);
    }
    Ok(out)
}
