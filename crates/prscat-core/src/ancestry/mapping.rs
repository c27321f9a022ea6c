use std::collections::HashMap;
use std::sync::OnceLock;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Raw GWAS-catalog ancestry descriptions and the broad ancestry label each one
/// is reported under.
pub const BROAD_ANCESTRY_MAPPING: &[(&str, &str)] = &[
    ("Asian unspecified", "Additional Asian Ancestries"),
    ("Central Asian, South Asian", "Additional Asian Ancestries"),
    ("Other admixed ancestry", "Additional Asian Ancestries"),
    ("South Asian, South East Asian, East Asian", "Additional Asian Ancestries"),
    ("South East Asian", "Additional Asian Ancestries"),
    ("Asian unspecified, Oceanian", "Additional Diverse Ancestries"),
    ("Native American", "Additional Diverse Ancestries"),
    ("Oceanian", "Additional Diverse Ancestries"),
    ("Other", "Additional Diverse Ancestries"),
    ("African American or Afro-Caribbean", "African"),
    ("African American or Afro-Caribbean, African unspecified", "African"),
    ("African American or Afro-Caribbean, Sub-Saharan African", "African"),
    ("African American or Afro-Caribbean,African unspecified", "African"),
    ("African unspecified", "African"),
    ("African unspecified, African American or Afro-Caribbean", "African"),
    ("Sub-Saharan African", "African"),
    ("Sub-Saharan African, African American or Afro-Caribbean", "African"),
    ("Not reported", "Not Reported"),
    ("East Asian", "East Asian"),
    ("European", "European"),
    ("Greater Middle Eastern (Middle Eastern, North African or Persian)", "Greater Middle Eastern"),
    ("Hispanic or Latin American", "Hispanic or Latin American"),
    (
        "African American or Afro-Caribbean, Asian unspecified",
        "Multi-Ancestry (excluding European)",
    ),
    (
        "African American or Afro-Caribbean, Hispanic or Latin American",
        "Multi-Ancestry (excluding European)",
    ),
    ("East Asian, Asian unspecified", "Multi-Ancestry (excluding European)"),
    ("East Asian, NR", "Multi-Ancestry (excluding European)"),
    ("East Asian, South Asian", "Multi-Ancestry (excluding European)"),
    ("Hispanic or Latin American, African unspecified", "Multi-Ancestry (excluding European)"),
    (
        "Hispanic or Latin American, African unspecified, Asian unspecified, NR",
        "Multi-Ancestry (excluding European)",
    ),
    ("Hispanic or Latin American, Native American", "Multi-Ancestry (excluding European)"),
    (
        "NR, Hispanic or Latin American, African unspecified, Asian unspecified",
        "Multi-Ancestry (excluding European)",
    ),
    (
        "South Asian, East Asian, African American or Afro-Caribbean, Hispanic or Latin American",
        "Multi-Ancestry (excluding European)",
    ),
    ("South Asian, East Asian, African unspecified", "Multi-Ancestry (excluding European)"),
    ("South Asian,East Asian", "Multi-Ancestry (excluding European)"),
    (
        "African American or Afro-Caribbean, African unspecified, European",
        "Multi-Ancestry (including European)",
    ),
    (
        "African American or Afro-Caribbean, African unspecified, European, East Asian, Hispanic or Latin American, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "African American or Afro-Caribbean, East Asian, European, Hispanic or Latin American, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "African American or Afro-Caribbean, East Asian, European, Hispanic or Latin American, South Asian, NR",
        "Multi-Ancestry (including European)",
    ),
    (
        "African American or Afro-Caribbean, East Asian, European, Hispanic or Latin American, South Asian, Sub-Saharan African",
        "Multi-Ancestry (including European)",
    ),
    (
        "African American or Afro-Caribbean, European, Hispanic or Latin American",
        "Multi-Ancestry (including European)",
    ),
    (
        "African unspecified, East Asian, European, Hispanic or Latin American, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "African unspecified, Hispanic or Latin American, European, Asian unspecified, NR",
        "Multi-Ancestry (including European)",
    ),
    (
        "African unspecified,Hispanic or Latin American,European,South Asian,Central Asian,Greater Middle Eastern (Middle Eastern, North African or Persian),East Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African American or Afro-Caribbean, East Asian, Hispanic or Latin American, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African American or Afro-Caribbean, Hispanic or Latin American",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African American or Afro-Caribbean, Hispanic or Latin American, East Asian, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African American or Afro-Caribbean, Hispanic or Latin American, South Asian",
        "Multi-Ancestry (including European)",
    ),
    ("European, African unspecified, Asian unspecified, NR", "Multi-Ancestry (including European)"),
    (
        "European, African unspecified, Asian unspecified, Oceanian, Hispanic or Latin American, Other, Not reported",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African unspecified, Asian unspecified, Other admixed ancestry, Not reported",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African unspecified, East Asian, European, Hispanic or Latin American",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African unspecified, East Asian, Hispanic or Latin American",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African unspecified, East Asian, South Asian, Greater Middle Eastern (Middle Eastern, North African or Persian), Hispanic or Latin American",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African unspecified, East Asian, South Asian, Not reported",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, African unspecified, Hispanic or Latin American, East Asian, South Asian",
        "Multi-Ancestry (including European)",
    ),
    ("European, Asian unspecified", "Multi-Ancestry (including European)"),
    ("European, Central Asian", "Multi-Ancestry (including European)"),
    (
        "European, East Asian, African unspecified, Hispanic or Latin American, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, East Asian, African unspecified, South Asian, Greater Middle Eastern (Middle Eastern, North African or Persian)",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, East Asian, Hispanic or Latin American, African unspecified, South Asian",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, East Asian, South Asian, Asian unspecified, NR",
        "Multi-Ancestry (including European)",
    ),
    ("European, Hispanic or Latin American", "Multi-Ancestry (including European)"),
    (
        "European, Hispanic or Latin American, African American or Afro-Caribbean",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, Hispanic or Latin American, African unspecified, East Asian, Oceanian, Not reported",
        "Multi-Ancestry (including European)",
    ),
    ("European, Not reported", "Multi-Ancestry (including European)"),
    ("European, NR", "Multi-Ancestry (including European)"),
    ("European, Other", "Multi-Ancestry (including European)"),
    ("European, South Asian", "Multi-Ancestry (including European)"),
    (
        "European, South Asian, African unspecified, East Asian, Other admixed ancestry, NR",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, South Asian, African unspecified, Other admixed ancestry",
        "Multi-Ancestry (including European)",
    ),
    (
        "European, South Asian, East Asian, African American or Afro-Caribbean",
        "Multi-Ancestry (including European)",
    ),
    ("European, South Asian, NR", "Multi-Ancestry (including European)"),
    (
        "European, South East Asian, East Asian, South Asian, African American or Afro-Caribbean, Native American, Greater Middle Eastern (Middle Eastern, North African or Persian), Hispanic or Latin American, Not reported",
        "Multi-Ancestry (including European)",
    ),
    ("NR, European", "Multi-Ancestry (including European)"),
    ("NR", "Not Reported"),
    ("South Asian", "South Asian"),
    ("East Asian, European", "East Asian"),
];

struct MappingIndex {
    exact: HashMap<&'static str, &'static str>,
    normalized: HashMap<String, &'static str>,
}

static MAPPING_INDEX: OnceLock<MappingIndex> = OnceLock::new();

fn mapping_index() -> &'static MappingIndex {
    MAPPING_INDEX.get_or_init(|| {
        let mut exact = HashMap::with_capacity(BROAD_ANCESTRY_MAPPING.len());
        let mut normalized = HashMap::with_capacity(BROAD_ANCESTRY_MAPPING.len());
        for &(raw, label) in BROAD_ANCESTRY_MAPPING {
            exact.insert(raw, label);
            normalized.entry(normalize_ancestry_text(raw)).or_insert(label);
        }
        MappingIndex { exact, normalized }
    })
}

/// Strips accents and `.,;` punctuation and collapses whitespace.
#[must_use]
pub fn normalize_ancestry_text(raw: &str) -> String {
    let stripped = raw
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .filter(|ch| !matches!(ch, '.' | ',' | ';'))
        .collect::<String>();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Broad label for a raw ancestry description. Exact (trimmed) matches win;
/// otherwise the description is compared in normalized form.
#[must_use]
pub fn broad_ancestry_label(raw: &str) -> Option<&'static str> {
    let index = mapping_index();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    index
        .exact
        .get(trimmed)
        .copied()
        .or_else(|| index.normalized.get(&normalize_ancestry_text(trimmed)).copied())
}
