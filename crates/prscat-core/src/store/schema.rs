pub(super) const CATALOG_SCHEMA: &str = r"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS ancestry_populations (
    id INTEGER PRIMARY KEY,
    label TEXT NOT NULL,
    symbol TEXT
);

CREATE TABLE IF NOT EXISTS evaluation_samples (
    id INTEGER PRIMARY KEY,
    ancestry_id INTEGER REFERENCES ancestry_populations(id)
);

CREATE TABLE IF NOT EXISTS prs_models (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    number_of_snp INTEGER,
    pgsc_id TEXT,
    pgsc_url TEXT,
    publication_id INTEGER
);

CREATE TABLE IF NOT EXISTS prs_model_to_ancestry (
    prs_model_id INTEGER NOT NULL REFERENCES prs_models(id) ON DELETE CASCADE,
    ancestry_id INTEGER NOT NULL REFERENCES ancestry_populations(id) ON DELETE CASCADE,
    percentage REAL,
    PRIMARY KEY (prs_model_id, ancestry_id)
);

CREATE TABLE IF NOT EXISTS model_evaluations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    prs_model_id INTEGER NOT NULL REFERENCES prs_models(id) ON DELETE CASCADE,
    sample_id INTEGER NOT NULL REFERENCES evaluation_samples(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS traits (
    id INTEGER PRIMARY KEY,
    label TEXT NOT NULL,
    description TEXT,
    url TEXT,
    efo_id TEXT,
    mondo_id TEXT,
    hpo_id TEXT,
    orpha_id TEXT
);

CREATE TABLE IF NOT EXISTS prs_model_to_trait (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    trait_id INTEGER NOT NULL REFERENCES traits(id) ON DELETE CASCADE,
    prs_model_id INTEGER NOT NULL REFERENCES prs_models(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS trait_categories (
    id INTEGER PRIMARY KEY,
    label TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS trait_to_category (
    category_id INTEGER NOT NULL REFERENCES trait_categories(id) ON DELETE CASCADE,
    trait_id INTEGER NOT NULL REFERENCES traits(id) ON DELETE CASCADE,
    PRIMARY KEY (category_id, trait_id)
);

CREATE INDEX IF NOT EXISTS idx_prs_model_to_trait_trait ON prs_model_to_trait(trait_id);
CREATE INDEX IF NOT EXISTS idx_prs_model_to_ancestry_ancestry ON prs_model_to_ancestry(ancestry_id);
CREATE INDEX IF NOT EXISTS idx_model_evaluations_model ON model_evaluations(prs_model_id);
CREATE INDEX IF NOT EXISTS idx_evaluation_samples_ancestry ON evaluation_samples(ancestry_id);
CREATE INDEX IF NOT EXISTS idx_trait_to_category_trait ON trait_to_category(trait_id);
";
