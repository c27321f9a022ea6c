mod catalog;
mod fetch;
mod snapshot;
mod summary;

pub use catalog::{
    AncestryPopulation, AncestryRef, AncestryScopedPrsModel, AncestryShare, EfoTrait,
    OntologyRefs, PrsModel, PrsModelWithAncestries, TraitDetails,
};
pub use fetch::{CategoryWithTraits, PrsModelLink, TraitWithLinks};
pub use snapshot::{
    CatalogSnapshot, SnapshotAncestryShare, SnapshotCategory, SnapshotEvaluationSample,
    SnapshotPrsModel, SnapshotTrait,
};
pub use summary::{
    ImportReport, PrsModelLookupResult, TraitCategorySummary, TraitSummary,
};
