pub mod concept;
pub mod error;
pub mod header;
pub mod patient_search;
pub mod section;

pub use concept::{Concept, ConceptMapping};
pub use error::{CoreError, ErrorCategory, Result};
pub use header::{HeaderLabelResolver, HeaderLabelSource, resolve_header_name};
pub use patient_search::{
    PatientIdentifier, PatientSummary, SearchForm, SearchOutcome, SearchResponse,
    no_results_found,
};
pub use section::{DashboardParams, FlowSheetSection, HeaderLabel};
