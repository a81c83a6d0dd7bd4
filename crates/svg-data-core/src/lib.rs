pub mod catalog;
pub mod catalogs;
pub mod compat;
pub mod enricher;
pub mod error;
pub mod files;
pub mod resolver;
pub mod status;
pub mod types;
pub mod validator;

pub use catalogs::DATA_VERSION;
pub use compat::CompatData;
pub use enricher::Enricher;
pub use error::{GenerateError, GenerateResult};
pub use files::{read_json, write_outputs, OutputFiles};
pub use resolver::{build_catalog, resolve, AttributeSets, Catalog, CatalogSource};
pub use status::{FeatureStatus, NoStatus, StatusSource, WebFeatures};
pub use types::*;
pub use validator::{ensure_valid, validate};
