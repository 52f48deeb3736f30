pub mod error;
pub mod layout;
pub mod models;
pub mod schema;
pub mod validate;

pub use error::{ErrorKind, ValidationError};
pub use layout::DatasetLayout;
pub use validate::{validate_dataset, DatasetSummary};
