pub mod import;
pub mod validate;

pub use import::{ImportTaxonomyCommand, ImportTaxonomyError};
pub use validate::ValidateFeedCommand;
