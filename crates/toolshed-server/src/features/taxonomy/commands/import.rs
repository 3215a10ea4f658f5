use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::features::shared::{validate_url, UrlValidationError};
use crate::ingest::taxonomy::{ImportResult, TaxonomyImporter};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportTaxonomyCommand {
    pub source_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportTaxonomyError {
    #[error(transparent)]
    InvalidSourceUrl(#[from] UrlValidationError),
}

impl From<ImportTaxonomyError> for AppError {
    fn from(err: ImportTaxonomyError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl ImportTaxonomyCommand {
    pub fn validate(&self) -> Result<(), ImportTaxonomyError> {
        validate_url(&self.source_url, "source_url")?;
        Ok(())
    }
}

/// Replace the taxonomy with the feed at `source_url`.
///
/// Fetch and batch failures are reported inside the [`ImportResult`], not as
/// an error.
#[tracing::instrument(skip(importer), fields(source_url = %command.source_url))]
pub async fn handle(
    importer: &TaxonomyImporter,
    command: ImportTaxonomyCommand,
) -> Result<ImportResult, ImportTaxonomyError> {
    command.validate()?;
    Ok(importer.import_from_feed(command.source_url.trim()).await)
}
