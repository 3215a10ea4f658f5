use crate::ingest::taxonomy::{FeedValidation, TaxonomyFeedParser};

/// Strict check of a feed document posted as the request body
#[derive(Debug, Clone)]
pub struct ValidateFeedCommand {
    pub content: String,
}

#[tracing::instrument(skip(command), fields(bytes = command.content.len()))]
pub fn handle(command: ValidateFeedCommand) -> FeedValidation {
    TaxonomyFeedParser::new().validate(&command.content)
}
