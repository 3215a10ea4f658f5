pub mod requirements;
pub mod suggest_mappings;

pub use requirements::CategoryRequirementsQuery;
pub use suggest_mappings::SuggestMappingsQuery;
