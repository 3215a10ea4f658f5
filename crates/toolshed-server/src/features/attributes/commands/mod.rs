pub mod map;
pub mod validate;

pub use map::MapAttributesCommand;
pub use validate::ValidateAttributesCommand;
