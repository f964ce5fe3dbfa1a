pub mod catalog;
pub mod record;

pub use catalog::{ACCOUNTS, AccountOption, BUILDING_TYPES, FieldDescriptor, FieldKind, UTILITY_FIELDS};
pub use record::{FormRecord, MissingField, UnknownField};
