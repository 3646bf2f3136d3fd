pub use crate::language::Language;
pub use crate::message::{Message, Translation};
