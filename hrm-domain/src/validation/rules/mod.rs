mod in_set;
mod integer;
mod length;
mod positive;
mod required;
mod types;

pub use in_set::In;
pub use integer::Integer;
pub use length::Length;
pub use positive::Positive;
pub use required::Required;
pub use types::{BoolType, IntType, StringType};
