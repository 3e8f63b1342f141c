mod field;
mod state;
mod validation;

pub use field::{FieldKind, FieldName};
pub use state::{FormState, Phase};
pub use validation::is_invalid;
