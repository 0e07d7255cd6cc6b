mod translate;
mod validate;

pub use translate::translate_conditions;
pub use validate::validate_conditions;
