pub mod builder;
pub mod evaluate;
pub mod types;

pub use builder::SearchForm;
pub use evaluate::{evaluate, evaluate_featured};
pub use types::{FormOption, PropertyFilters};
