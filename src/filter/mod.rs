pub mod filter_where;
pub mod query;
pub mod types;

pub use filter_where::FilterWhere;
pub use query::filters_from_query;
pub use types::*;
