pub mod query_limit;
pub mod response;

pub use query_limit::limit_query_params;
pub use response::{ApiResponse, ApiResult};
