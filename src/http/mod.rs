// HTTP module entry point
// Query-string parsing and response building

pub mod query;
pub mod response;

pub use query::QueryError;
pub use response::{build_404_response, build_405_response, error_response, json_response};
