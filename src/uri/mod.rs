// URI construction module
// Client-side URI building and component percent-encoding

pub mod builder;
pub mod encode;

pub use builder::{UriBuildError, UriBuilder};
