// Handler module entry point
// Route table and request handlers

pub mod router;
pub mod sample;

pub use router::{handle_request, RouteMatch, RouteTable, RouteTarget};
