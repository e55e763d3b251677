//! query-echo: a minimal demonstration HTTP service.
//!
//! The service exposes a single route, `GET /api/sample`, which echoes the
//! `requestQuery` query parameter back as JSON. The interesting surface is
//! the client side: [`uri::UriBuilder`] reproduces the encoding rules a URI
//! builder applies (or deliberately does not apply) to literal `+` characters
//! in query values, and [`client`] provides the rewrite filter that works
//! around the form-encoding pitfall.

pub mod client;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod uri;
