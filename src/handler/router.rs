//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Routing is an explicit
//! `{method, path}` table constructed at startup and owned by `AppState`;
//! anything the table does not know falls through to 404, a known path with
//! the wrong method to 405.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

use super::sample;
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Targets a route can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Echo handler for `GET /api/sample`
    Sample,
}

/// Result of a route table lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Found(RouteTarget),
    /// Path is registered but not for this method; carries the Allow value
    MethodNotAllowed(String),
    NotFound,
}

/// Explicit `{method, path}` -> handler mapping table
pub struct RouteTable {
    routes: Vec<(Method, &'static str, RouteTarget)>,
}

impl RouteTable {
    /// Route table for this service: the single sample route
    pub fn with_default_routes() -> Self {
        Self {
            routes: vec![(Method::GET, "/api/sample", RouteTarget::Sample)],
        }
    }

    /// Find the registered target for an exact method + path pair
    pub fn lookup(&self, method: &Method, path: &str) -> RouteMatch {
        let mut allowed: Vec<&str> = Vec::new();
        for (m, p, target) in &self.routes {
            if *p == path {
                if m == method {
                    return RouteMatch::Found(*target);
                }
                allowed.push(m.as_str());
            }
        }
        if allowed.is_empty() {
            RouteMatch::NotFound
        } else {
            RouteMatch::MethodNotAllowed(allowed.join(", "))
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);

    let server_name = state.config.http.server_name.as_str();

    // Dispatch through the route table
    let response = match state.routes.lookup(&method, &path) {
        RouteMatch::Found(RouteTarget::Sample) => sample::handle(query.as_deref(), server_name),
        RouteMatch::MethodNotAllowed(allow) => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            http::build_405_response(&allow, server_name)
        }
        RouteMatch::NotFound => http::build_404_response(server_name),
    };

    if state.access_log_enabled() {
        let mut entry =
            AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.request_time_us =
            u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}
