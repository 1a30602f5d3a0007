//! HTTP server for interactive dashboard mode
//!
//! `streamlens serve catalog.csv` → starts server, opens browser, shows the
//! dashboard. Every request reloads the CSV and recomputes every block - the
//! page's filter control just refetches `/api/dashboard`, so a stale file on
//! disk is never served.

use crate::dashboard::{Dashboard, DashboardParams};
use crate::report::html;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }

    fn failure(error: String) -> Self {
        Self { ok: false, data: None, error: Some(error) }
    }
}

/// Query parameters for `/api/dashboard`. `types` is a comma-separated list;
/// an absent parameter means "all types", an empty string means "none".
#[derive(Deserialize, Debug, Default)]
pub struct QueryParams {
    pub types: Option<String>,
}

impl QueryParams {
    pub fn into_dashboard_params(self) -> DashboardParams {
        DashboardParams {
            types: self.types.map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            }),
        }
    }
}

/// Start server, open browser, serve the dashboard.
pub fn start(port: u16, path: PathBuf) -> std::io::Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let url = format!("http://localhost:{}", port);
    let path = path.canonicalize().unwrap_or(path);

    eprintln!("\n\x1b[1;32m📺 Streamlens\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   Catalog: {}\n", path.display());

    // Open browser
    let _ = open::that(&url);

    // Handle requests
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &path) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(mut request: Request, catalog_path: &Path) -> std::io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let method = request.method().clone();

    match (&method, path) {
        // Dashboard page, default (all-types) selection
        (&Method::Get, "/") => {
            match Dashboard::build(catalog_path, &DashboardParams::default()) {
                Ok(dashboard) => {
                    let response = Response::from_string(html::render(&dashboard, true))
                        .with_header(content_type("text/html"));
                    request.respond(response)
                }
                Err(e) => {
                    let response = Response::from_string(format!("dashboard failed: {}", e))
                        .with_status_code(500);
                    request.respond(response)
                }
            }
        }

        // API: recompute with the requested filter
        (&Method::Get, "/api/dashboard") | (&Method::Post, "/api/dashboard") => {
            let params = parse_params(&mut request)?;
            eprintln!("→ types={:?}", params.types);

            // A failed rebuild (file moved, column dropped) reports through
            // the envelope instead of killing the server.
            let body = match Dashboard::build(catalog_path, &params) {
                Ok(dashboard) => serde_json::to_string(&ApiResponse::success(dashboard))?,
                Err(e) => {
                    serde_json::to_string(&ApiResponse::<Dashboard>::failure(e.to_string()))?
                }
            };

            let response =
                Response::from_string(body).with_header(content_type("application/json"));
            request.respond(response)
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn content_type(value: &str) -> Header {
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes()).expect("static header")
}

fn parse_params(request: &mut Request) -> std::io::Result<DashboardParams> {
    let url = request.url().to_string();

    // Try query string
    if let Some(query) = url.split('?').nth(1) {
        if let Ok(params) = serde_urlencoded::from_str::<QueryParams>(query) {
            return Ok(params.into_dashboard_params());
        }
    }

    // Try JSON body
    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;
    if !body.is_empty() {
        if let Ok(params) = serde_json::from_str::<QueryParams>(&body) {
            return Ok(params.into_dashboard_params());
        }
    }

    // Fall back to the full selection
    Ok(DashboardParams::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // QUERY PARAMETER TESTS
    // ==========================================================================
    //
    // The multi-select travels as one comma-separated parameter. Absent means
    // "everything"; present-but-empty means "nothing selected".
    // ==========================================================================

    #[test]
    fn test_absent_types_means_all() {
        let params: QueryParams = serde_urlencoded::from_str("").expect("parse");
        assert!(params.into_dashboard_params().types.is_none());
    }

    #[test]
    fn test_empty_types_means_none_selected() {
        let params: QueryParams = serde_urlencoded::from_str("types=").expect("parse");
        let params = params.into_dashboard_params();
        assert_eq!(params.types, Some(Vec::new()));
    }

    #[test]
    fn test_comma_separated_types() {
        let params: QueryParams =
            serde_urlencoded::from_str("types=Movie%2CTV+Show").expect("parse");
        let params = params.into_dashboard_params();
        assert_eq!(
            params.types,
            Some(vec!["Movie".to_string(), "TV Show".to_string()])
        );
    }

    #[test]
    fn test_whitespace_trimmed() {
        let params = QueryParams {
            types: Some(" Movie , TV Show ".to_string()),
        };
        assert_eq!(
            params.into_dashboard_params().types,
            Some(vec!["Movie".to_string(), "TV Show".to_string()])
        );
    }
}
