//! Method+path router over plain HttpResponse values, so route behavior is
//! testable without a socket.

use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str) -> HttpResponse {
    let (route, query) = match path.split_once('?') {
        Some((route, query)) => (route, query),
        None => (path, ""),
    };

    match (method, route) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/plain; charset=utf-8",
            body: index_text(),
        },
        ("GET", "/api/health") => json_or_error(api::health_payload()),
        ("GET", "/api/lighthouses") => json_or_error(api::lighthouses_payload()),
        (method, route) if method == "GET" && route.starts_with("/api/lighthouses/") => {
            let id = route
                .trim_start_matches("/api/lighthouses/")
                .split('/')
                .next()
                .unwrap_or("");
            json_or_error(api::lighthouse_payload(id))
        }
        ("GET", "/api/search") => {
            let query = query_param(query, "q").unwrap_or_default();
            json_or_error(api::search_payload(&query))
        }
        ("GET", "/api/resources") => {
            let category = query_param(query, "category");
            let lighthouse = query_param(query, "lighthouse");
            json_or_error(api::resources_payload(
                category.as_deref(),
                lighthouse.as_deref(),
            ))
        }
        ("GET", "/api/resources/grouped") => json_or_error(api::resources_grouped_payload()),
        ("GET", "/api/essay") => json_or_error(api::essay_payload()),
        ("GET", "/api/map") => json_or_error(api::map_payload()),
        ("GET", "/api/timeline") => json_or_error(api::timeline_payload()),
        ("GET", "/api/stats") => json_or_error(api::stats_payload()),
        ("GET", "/api/export") => json_or_error(api::export_payload()),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn index_text() -> String {
    [
        "pharos - Hong Kong lighthouse heritage data service",
        "",
        "GET /api/health",
        "GET /api/lighthouses",
        "GET /api/lighthouses/{id}",
        "GET /api/search?q=",
        "GET /api/resources[?category=|lighthouse=]",
        "GET /api/resources/grouped",
        "GET /api/essay",
        "GET /api/map",
        "GET /api/timeline",
        "GET /api/stats",
        "GET /api/export",
        "",
    ]
    .join("\n")
}

/// Bare-bones query string lookup; the API takes simple ascii params only.
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == name {
            Some(value.replace('+', " "))
        } else {
            None
        }
    })
}

fn json_or_error(payload: Result<String, api::ApiError>) -> HttpResponse {
    match payload {
        Ok(body) => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body,
        },
        Err(api::ApiError::NotFound(what)) => {
            error_response(404, "Not Found", &format!("{what} not found"))
        }
        Err(api::ApiError::BadRequest(message)) => error_response(400, "Bad Request", &message),
        Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}
