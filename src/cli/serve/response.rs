//! HTTP response handlers.

use crate::config::SiteConfig;
use crate::utils::mime;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a static file.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    // Range header support (audio/video seeking)
    if mime::is_media(content_type)
        && let Some(range) = get_range_header(&request)
    {
        return respond_range(request, path, content_type, &range);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Handle Range request for media files (audio/video seeking).
fn respond_range(
    request: Request,
    path: &Path,
    content_type: &'static str,
    range: &str,
) -> Result<()> {
    use std::io::{Read, Seek, SeekFrom};

    let file_size = fs::metadata(path)?.len();
    if file_size == 0 {
        return send_body(request, 200, content_type, Vec::new());
    }

    // Parse "bytes=start-end" format
    let range = range.strip_prefix("bytes=").unwrap_or(range);
    let (start, end) = parse_range(range, file_size);
    let length = end - start + 1;

    // Stream the requested range - no allocation for large ranges
    let mut file = fs::File::open(path)?;
    file.seek(SeekFrom::Start(start))?;
    let reader = file.take(length);

    let content_range = format!("bytes {}-{}/{}", start, end, file_size);
    let response = Response::new(
        StatusCode(206),
        vec![
            make_header("Content-Type", content_type),
            Header::from_bytes("Content-Range", content_range.as_bytes())
                .map_err(|_| anyhow::anyhow!("invalid Content-Range header"))?,
            make_header("Accept-Ranges", "bytes"),
        ],
        reader,
        Some(length as usize),
        None,
    );

    request.respond(response)?;
    Ok(())
}

/// Parse Range header value "start-end" into (start, end) bytes.
fn parse_range(range: &str, file_size: u64) -> (u64, u64) {
    let range = range.trim();
    let parts: Vec<&str> = range.split('-').collect();

    match parts.as_slice() {
        // "0-499" - specific range
        [s, e] if !s.is_empty() && !e.is_empty() => {
            let start: u64 = s.trim().parse().unwrap_or(0);
            let end: u64 = e.trim().parse().unwrap_or(file_size - 1);
            let (start, end) = (start.min(file_size - 1), end.min(file_size - 1));
            // Inverted ranges fall back to the full file
            if start > end { (0, file_size - 1) } else { (start, end) }
        }
        // "0-" - from start to end
        [s, ""] if !s.is_empty() => {
            let start: u64 = s.trim().parse().unwrap_or(0);
            (start.min(file_size - 1), file_size - 1)
        }
        // "-500" - last 500 bytes
        ["", e] if !e.is_empty() => {
            let suffix: u64 = e.trim().parse().unwrap_or(0);
            let start = file_size.saturating_sub(suffix);
            (start, file_size - 1)
        }
        _ => (0, file_size - 1),
    }
}

/// Extract Range header from request.
fn get_range_header(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case("range"))
        .map(|h| h.value.to_string())
}

/// Respond with 404 page (custom or default).
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    use crate::utils::mime::types::{HTML, PLAIN};

    let custom_404 = config.build.output.join("404.html");
    let has_custom = custom_404.is_file();

    if is_head_request(&request) {
        let mime = if has_custom { HTML } else { PLAIN };
        return send_head(request, 404, mime);
    }

    if has_custom
        && let Ok(body) = fs::read(&custom_404)
    {
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    use crate::utils::mime::types::PLAIN;
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &str) -> Header {
    // Both sides are valid header tokens by construction
    Header::from_bytes(key, value).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_specific() {
        assert_eq!(parse_range("0-499", 1000), (0, 499));
        assert_eq!(parse_range("500-999", 1000), (500, 999));
    }

    #[test]
    fn test_parse_range_open_ended() {
        assert_eq!(parse_range("500-", 1000), (500, 999));
    }

    #[test]
    fn test_parse_range_suffix() {
        assert_eq!(parse_range("-200", 1000), (800, 999));
    }

    #[test]
    fn test_parse_range_clamps_to_file_size() {
        assert_eq!(parse_range("0-5000", 1000), (0, 999));
        assert_eq!(parse_range("5000-", 1000), (999, 999));
    }

    #[test]
    fn test_parse_range_garbage_falls_back_to_full() {
        assert_eq!(parse_range("garbage", 1000), (0, 999));
    }

    #[test]
    fn test_parse_range_inverted_falls_back_to_full() {
        assert_eq!(parse_range("900-100", 1000), (0, 999));
    }
}
