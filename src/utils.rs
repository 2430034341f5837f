use std::{net::SocketAddr, str::FromStr};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

use crate::types::IdAssignment;

/// Generates the random `state` value used to bind an OAuth callback to the
/// server run that issued the authorize redirect.
pub fn generate_state() -> String {
    let mut bytes = [0u8; 24];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Formats a follower count the way the artists page shows it: `1.2M`,
/// `3.4K`, or the plain number below one thousand.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Escapes text for interpolation into HTML element content or a quoted
/// attribute value.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parses the `{id}` path segment of a task route.
///
/// Anything that is not an integer yields `None`, which the handlers report
/// as not-found.
pub fn parse_task_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn parse_id_assignment(s: &str) -> Result<IdAssignment, String> {
    s.parse()
}

/// Parses a listen address. Accepts `host:port` as well as the bare `:port`
/// shorthand, which binds on all IPv4 interfaces.
pub fn parse_addr(addr: &str) -> Result<SocketAddr, String> {
    let addr = addr.trim();
    let full = match addr.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => addr.to_string(),
    };
    SocketAddr::from_str(&full).map_err(|e| format!("Invalid server address '{}': {}", addr, e))
}
