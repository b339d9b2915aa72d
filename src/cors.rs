use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Scheme, host and optional port of an origin such as `http://localhost:5173`.
#[derive(Debug, PartialEq, Eq)]
struct OriginParts<'a> {
    scheme: &'a str,
    host: &'a str,
    port: Option<&'a str>,
}

fn parse_origin(origin: &str) -> Option<OriginParts<'_>> {
    let (scheme, authority) = origin.split_once("://")?;
    if scheme.is_empty() || authority.is_empty() || authority.contains(['/', '@', '?', '#']) {
        return None;
    }

    // Bracketed IPv6 hosts carry their own colons
    let (host, port) = match authority.strip_prefix('[') {
        Some(bracketed) => {
            let (host, rest) = bracketed.split_once(']')?;
            let port = if rest.is_empty() {
                None
            } else {
                Some(rest.strip_prefix(':')?)
            };
            (host, port)
        }
        None => match authority.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        },
    };

    let bad_port = port.is_some_and(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()));
    if host.is_empty() || bad_port {
        return None;
    }
    Some(OriginParts { scheme, host, port })
}

/// Whether `origin` matches one of `allowed`.
///
/// Scheme and host must match exactly (ignoring ASCII case). A configured
/// origin without a port allows any port; one with a port allows only that port.
#[must_use]
pub fn origin_allowed(origin: &str, allowed: &[String]) -> bool {
    let Some(origin) = parse_origin(origin) else {
        return false;
    };

    allowed.iter().filter_map(|a| parse_origin(a)).any(|a| {
        a.scheme.eq_ignore_ascii_case(origin.scheme)
            && a.host.eq_ignore_ascii_case(origin.host)
            && a.port.is_none_or(|port| origin.port == Some(port))
    })
}

/// Build a CORS layer for the HTTP API with the given allowed origins.
///
/// See [`origin_allowed`] for the matching rule; `http://localhost` also covers
/// `http://localhost:5173`.
/// Pass "*" in the origins list to allow all origins (not recommended for production).
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }

            origin
                .to_str()
                .is_ok_and(|origin_str| origin_allowed(origin_str, &cors_origins))
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Split and clean the raw `--cors-origins` values.
#[must_use]
pub fn normalize_origins(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_origins_trims_and_drops_empty() {
        let raw = vec![
            " http://localhost ".to_string(),
            String::new(),
            "https://example.com".to_string(),
        ];
        assert_eq!(
            normalize_origins(&raw),
            vec!["http://localhost", "https://example.com"]
        );
    }

    fn defaults() -> Vec<String> {
        DEFAULT_CORS_ORIGINS.split(',').map(str::to_string).collect()
    }

    #[test]
    fn test_origin_allowed_any_port_on_configured_host() {
        let allowed = defaults();
        assert!(origin_allowed("http://localhost", &allowed));
        assert!(origin_allowed("http://localhost:5173", &allowed));
        assert!(origin_allowed("https://127.0.0.1:8443", &allowed));
        assert!(origin_allowed("HTTP://LocalHost:3000", &allowed));
    }

    #[test]
    fn test_origin_allowed_rejects_look_alike_hosts() {
        let allowed = defaults();
        for origin in [
            "http://localhost.attacker.example",
            "http://localhost.attacker.example:5173",
            "http://127.0.0.1.nip.io",
            "http://localhostx",
            "http://localhost@attacker.example",
            "http://localhost:80abc",
            "ftp://localhost",
            "null",
        ] {
            assert!(!origin_allowed(origin, &allowed), "origin: {origin}");
        }
    }

    #[test]
    fn test_origin_with_port_only_allows_that_port() {
        let allowed = vec!["http://localhost:5173".to_string()];
        assert!(origin_allowed("http://localhost:5173", &allowed));
        assert!(!origin_allowed("http://localhost:5174", &allowed));
        assert!(!origin_allowed("http://localhost", &allowed));
    }

    #[test]
    fn test_ipv6_origins() {
        let allowed = vec!["http://[::1]".to_string()];
        assert!(origin_allowed("http://[::1]:8080", &allowed));
        assert!(!origin_allowed("http://[::2]:8080", &allowed));
    }

    #[test]
    fn test_default_origins_are_local() {
        for origin in DEFAULT_CORS_ORIGINS.split(',') {
            assert!(origin.contains("localhost") || origin.contains("127.0.0.1"));
        }
    }
}
