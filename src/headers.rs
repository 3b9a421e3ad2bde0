//! Header name helpers shared by the parsers and the environment builder

/// Names that keep their bare canonical form (no `HTTP_` prefix)
const BARE_KEYS: [&'static str; 3] = [
    "CONTENT_TYPE",
    "CONTENT_LENGTH",
    "SERVER_NAME",
];

pub fn is_content_length(val: &str) -> bool {
    val.eq_ignore_ascii_case("Content-Length")
}

pub fn is_transfer_encoding(val: &str) -> bool {
    val.eq_ignore_ascii_case("Transfer-Encoding")
}

pub fn is_host(val: &str) -> bool {
    val.eq_ignore_ascii_case("Host")
}

pub fn is_server_name(val: &str) -> bool {
    val.eq_ignore_ascii_case("Server-Name")
}

// header value is a flag like `HTTPS: on`
// we need case insensitive comparison and strip out of the whitespace
pub fn is_affirmative(val: &str) -> bool {
    let val = val.trim();
    val.eq_ignore_ascii_case("on")
        || val.eq_ignore_ascii_case("yes")
        || val == "1"
}

fn is_canonical(name: &str) -> bool {
    if !name.bytes().all(|c| c == b'_' || c.is_ascii_digit()
                             || c.is_ascii_uppercase())
    {
        return false;
    }
    (name.starts_with("HTTP_") && name.len() > "HTTP_".len())
        || BARE_KEYS.contains(&name)
}

/// Converts a wire header name into the environment key
///
/// `Content-Type` becomes `CONTENT_TYPE`, `X-Forwarded-For` becomes
/// `HTTP_X_FORWARDED_FOR`. Keys that already have the canonical form are
/// returned unchanged, so the conversion is idempotent.
pub fn canonical_key(name: &str) -> String {
    if is_canonical(name) {
        return name.to_string();
    }
    let key: String = name.chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    if BARE_KEYS.contains(&&key[..]) {
        key
    } else {
        format!("HTTP_{}", key)
    }
}

/// Checks a header name we are going to put on the wire
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.bytes().any(|c| {
        c == b':' || c == b'\r' || c == b'\n' || c == b' ' || c == b'\t'
    })
}
