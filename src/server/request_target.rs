/// Classified middle token of the request line
#[derive(Debug)]
pub enum RequestTarget<'a> {
    /// Usual form of `/hello?name=world`
    Origin(&'a str),
    /// Full url: `http://example.com:8080/hello`
    ///
    /// Note in this case (unlike in Origin) path may not start with a slash
    Absolute { scheme: &'a str, authority: &'a str, path: &'a str },
    /// Only hostname `example.com:8080`, only useful for `CONNECT` method
    Authority(&'a str),
    /// Asterisk `*`
    Asterisk,
}


// Authority can't contain `/` or `?` or `#`, user and password
// is not supported in HTTP either (so no `@` but otherwise we accept
// anything as rules are quite complex)
fn authority_end_char(&x: &u8) -> bool {
    x == b'/' || x == b'?' || x == b'#' || x == b'@'
}

fn absolute<'a>(s: &'a str, scheme: &'a str) -> RequestTarget<'a> {
    let start = scheme.len() + "://".len();
    let auth_end = s[start..].as_bytes().iter()
        .position(authority_end_char)
        .unwrap_or(s.len() - start);
    RequestTarget::Absolute {
        scheme: scheme,
        authority: &s[start..start+auth_end],
        path: &s[start+auth_end..],
    }
}

impl<'a> RequestTarget<'a> {
    pub fn parse(s: &'a str) -> Option<RequestTarget<'a>> {
        use self::RequestTarget::*;

        if s.len() == 0 {
            return None;
        }
        if s.starts_with("/") {
            return Some(Origin(s));
        }
        if s.starts_with("http://") {
            return Some(absolute(s, "http"));
        }
        if s.starts_with("https://") {
            return Some(absolute(s, "https"));
        }
        if s == "*" {
            return Some(Asterisk);
        }
        if s.as_bytes().iter().position(authority_end_char).is_none() {
            return Some(Authority(s));
        }

        return None;
    }

    /// Path with query, always starting with a slash
    pub fn path_and_query(&self) -> &'a str {
        use self::RequestTarget::*;
        match *self {
            Origin(path) => path,
            Absolute { path, .. } if path.starts_with("/") => path,
            Absolute { .. } | Authority(_) | Asterisk => "/",
        }
    }

    /// Authority of the absolute form
    pub fn authority(&self) -> Option<&'a str> {
        match *self {
            RequestTarget::Absolute { authority, .. } => Some(authority),
            _ => None,
        }
    }
}

/// Splits path and query string at the first question mark
///
/// Fragment (which clients shouldn't send anyway) is dropped.
pub fn split_query(target: &str) -> (&str, &str) {
    let target = match target.find('#') {
        Some(idx) => &target[..idx],
        None => target,
    };
    match target.find('?') {
        Some(idx) => (&target[..idx], &target[idx+1..]),
        None => (target, ""),
    }
}
