use std::slice;

use headers;
use enums::Method;
use super::request_target::{RequestTarget, split_query};


/// Header list exactly as it was received
///
/// Order and duplicates are preserved, names are not canonicalized yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeaders {
    entries: Vec<(String, String)>,
}

/// Request line of the transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequestLine {
    /// Uppercase method token
    pub method: String,
    /// Path with optional query
    pub target: String,
    /// Protocol version token, like `HTTP/1.1`
    pub version: String,
}

/// Everything a request parser extracts from the input stream
#[derive(Debug)]
pub struct ParsedRequest {
    pub line: RawRequestLine,
    pub headers: ParsedHeaders,
    pub body: Vec<u8>,
}

impl ParsedHeaders {
    pub fn new() -> ParsedHeaders {
        ParsedHeaders { entries: Vec::new() }
    }
    pub fn push<N, V>(&mut self, name: N, value: V)
        where N: Into<String>, V: Into<String>
    {
        self.entries.push((name.into(), value.into()));
    }
    /// Last value of the header, name is case-insensitive
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().rev()
            .find(|&&(ref n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, ref v)| &v[..])
    }
    pub fn iter(&self) -> slice::Iter<(String, String)> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParsedHeaders {
    type Item = &'a (String, String);
    type IntoIter = slice::Iter<'a, (String, String)>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl RawRequestLine {
    pub fn method(&self) -> Method {
        Method::from(&self.method[..])
    }
    pub fn request_target(&self) -> Option<RequestTarget> {
        RequestTarget::parse(&self.target)
    }
    /// Path without the query
    pub fn path(&self) -> &str {
        split_query(self.path_and_query()).0
    }
    /// Query string, empty if there is no query
    pub fn query(&self) -> &str {
        split_query(self.path_and_query()).1
    }
    fn path_and_query(&self) -> &str {
        match self.request_target() {
            Some(target) => target.path_and_query(),
            None => &self.target,
        }
    }
}

impl ParsedRequest {
    pub fn method(&self) -> &str {
        &self.line.method
    }
    pub fn path(&self) -> &str {
        self.line.path()
    }
    pub fn query(&self) -> &str {
        self.line.query()
    }
    pub fn version(&self) -> &str {
        &self.line.version
    }
    pub fn headers(&self) -> &ParsedHeaders {
        &self.headers
    }
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Scans headers for a declared body length
///
/// Returns `None` when there is no `Content-Length` at all.
pub fn content_length(headers: &ParsedHeaders) -> Result<Option<u64>, ::Error>
{
    let mut result = None;
    for &(ref name, ref value) in headers {
        if headers::is_content_length(name) {
            if result.is_some() {
                return Err(::Error::DuplicateContentLength);
            }
            let len = value.trim().parse()
                .map_err(|_| ::Error::ContentLengthInvalid)?;
            result = Some(len);
        }
    }
    Ok(result)
}
