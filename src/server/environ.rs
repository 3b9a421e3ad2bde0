//! Environment handed to the handler
//!
//! Built once from the parsed request by a pure transformation and never
//! re-derived afterwards.
use std::collections::BTreeMap;
use std::collections::btree_map;

use url::Url;

use headers::{self, canonical_key};
use super::{Error};
use super::input::{Input, Errors};
use super::request::ParsedRequest;
use super::request_target::{RequestTarget, split_query};


/// Value of `SERVER_SOFTWARE`
pub const SERVER_SOFTWARE: &'static str =
    concat!("singleshot/", env!("CARGO_PKG_VERSION"));

/// Canonical mapping describing the request and the execution model
///
/// String-valued keys follow CGI conventions (`REQUEST_METHOD`,
/// `PATH_INFO`, `HTTP_*`, ...), non-string values have dedicated
/// accessors.
#[derive(Debug)]
pub struct Environment {
    vars: BTreeMap<String, String>,
    url_scheme: String,
    input: Input,
    errors: Errors,
    multithread: bool,
    multiprocess: bool,
    run_once: bool,
}

/// Iterator over string-valued keys of the environment
pub struct Vars<'a>(btree_map::Iter<'a, String, String>);

// These would move part of the host into the path or user info
fn authority_delimiter(c: char) -> bool {
    matches!(c, '/' | '?' | '#' | '@' | '\\')
}

/// Url with the scheme and authority of the request and an empty path
///
/// Only `Server-Name` may be a full base url, authority taken from the
/// request target or `Host` must be a bare `host[:port]`.
fn base_url(scheme: &str, host: &str, full_url_allowed: bool)
    -> Result<Url, Error>
{
    let url = if full_url_allowed && host.contains("://") {
        let url = Url::parse(host)?;
        if url.cannot_be_a_base() || !url.username().is_empty()
            || url.password().is_some()
        {
            return Err(Error::HostInvalid);
        }
        url
    } else {
        if host.contains(authority_delimiter) {
            return Err(Error::HostInvalid);
        }
        Url::parse(&format!("{}://{}/", scheme, host))?
    };
    if url.host_str().map(|h| h.is_empty()).unwrap_or(true) {
        return Err(Error::HostInvalid);
    }
    Ok(url)
}

/// Replaces path and query of the base url with the request's ones
///
/// The target never takes part in parsing the authority, and dot
/// segments of the path are resolved.
fn resolve_url(mut url: Url, path_and_query: &str) -> Url {
    let (path, query) = split_query(path_and_query);
    url.set_path(path);
    url.set_query(if query.is_empty() { None } else { Some(query) });
    url.set_fragment(None);
    url
}

impl Environment {
    /// Builds the environment for the parsed request
    ///
    /// Headers are canonicalized (`Content-Type` becomes `CONTENT_TYPE`,
    /// others get `HTTP_` prefix), the last of repeated headers wins.
    /// Host is taken from `Server-Name`, then from an absolute request
    /// target, then from `Host`.
    pub fn build(request: ParsedRequest, errors: Errors)
        -> Result<Environment, Error>
    {
        let ParsedRequest { line, headers: raw_headers, body } = request;
        let mut vars = BTreeMap::new();
        for &(ref name, ref value) in &raw_headers {
            vars.insert(canonical_key(name), value.clone());
        }

        let scheme = if vars.get("HTTP_HTTPS")
            .map(|v| headers::is_affirmative(v)).unwrap_or(false)
        {
            "https"
        } else {
            "http"
        };
        let target = line.request_target()
            .ok_or(Error::MalformedRequestLine)?;
        let base = match vars.get("SERVER_NAME") {
            Some(name) => base_url(scheme, name, true)?,
            None => {
                let host = target.authority()
                    .or_else(|| vars.get("HTTP_HOST").map(|x| &x[..]))
                    .ok_or(Error::HostMissing)?;
                base_url(scheme, host, false)?
            }
        };
        let url = resolve_url(base, target.path_and_query());
        let path_info = match target {
            RequestTarget::Asterisk => "*",
            _ => url.path(),
        };

        vars.insert("REQUEST_METHOD".into(), line.method.clone());
        vars.insert("SCRIPT_NAME".into(), String::new());
        vars.insert("PATH_INFO".into(), path_info.to_string());
        vars.insert("QUERY_STRING".into(),
            url.query().unwrap_or("").to_string());
        vars.insert("SERVER_NAME".into(),
            url.host_str().unwrap_or("").to_string());
        vars.insert("SERVER_PORT".into(),
            url.port_or_known_default().map(|p| p.to_string())
                .unwrap_or_else(String::new));
        vars.insert("SERVER_PROTOCOL".into(), line.version.clone());
        vars.insert("SERVER_SOFTWARE".into(), SERVER_SOFTWARE.to_string());

        Ok(Environment {
            vars: vars,
            url_scheme: url.scheme().to_string(),
            input: Input::new(body),
            errors: errors,
            multithread: false,
            multiprocess: false,
            run_once: true,
        })
    }

    /// String value of the key
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|x| &x[..])
    }
    /// Value of the request header by its wire name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.var(&canonical_key(name))
    }
    /// All string-valued keys in sorted order
    pub fn vars(&self) -> Vars {
        Vars(self.vars.iter())
    }
    pub fn request_method(&self) -> &str {
        self.required("REQUEST_METHOD")
    }
    /// Always empty, the handler is mounted at the root
    pub fn script_name(&self) -> &str {
        self.required("SCRIPT_NAME")
    }
    pub fn path_info(&self) -> &str {
        self.required("PATH_INFO")
    }
    pub fn query_string(&self) -> &str {
        self.required("QUERY_STRING")
    }
    pub fn server_name(&self) -> &str {
        self.required("SERVER_NAME")
    }
    pub fn server_port(&self) -> &str {
        self.required("SERVER_PORT")
    }
    pub fn server_protocol(&self) -> &str {
        self.required("SERVER_PROTOCOL")
    }
    /// Either `http` or `https`
    pub fn url_scheme(&self) -> &str {
        &self.url_scheme
    }
    /// Request body
    pub fn input(&mut self) -> &mut Input {
        &mut self.input
    }
    /// Error stream
    pub fn errors(&mut self) -> &mut Errors {
        &mut self.errors
    }
    /// Always false
    pub fn multithread(&self) -> bool {
        self.multithread
    }
    /// Always false
    pub fn multiprocess(&self) -> bool {
        self.multiprocess
    }
    /// Always true: the process handles exactly one request
    pub fn run_once(&self) -> bool {
        self.run_once
    }

    fn required(&self, key: &str) -> &str {
        self.var(key).unwrap_or("")
    }
}

impl<'a> Iterator for Vars<'a> {
    type Item = (&'a str, &'a str);
    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        self.0.next().map(|(k, v)| (&k[..], &v[..]))
    }
}
