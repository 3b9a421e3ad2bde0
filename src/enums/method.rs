use std::convert::From;


/// Enum representing HTTP request methods.
///
/// Only used to decide whether a request may carry a body, the environment
/// always receives the method token as it was sent.
#[derive(Debug, PartialEq)]
pub enum Method {
    Options,
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Trace,
    Connect,
    Other(String),
}

impl<'a> From<&'a str> for Method
{

    fn from(s: &'a str) -> Method {
        match s {
            "OPTIONS"   => Method::Options,
            "GET"       => Method::Get,
            "HEAD"      => Method::Head,
            "POST"      => Method::Post,
            "PUT"       => Method::Put,
            "PATCH"     => Method::Patch,
            "DELETE"    => Method::Delete,
            "TRACE"     => Method::Trace,
            "CONNECT"   => Method::Connect,
            s => Method::Other(s.to_string()),
        }
    }
}

impl Method {
    /// Methods whose request body is never read, even with `Content-Length`
    pub fn is_bodyless(&self) -> bool {
        matches!(*self,
            Method::Get | Method::Head | Method::Trace | Method::Connect)
    }
    /// `POST` or `PUT`
    pub fn is_post_or_put(&self) -> bool {
        matches!(*self, Method::Post | Method::Put)
    }
}
