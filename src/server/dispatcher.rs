use std::error::Error as StdError;
use std::fmt;
use std::iter;

use enums::Status;
use super::environ::Environment;
use super::Error;


/// Error returned by a handler
pub type HandlerError = Box<dyn StdError + Send + Sync>;

/// The application called for the request
///
/// It's called exactly once per process. Handler that wants a graceful
/// error page must build it itself, any `Err` aborts the transaction
/// without a response.
pub trait Handler {
    fn call(self, env: Environment) -> Result<Response, HandlerError>;
}

/// Status as returned by the handler
///
/// Only validated when the status line is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    Code(u16),
    Text(String),
}

/// Lazy sequence of body chunks
pub struct Body {
    chunks: Box<dyn Iterator<Item=Vec<u8>>>,
}

/// Result of the handler: status, headers and body
///
/// A header value may contain several lines separated by `\n`, each of
/// them is written as a separate header with the same name.
#[derive(Debug)]
pub struct Response {
    pub status: ResponseStatus,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl<F> Handler for F
    where F: FnOnce(Environment) -> Result<Response, HandlerError>,
{
    fn call(self, env: Environment) -> Result<Response, HandlerError> {
        (self)(env)
    }
}

impl ResponseStatus {
    /// Numeric value of the status
    pub fn code(&self) -> Result<u16, Error> {
        let code = match *self {
            ResponseStatus::Code(code) => code,
            ResponseStatus::Text(ref text) => {
                text.trim().parse::<u16>()
                .map_err(|_| Error::InvalidStatus(text.clone()))?
            }
        };
        if code < 100 || code > 999 {
            return Err(Error::InvalidStatus(code.to_string()));
        }
        Ok(code)
    }
}

impl From<u16> for ResponseStatus {
    fn from(code: u16) -> ResponseStatus {
        ResponseStatus::Code(code)
    }
}

impl From<Status> for ResponseStatus {
    fn from(status: Status) -> ResponseStatus {
        ResponseStatus::Code(status.code())
    }
}

impl<'a> From<&'a str> for ResponseStatus {
    fn from(text: &'a str) -> ResponseStatus {
        ResponseStatus::Text(text.to_string())
    }
}

impl From<String> for ResponseStatus {
    fn from(text: String) -> ResponseStatus {
        ResponseStatus::Text(text)
    }
}

impl Body {
    pub fn empty() -> Body {
        Body { chunks: Box::new(iter::empty()) }
    }
    /// Body produced chunk by chunk
    pub fn chunks<I>(chunks: I) -> Body
        where I: IntoIterator<Item=Vec<u8>>,
              I::IntoIter: 'static,
    {
        Body { chunks: Box::new(chunks.into_iter()) }
    }
}

impl Iterator for Body {
    type Item = Vec<u8>;
    fn next(&mut self) -> Option<Vec<u8>> {
        self.chunks.next()
    }
}

impl From<Vec<u8>> for Body {
    fn from(data: Vec<u8>) -> Body {
        Body::chunks(iter::once(data))
    }
}

impl From<String> for Body {
    fn from(data: String) -> Body {
        Body::from(data.into_bytes())
    }
}

impl From<&'static str> for Body {
    fn from(data: &'static str) -> Body {
        Body::from(data.as_bytes().to_vec())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Body")
    }
}

impl Response {
    /// Response with no headers and an empty body
    pub fn new<S: Into<ResponseStatus>>(status: S) -> Response {
        Response {
            status: status.into(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }
    /// Appends a header, headers are written in the order of addition
    pub fn header<N, V>(mut self, name: N, value: V) -> Response
        where N: Into<String>, V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
        self
    }
    pub fn body<B: Into<Body>>(mut self, body: B) -> Response {
        self.body = body.into();
        self
    }
}

/// Calls the handler for the environment
///
/// The result is passed to the writer as is.
pub fn dispatch<H: Handler>(handler: H, env: Environment)
    -> Result<Response, Error>
{
    trace!("Dispatching {} {}", env.request_method(), env.path_info());
    handler.call(env).map_err(Error::Handler)
}
