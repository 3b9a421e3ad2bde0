//! Incremental request parser
//!
//! The parser is fed with chunks of arbitrary size and reports whether the
//! request is complete. Unlike the line-oriented parser, end of input
//! inside the body is not an error: whatever has been received so far is
//! the body.
use std::io::{self, Read};
use std::mem;

use httparse;

use enums::Version;
use headers;
use super::{Config, Error};
use super::request::{ParsedHeaders, ParsedRequest, RawRequestLine};
use super::request::content_length;


/// Number of headers to allocate on a stack
const MIN_HEADERS: usize = 16;
/// A hard limit on the number of headers
const MAX_HEADERS: usize = 1024;


/// Result of feeding a chunk into the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NeedMore,
    Complete,
}

#[derive(Debug)]
enum State {
    AwaitingHeaders,
    ReadingBody { head: Head, remaining: u64 },
    Complete(Head),
    Void,
}

#[derive(Debug)]
struct Head {
    line: RawRequestLine,
    headers: ParsedHeaders,
}

/// Pull-based request parser
///
/// Call `feed()` with every chunk read from the input until it returns
/// `Progress::Complete` or input is exhausted, then call `finish()`.
#[derive(Debug)]
pub struct IncrementalParser {
    state: State,
    buf: Vec<u8>,
    body: Vec<u8>,
    max_request_length: u64,
}

fn convert(raw: &httparse::Request) -> Result<Head, Error> {
    // all of these are filled in when parser returns `Complete`
    let method = raw.method.ok_or(Error::MalformedRequestLine)?;
    let path = raw.path.ok_or(Error::MalformedRequestLine)?;
    let version = raw.version.and_then(Version::from_httparse)
        .ok_or(Error::MalformedRequestLine)?;
    let mut headers = ParsedHeaders::new();
    for header in raw.headers.iter() {
        headers.push(header.name,
            String::from_utf8_lossy(header.value).into_owned());
    }
    Ok(Head {
        line: RawRequestLine {
            method: method.to_ascii_uppercase(),
            target: path.to_string(),
            version: version.to_string(),
        },
        headers: headers,
    })
}

fn parse_head(buffer: &[u8]) -> Result<Option<(Head, usize)>, Error> {
    let mut vec;
    let mut headers = [httparse::EMPTY_HEADER; MIN_HEADERS];
    let mut raw = httparse::Request::new(&mut headers);
    let mut result = raw.parse(buffer);
    if matches!(result, Err(httparse::Error::TooManyHeaders)) {
        vec = vec![httparse::EMPTY_HEADER; MAX_HEADERS];
        raw = httparse::Request::new(&mut vec);
        result = raw.parse(buffer);
    }
    // method, target and version are only parsed on the first line
    let status = result.map_err(|e| match e {
        httparse::Error::Token | httparse::Error::Version => {
            Error::MalformedRequestLine
        }
        e => Error::ParseError(e),
    })?;
    match status {
        httparse::Status::Complete(bytes) => {
            Ok(Some((convert(&raw)?, bytes)))
        }
        httparse::Status::Partial => Ok(None),
    }
}

impl IncrementalParser {
    pub fn new(cfg: &Config) -> IncrementalParser {
        IncrementalParser {
            state: State::AwaitingHeaders,
            buf: Vec::new(),
            body: Vec::new(),
            max_request_length: cfg.max_request_length,
        }
    }

    /// Feeds next chunk of input
    ///
    /// Bytes past the end of the request are ignored, there is no
    /// pipelining in single-shot mode. Once an error is returned, every
    /// next call returns `Error::ParserFailed`.
    pub fn feed(&mut self, data: &[u8]) -> Result<Progress, Error> {
        match mem::replace(&mut self.state, State::Void) {
            State::AwaitingHeaders => {
                self.buf.extend_from_slice(data);
                match parse_head(&self.buf)? {
                    Some((head, bytes)) => {
                        let rest = self.buf.split_off(bytes);
                        self.buf = Vec::new();
                        self.headers_received(head, &rest)
                    }
                    None => {
                        self.state = State::AwaitingHeaders;
                        Ok(Progress::NeedMore)
                    }
                }
            }
            State::ReadingBody { head, remaining } => {
                Ok(self.body_received(head, remaining, data))
            }
            state @ State::Complete(_) => {
                self.state = state;
                Ok(Progress::Complete)
            }
            State::Void => Err(Error::ParserFailed),
        }
    }

    fn headers_received(&mut self, head: Head, rest: &[u8])
        -> Result<Progress, Error>
    {
        debug!("Request line {} {} {}",
            head.line.method, head.line.target, head.line.version);
        if head.headers.iter().any(|&(ref n, _)| {
            headers::is_transfer_encoding(n)
        }) {
            return Err(Error::UnsupportedBody);
        }
        match content_length(&head.headers)? {
            Some(len) if len > self.max_request_length => {
                Err(Error::RequestTooLong)
            }
            Some(len) if len > 0 => {
                Ok(self.body_received(head, len, rest))
            }
            _ => {
                self.state = State::Complete(head);
                Ok(Progress::Complete)
            }
        }
    }

    fn body_received(&mut self, head: Head, remaining: u64, data: &[u8])
        -> Progress
    {
        let bytes = if (data.len() as u64) < remaining {
            data.len()
        } else {
            remaining as usize
        };
        self.body.extend_from_slice(&data[..bytes]);
        let remaining = remaining - bytes as u64;
        if remaining == 0 {
            if bytes < data.len() {
                debug!("Ignoring {} bytes after request body",
                    data.len() - bytes);
            }
            self.state = State::Complete(head);
            Progress::Complete
        } else {
            self.state = State::ReadingBody {
                head: head,
                remaining: remaining,
            };
            Progress::NeedMore
        }
    }

    /// Returns true when the whole request has been received
    pub fn is_complete(&self) -> bool {
        matches!(self.state, State::Complete(_))
    }

    /// Returns the request, must be called after complete or end of input
    pub fn finish(self) -> Result<ParsedRequest, Error> {
        let head = match self.state {
            State::Complete(head) => head,
            State::ReadingBody { head, remaining } => {
                warn!("Input ended {} bytes before end of request body, \
                    using {} bytes received", remaining, self.body.len());
                head
            }
            State::AwaitingHeaders | State::Void => {
                return Err(Error::PrematureEndOfInput);
            }
        };
        Ok(ParsedRequest {
            line: head.line,
            headers: head.headers,
            body: self.body,
        })
    }
}

/// Parses the whole request by feeding chunks read from input
pub fn read_request<R: Read>(input: &mut R, cfg: &Config)
    -> Result<ParsedRequest, Error>
{
    let mut parser = IncrementalParser::new(cfg);
    let mut chunk = vec![0u8; cfg.read_chunk_size];
    loop {
        let bytes = match input.read(&mut chunk) {
            Ok(bytes) => bytes,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if bytes == 0 {
            trace!("End of input");
            break;
        }
        if parser.feed(&chunk[..bytes])? == Progress::Complete {
            break;
        }
    }
    parser.finish()
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use server::{Config, Error};
    use super::{IncrementalParser, Progress, read_request};

    fn parse(data: &[u8]) -> Result<super::ParsedRequest, Error> {
        read_request(&mut Cursor::new(data), &Config::new())
    }

    #[test]
    fn simple_get() {
        let req = parse(b"GET /params?foo=bar&baz=bang HTTP/1.1\r\n\
                          Server-Name: localhost\r\n\r\n").unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/params");
        assert_eq!(req.query(), "foo=bar&baz=bang");
        assert_eq!(req.version(), "HTTP/1.1");
        assert_eq!(req.body(), b"");
    }

    #[test]
    fn byte_by_byte() {
        let data = b"POST / HTTP/1.1\r\nContent-Length: 7\r\n\r\nfoo=bar";
        let mut parser = IncrementalParser::new(&Config::new());
        for (idx, byte) in data.iter().enumerate() {
            let progress = parser.feed(&[*byte]).unwrap();
            if idx + 1 < data.len() {
                assert_eq!(progress, Progress::NeedMore);
            } else {
                assert_eq!(progress, Progress::Complete);
            }
        }
        assert!(parser.is_complete());
        let req = parser.finish().unwrap();
        assert_eq!(req.body(), b"foo=bar");
    }

    #[test]
    fn small_chunks() {
        let cfg = Config::new().read_chunk_size(3).done();
        let data = b"PUT /x HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello";
        let req = read_request(&mut Cursor::new(&data[..]), &cfg).unwrap();
        assert_eq!(req.version(), "HTTP/1.0");
        assert_eq!(req.body(), b"hello");
    }

    #[test]
    fn early_end_of_body() {
        let req = parse(b"POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\nabc")
            .unwrap();
        assert_eq!(req.body(), b"abc");
    }

    #[test]
    fn trailing_bytes_ignored() {
        let req = parse(b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\n\
                          abcGET / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(req.body(), b"abc");
    }

    #[test]
    fn no_content_length() {
        let req = parse(b"POST / HTTP/1.1\r\n\r\nabc").unwrap();
        assert_eq!(req.body(), b"");
    }

    #[test]
    fn many_headers() {
        let mut data = b"GET / HTTP/1.1\r\n".to_vec();
        for i in 0..40 {
            data.extend(format!("X-H{}: {}\r\n", i, i).as_bytes());
        }
        data.extend(b"\r\n");
        let req = parse(&data).unwrap();
        assert_eq!(req.headers().len(), 40);
    }

    #[test]
    fn incomplete_headers() {
        assert_matches!(parse(b"GET / HTTP/1.1\r\nHost: x\r\n"),
                        Err(Error::PrematureEndOfInput));
        assert_matches!(parse(b""), Err(Error::PrematureEndOfInput));
    }

    #[test]
    fn bad_request_line() {
        assert_matches!(parse(b"GET\r\n\r\n"),
                        Err(Error::MalformedRequestLine));
        assert_matches!(parse(b"GET / HTTP/2.0\r\n\r\n"),
                        Err(Error::MalformedRequestLine));
    }

    #[test]
    fn bad_header() {
        assert_matches!(parse(b"GET / HTTP/1.1\r\nX Y: 1\r\n\r\n"),
                        Err(Error::ParseError(_)));
    }

    #[test]
    fn feed_after_error() {
        let mut parser = IncrementalParser::new(&Config::new());
        assert_matches!(parser.feed(b"GET\r\n\r\n"),
                        Err(Error::MalformedRequestLine));
        assert_matches!(parser.feed(b"GET / HTTP/1.1\r\n\r\n"),
                        Err(Error::ParserFailed));
        assert!(!parser.is_complete());
        assert_matches!(parser.finish(), Err(Error::PrematureEndOfInput));
    }

    #[test]
    fn chunked_is_rejected() {
        assert_matches!(
            parse(b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n"),
            Err(Error::UnsupportedBody));
    }

    #[test]
    fn too_long() {
        let cfg = Config::new().max_request_length(2).done();
        let data = b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc";
        assert_matches!(read_request(&mut Cursor::new(&data[..]), &cfg),
                        Err(Error::RequestTooLong));
    }
}
