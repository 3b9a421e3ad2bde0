use std::io;

use httparse;
use url;

use server::dispatcher::HandlerError;


quick_error! {
    /// Error writing response headers
    #[derive(Debug)]
    pub enum HeaderError {
        InvalidHeaderName(name: String) {
            description("header name contains invalid characters")
            display("header name {:?} contains invalid characters", name)
        }
        InvalidHeaderValue(name: String) {
            description("header value contains invalid characters")
            display("value of header {:?} contains invalid characters",
                    name)
        }
    }
}

quick_error! {
    /// Single-shot transaction error
    ///
    /// None of these is recovered from, every error is propagated to the
    /// caller of `SingleShot::serve` after the output is closed.
    #[derive(Debug)]
    pub enum Error {
        /// Stream IO error
        Io(err: io::Error) {
            description("I/O error")
            display("I/O error: {}", err)
            from()
        }
        /// Error parsing http headers
        ParseError(err: httparse::Error) {
            description("parse error")
            display("parse error: {:?}", err)
            from()
        }
        /// Request line has less than two tokens (or input is empty)
        MalformedRequestLine {
            description("malformed request line")
        }
        /// Header line could not be split into name and value
        MalformedHeaderBlock {
            description("malformed header block")
        }
        /// Content length header is invalid (non-integer, or > 64bit)
        ContentLengthInvalid {
            description("invalid content-length header")
        }
        /// Duplicate content-length header, this is prohibited due to security
        DuplicateContentLength {
            description("duplicate content length header")
        }
        /// Transfer-Encoding bodies are not supported
        UnsupportedBody {
            description("this kind of request body is not supported")
        }
        /// Request body is larger than `Config::max_request_length`
        RequestTooLong {
            description("request body is too big")
        }
        /// Incremental parser is fed again after it returned an error
        ParserFailed {
            description("parser is fed after an error")
        }
        /// Input ended before request headers were complete
        PrematureEndOfInput {
            description("premature end of input")
        }
        /// Input ended before declared `Content-Length` bytes were read
        TruncatedBody(expected: u64, received: u64) {
            description("request body is truncated")
            display("request body is truncated: expected {} bytes, \
                     received {}", expected, received)
        }
        /// Neither `Server-Name` nor `Host` is known
        HostMissing {
            description("no host in request")
        }
        /// Host carries a path, query, fragment or user info
        HostInvalid {
            description("invalid host header")
        }
        /// Url made of scheme, host and request target is invalid
        UnresolvableHost(err: url::ParseError) {
            description("can't build request url")
            display("can't build request url: {}", err)
            from()
        }
        /// Error returned by the handler
        Handler(err: HandlerError) {
            description("handler failed")
            display("handler failed: {}", err)
        }
        /// Status returned by the handler is not a three-digit code
        InvalidStatus(status: String) {
            description("invalid response status")
            display("invalid response status {:?}", status)
        }
        /// Response header can't be written
        Header(err: HeaderError) {
            description("invalid response header")
            display("invalid response header: {}", err)
            from()
        }
    }
}
