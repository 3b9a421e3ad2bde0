use std::io::Write;

use enums::{Version, reason_phrase};
use headers;
use super::{Error, HeaderError};
use super::dispatcher::Response;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageState {
    /// Nothing has been sent.
    Start,
    /// Status line is already written.
    Headers,
    /// Blank line is written, only body may follow.
    Body,
}

/// Serializes the response onto the output stream
///
/// Everything is written directly to the stream in order: status line,
/// headers, blank line and body chunks. Nothing is added (no
/// `Content-Length`, no chunked encoding, no `Date`) and the stream is
/// neither flushed nor closed here.
pub struct ResponseWriter<'a, W: Write + 'a> {
    state: MessageState,
    version: Version,
    out: &'a mut W,
}

impl<'a, W: Write + 'a> ResponseWriter<'a, W> {
    pub fn new(out: &'a mut W) -> ResponseWriter<'a, W> {
        ResponseWriter {
            state: MessageState::Start,
            version: Version::Http11,
            out: out,
        }
    }

    /// Write status line
    ///
    /// Reason phrase is looked up in the status table, unknown codes get
    /// an empty one.
    ///
    /// # Panics
    ///
    /// When status line is already written.
    pub fn status(&mut self, code: u16) -> Result<(), Error> {
        assert_eq!(self.state, MessageState::Start,
            "status line is written twice");
        write!(self.out, "{} {} {}\r\n",
            self.version, code, reason_phrase(code))?;
        self.state = MessageState::Headers;
        Ok(())
    }

    /// Write a header, one line per `\n`-separated value segment
    ///
    /// Trailing empty segments are dropped, so an empty value produces no
    /// lines at all.
    ///
    /// # Panics
    ///
    /// When status line is not written yet or headers are already done.
    pub fn add_header(&mut self, name: &str, value: &str)
        -> Result<(), Error>
    {
        assert_eq!(self.state, MessageState::Headers,
            "header is written in the wrong state");
        if !headers::is_valid_name(name) {
            return Err(HeaderError::InvalidHeaderName(name.into()).into());
        }
        let mut segments: Vec<&str> = value.split('\n').collect();
        while segments.last() == Some(&"") {
            segments.pop();
        }
        if segments.iter().any(|s| s.contains('\r')) {
            return Err(HeaderError::InvalidHeaderValue(name.into()).into());
        }
        for segment in segments {
            write!(self.out, "{}: {}\r\n", name, segment)?;
        }
        Ok(())
    }

    /// Closes the HTTP header
    pub fn done_headers(&mut self) -> Result<(), Error> {
        assert_eq!(self.state, MessageState::Headers,
            "headers are finished in the wrong state");
        self.out.write_all(b"\r\n")?;
        self.state = MessageState::Body;
        Ok(())
    }

    /// Write a chunk of the body verbatim
    pub fn write_body(&mut self, data: &[u8]) -> Result<(), Error> {
        assert_eq!(self.state, MessageState::Body,
            "body is written before headers are done");
        self.out.write_all(data)?;
        Ok(())
    }
}

/// Writes whole response returned by the handler
///
/// The body is consumed chunk by chunk, it's never buffered as a whole.
pub fn write_response<W: Write>(out: &mut W, response: Response)
    -> Result<(), Error>
{
    let Response { status, headers, body } = response;
    let code = status.code()?;
    debug!("Response status {}", code);
    let mut writer = ResponseWriter::new(out);
    writer.status(code)?;
    for &(ref name, ref value) in &headers {
        writer.add_header(name, value)?;
    }
    writer.done_headers()?;
    for chunk in body {
        writer.write_body(&chunk)?;
    }
    Ok(())
}
