//! Line-oriented request parser
//!
//! Reads the request line and the header block line by line, then reads
//! exactly `Content-Length` bytes of body. Any framing problem is fatal.
use std::io::{BufRead, Read};

use super::{Config, Error};
use super::config::BodyPolicy;
use super::request::{ParsedHeaders, ParsedRequest, RawRequestLine};
use super::request::content_length;


/// Version assumed when request line has only method and target
const DEFAULT_VERSION: &'static str = "HTTP/1.0";


/// Reads a line up to LF, strips CRLF (or bare LF)
///
/// Returns `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn parse_request_line(line: &str) -> Result<RawRequestLine, Error> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(target), version) => Ok(RawRequestLine {
            method: method.to_ascii_uppercase(),
            target: target.to_string(),
            version: version.unwrap_or(DEFAULT_VERSION).to_string(),
        }),
        _ => Err(Error::MalformedRequestLine),
    }
}

fn parse_header_line(line: &str) -> Result<(&str, &str), Error> {
    match line.find(": ") {
        Some(0) | None => Err(Error::MalformedHeaderBlock),
        Some(idx) => Ok((&line[..idx], &line[idx+2..])),
    }
}

fn read_headers<R: BufRead>(input: &mut R) -> Result<ParsedHeaders, Error> {
    let mut headers = ParsedHeaders::new();
    // end of input is as good as an empty line here
    while let Some(line) = read_line(input)? {
        if line.is_empty() {
            break;
        }
        let (name, value) = parse_header_line(&line)?;
        headers.push(name, value);
    }
    Ok(headers)
}

/// Number of body bytes to read for the request
pub fn body_length(line: &RawRequestLine, headers: &ParsedHeaders,
    policy: BodyPolicy)
    -> Result<u64, Error>
{
    let method = line.method();
    let skip = match policy {
        BodyPolicy::Declared => method.is_bodyless(),
        BodyPolicy::SkipPostPut => method.is_post_or_put(),
    };
    if skip {
        trace!("Body of {:?} request is not read", method);
        return Ok(0);
    }
    Ok(content_length(headers)?.unwrap_or(0))
}

fn read_body<R: Read>(input: &mut R, length: u64) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    input.take(length).read_to_end(&mut body)?;
    if (body.len() as u64) < length {
        return Err(Error::TruncatedBody(length, body.len() as u64));
    }
    Ok(body)
}

/// Parses the whole request from a buffered input
pub fn read_request<R: BufRead>(input: &mut R, cfg: &Config)
    -> Result<ParsedRequest, Error>
{
    let line = match read_line(input)? {
        Some(line) => parse_request_line(&line)?,
        None => return Err(Error::MalformedRequestLine),
    };
    debug!("Request line {} {} {}", line.method, line.target, line.version);
    let headers = read_headers(input)?;
    let length = body_length(&line, &headers, cfg.body_policy)?;
    if length > cfg.max_request_length {
        return Err(Error::RequestTooLong);
    }
    let body = read_body(input, length)?;
    Ok(ParsedRequest {
        line: line,
        headers: headers,
        body: body,
    })
}
