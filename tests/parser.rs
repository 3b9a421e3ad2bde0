extern crate singleshot;
#[macro_use] extern crate matches;

use singleshot::Error;
use singleshot::server::{read_request, Config, ParseStrategy, BodyPolicy};
use singleshot::server::{IncrementalParser, Progress};


fn line_oriented() -> Config {
    Config::new().done()
}

fn incremental() -> Config {
    Config::new().strategy(ParseStrategy::Incremental).done()
}

#[test]
fn parse_ok() {
    let buf = "\
        GET /path?x=1 HTTP/1.1\r\n\
        Host: example.com\r\n\
        \r\n";
    for cfg in vec![line_oriented(), incremental()] {
        let req = read_request(buf.as_bytes(), &cfg).unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/path");
        assert_eq!(req.query(), "x=1");
        assert_eq!(req.version(), "HTTP/1.1");
        assert_eq!(req.headers().get("host"), Some("example.com"));
        assert_eq!(req.body(), b"");
    }
}

#[test]
fn parse_body() {
    let buf = "\
        POST /form HTTP/1.0\r\n\
        Host: example.com\r\n\
        Content-Length: 7\r\n\
        \r\n\
        foo=barTRAILING";
    for cfg in vec![line_oriented(), incremental()] {
        let req = read_request(buf.as_bytes(), &cfg).unwrap();
        assert_eq!(req.version(), "HTTP/1.0");
        assert_eq!(req.body(), b"foo=bar");
    }
}

#[test]
fn skip_post_put() {
    let cfg = Config::new().body_policy(BodyPolicy::SkipPostPut).done();
    let req = read_request(&b"PUT / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc"[..],
                           &cfg).unwrap();
    assert_eq!(req.body(), b"");
    let req = read_request(&b"PATCH / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc"[..],
                           &cfg).unwrap();
    assert_eq!(req.body(), b"abc");
}

#[test]
fn line_oriented_defaults_version() {
    let req = read_request(&b"get /\r\n\r\n"[..], &line_oriented()).unwrap();
    assert_eq!(req.method(), "GET");
    assert_eq!(req.version(), "HTTP/1.0");
}

#[test]
fn parse_partial() {
    let buf = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let mut parser = IncrementalParser::new(&incremental());
    assert_matches!(parser.feed(&buf[..buf.len()-4]), Ok(Progress::NeedMore));
    assert!(!parser.is_complete());
    assert_matches!(parser.feed(&buf[buf.len()-4..]), Ok(Progress::Complete));
    let req = parser.finish().unwrap();
    assert_eq!(req.path(), "/");
}

#[test]
fn premature_end() {
    assert_matches!(
        read_request(&b"GET / HTTP/1.1\r\nHost: x\r\n"[..], &incremental()),
        Err(Error::PrematureEndOfInput));
}

#[test]
fn bad_content_length() {
    let buf = b"POST / HTTP/1.1\r\nContent-Length: abc\r\n\r\n";
    for cfg in vec![line_oriented(), incremental()] {
        assert_matches!(read_request(&buf[..], &cfg),
                        Err(Error::ContentLengthInvalid));
    }
    let buf = b"POST / HTTP/1.1\r\nContent-Length: 1\r\n\
                Content-Length: 1\r\n\r\nx";
    for cfg in vec![line_oriented(), incremental()] {
        assert_matches!(read_request(&buf[..], &cfg),
                        Err(Error::DuplicateContentLength));
    }
}

#[test]
fn chunked_is_unsupported() {
    let buf = b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n0\r\n\r\n";
    assert_matches!(read_request(&buf[..], &incremental()),
                    Err(Error::UnsupportedBody));
}

#[test]
fn request_too_long() {
    let buf = b"POST / HTTP/1.1\r\nContent-Length: 100\r\n\r\n";
    for strategy in vec![ParseStrategy::LineOriented,
                         ParseStrategy::Incremental]
    {
        let cfg = Config::new()
            .strategy(strategy)
            .max_request_length(10)
            .done();
        assert_matches!(read_request(&buf[..], &cfg),
                        Err(Error::RequestTooLong));
    }
}

#[test]
fn missing_target_agrees() {
    for cfg in vec![line_oriented(), incremental()] {
        assert_matches!(read_request(&b"GET\r\n\r\n"[..], &cfg),
                        Err(Error::MalformedRequestLine));
    }
}
