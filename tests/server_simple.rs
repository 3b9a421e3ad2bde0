extern crate singleshot;
#[macro_use] extern crate matches;

use std::cell::{Cell, RefCell};
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;

use singleshot::Error;
use singleshot::server::{SingleShot, Config, ParseStrategy, BodyPolicy};
use singleshot::server::{Environment, Response, HandlerError, Output, Body};
use singleshot::server::Errors;


/// Output that records written bytes and number of `close()` calls
#[derive(Clone)]
struct MockOutput {
    data: Rc<RefCell<Vec<u8>>>,
    closes: Rc<Cell<usize>>,
    fail_writes: bool,
}

impl MockOutput {
    fn new() -> MockOutput {
        MockOutput {
            data: Rc::new(RefCell::new(Vec::new())),
            closes: Rc::new(Cell::new(0)),
            fail_writes: false,
        }
    }
    fn broken() -> MockOutput {
        MockOutput { fail_writes: true, .. MockOutput::new() }
    }
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.data.borrow()).to_string()
    }
}

impl Write for MockOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.data.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Output for MockOutput {
    fn close(&mut self) -> io::Result<()> {
        self.closes.set(self.closes.get() + 1);
        Ok(())
    }
}

fn plain(_env: Environment) -> Result<Response, HandlerError> {
    Ok(Response::new(200u16).header("Content-Type", "text/plain"))
}

fn serve<H>(input: &str, handler: H, cfg: Config)
    -> (Result<(), Error>, MockOutput)
    where H: FnOnce(Environment) -> Result<Response, HandlerError>
{
    let out = MockOutput::new();
    let result = SingleShot::new(handler,
            Cursor::new(input.as_bytes().to_vec()), out.clone())
        .config(cfg)
        .errors(Errors::new(io::sink()))
        .serve();
    (result, out)
}

fn both_strategies() -> Vec<Config> {
    vec![
        Config::new().done(),
        Config::new().strategy(ParseStrategy::Incremental).done(),
    ]
}

#[test]
fn simple_request() {
    for cfg in both_strategies() {
        let (result, out) = serve(
            "GET / HTTP/1.1\r\nServer-Name: localhost\r\n\r\n", plain, cfg);
        result.unwrap();
        assert_eq!(out.output(),
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\n");
        assert_eq!(out.closes.get(), 1);
    }
}

#[test]
fn query_string() {
    for cfg in both_strategies() {
        let seen = Rc::new(RefCell::new(None));
        let store = seen.clone();
        let (result, _) = serve(
            "GET /params?foo=bar&baz=bang HTTP/1.1\r\n\
             Server-Name: localhost\r\n\r\n",
            move |env: Environment| -> Result<Response, HandlerError> {
                *store.borrow_mut() = Some((env.path_info().to_string(),
                                            env.query_string().to_string()));
                Ok(Response::new(200u16))
            }, cfg);
        result.unwrap();
        assert_eq!(*seen.borrow(),
            Some(("/params".to_string(), "foo=bar&baz=bang".to_string())));
    }
}

#[test]
fn post_body() {
    for cfg in both_strategies() {
        let (result, out) = serve(
            "POST / HTTP/1.1\r\nServer-Name: localhost\r\n\
             Content-Type: application/x-www-form-urlencoded\r\n\
             Content-Length: 7\r\n\r\nfoo=bar",
            |mut env: Environment| -> Result<Response, HandlerError> {
                assert_eq!(env.var("CONTENT_TYPE"),
                           Some("application/x-www-form-urlencoded"));
                let mut body = String::new();
                env.input().read_to_string(&mut body)?;
                Ok(Response::new(200u16).body(body))
            }, cfg);
        result.unwrap();
        assert_eq!(out.output(), "HTTP/1.1 200 OK\r\n\r\nfoo=bar");
    }
}

#[test]
fn get_has_empty_body() {
    let (result, out) = serve(
        "GET / HTTP/1.1\r\nServer-Name: localhost\r\n\r\n",
        |mut env: Environment| -> Result<Response, HandlerError> {
            let mut body = Vec::new();
            env.input().read_to_end(&mut body)?;
            Ok(Response::new(200u16).body(format!("{}", body.len())))
        }, Config::new());
    result.unwrap();
    assert_eq!(out.output(), "HTTP/1.1 200 OK\r\n\r\n0");
}

#[test]
fn skip_post_put_body() {
    let cfg = Config::new().body_policy(BodyPolicy::SkipPostPut).done();
    let (result, out) = serve(
        "POST / HTTP/1.1\r\nServer-Name: localhost\r\n\
         Content-Length: 7\r\n\r\nfoo=bar",
        |env: Environment| -> Result<Response, HandlerError> {
            let mut env = env;
            Ok(Response::new(200u16).body(format!("{}", env.input().len())))
        }, cfg);
    result.unwrap();
    assert_eq!(out.output(), "HTTP/1.1 200 OK\r\n\r\n0");
}

#[test]
fn streamed_body_and_multiline_headers() {
    let (result, out) = serve(
        "GET / HTTP/1.1\r\nHost: example.com\r\n\r\n",
        |_env: Environment| -> Result<Response, HandlerError> {
            Ok(Response::new("404")
                .header("Set-Cookie", "a=1\nb=2")
                .body(Body::chunks(vec![b"not ".to_vec(),
                                        b"found".to_vec()])))
        }, Config::new());
    result.unwrap();
    assert_eq!(out.output(),
        "HTTP/1.1 404 Not Found\r\n\
         Set-Cookie: a=1\r\n\
         Set-Cookie: b=2\r\n\r\n\
         not found");
}

#[test]
fn malformed_request_line() {
    let (result, out) = serve("GET\r\n\r\n", plain, Config::new());
    assert_matches!(result, Err(Error::MalformedRequestLine));
    assert_eq!(out.output(), "");
    assert_eq!(out.closes.get(), 1);
}

#[test]
fn missing_host() {
    let (result, out) = serve("GET / HTTP/1.1\r\n\r\n", plain, Config::new());
    assert_matches!(result, Err(Error::HostMissing));
    assert_eq!(out.output(), "");
    assert_eq!(out.closes.get(), 1);
}

#[test]
fn handler_error_is_propagated() {
    let (result, out) = serve(
        "GET / HTTP/1.1\r\nServer-Name: localhost\r\n\r\n",
        |_env: Environment| -> Result<Response, HandlerError> {
            Err("database is down".into())
        }, Config::new());
    match result {
        Err(Error::Handler(e)) => {
            assert_eq!(e.to_string(), "database is down");
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(out.output(), "");
    assert_eq!(out.closes.get(), 1);
}

#[test]
fn invalid_status_fails_at_write() {
    let (result, out) = serve(
        "GET / HTTP/1.1\r\nServer-Name: localhost\r\n\r\n",
        |_env: Environment| -> Result<Response, HandlerError> {
            Ok(Response::new("teapot"))
        }, Config::new());
    assert_matches!(result, Err(Error::InvalidStatus(_)));
    assert_eq!(out.closes.get(), 1);
}

#[test]
fn write_error_still_closes() {
    let out = MockOutput::broken();
    let result = SingleShot::new(plain,
            Cursor::new(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".to_vec()),
            out.clone())
        .serve();
    assert_matches!(result, Err(Error::Io(_)));
    assert_eq!(out.closes.get(), 1);
}

#[test]
fn panic_in_handler_still_closes() {
    let out = MockOutput::new();
    let closes = out.closes.clone();
    let result = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(
        move || {
            SingleShot::new(
                |_env: Environment| -> Result<Response, HandlerError> {
                    panic!("handler bug");
                },
                Cursor::new(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n".to_vec()),
                out).serve()
        }));
    assert!(result.is_err());
    assert_eq!(closes.get(), 1);
}

#[test]
fn incremental_best_effort_body() {
    let cfg = Config::new().strategy(ParseStrategy::Incremental).done();
    let (result, out) = serve(
        "PUT / HTTP/1.1\r\nHost: x\r\nContent-Length: 100\r\n\r\npartial",
        |mut env: Environment| -> Result<Response, HandlerError> {
            let mut body = String::new();
            env.input().read_to_string(&mut body)?;
            Ok(Response::new(200u16).body(body))
        }, cfg);
    result.unwrap();
    assert_eq!(out.output(), "HTTP/1.1 200 OK\r\n\r\npartial");
}

#[test]
fn line_oriented_truncated_body() {
    let (result, out) = serve(
        "PUT / HTTP/1.1\r\nHost: x\r\nContent-Length: 100\r\n\r\npartial",
        plain, Config::new());
    assert_matches!(result, Err(Error::TruncatedBody(100, 7)));
    assert_eq!(out.output(), "");
    assert_eq!(out.closes.get(), 1);
}

#[test]
fn request_cant_override_server_name() {
    let cases = vec![
        "GET @evil.com/x HTTP/1.1\r\nServer-Name: localhost\r\n\r\n",
        "GET a/b HTTP/1.1\r\nServer-Name: localhost\r\n\r\n",
        "GET /x HTTP/1.1\r\nHost: example.com/admin\r\n\r\n",
        "GET /x HTTP/1.1\r\nHost: good.com@evil.com\r\n\r\n",
    ];
    for input in cases {
        for cfg in both_strategies() {
            let (result, out) = serve(input, plain, cfg);
            assert!(result.is_err(), "{:?} is accepted", input);
            assert_eq!(out.output(), "");
            assert_eq!(out.closes.get(), 1);
        }
    }
}
