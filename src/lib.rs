//! Single-shot HTTP/1.1 transaction adapter
//!
//! Parses one request from an input stream, calls one handler with a
//! CGI-like environment, writes the response to the output stream and
//! exits. Intended for process-per-connection launchers (inetd, CGI).
//!
//! ```rust,no_run
//! extern crate singleshot;
//!
//! use singleshot::server::{SingleShot, Environment, Response, HandlerError};
//!
//! fn hello(env: Environment) -> Result<Response, HandlerError> {
//!     Ok(Response::new(200u16)
//!         .header("Content-Type", "text/plain")
//!         .body(format!("Hello from {}\n", env.path_info())))
//! }
//!
//! fn main() {
//!     SingleShot::stdio(hello).run()
//! }
//! ```

extern crate url;
extern crate httparse;
#[macro_use(quick_error)] extern crate quick_error;
#[macro_use] extern crate matches;
#[macro_use] extern crate log;


pub mod server;
mod enums;
mod headers;

pub use enums::{Version, Status, Method, reason_phrase};
pub use headers::canonical_key;
pub use server::Error;
