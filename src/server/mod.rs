//! Single-shot HTTP server
//!
//! A `SingleShot` reads exactly one request from the input, calls the
//! handler exactly once, writes the response and closes the output. The
//! `run()` method then terminates the process, so that a launcher that
//! reuses the process can't leave it blocked on an input that has nothing
//! more to give.
//!
//! There are no timeouts: a silent client blocks the process at the read
//! step. Launchers needing bounded latency must set them on the streams.
use std::io::{self, BufReader, Read};
use std::process;

mod config;
mod dispatcher;
mod environ;
mod error;
mod incremental;
mod input;
mod output;
mod parser;
mod registry;
mod request;
mod request_target;
mod response_writer;

pub use self::config::{Config, ParseStrategy, BodyPolicy};
pub use self::dispatcher::{Handler, HandlerError, Response, ResponseStatus};
pub use self::dispatcher::{Body, dispatch};
pub use self::environ::{Environment, Vars, SERVER_SOFTWARE};
pub use self::error::{Error, HeaderError};
pub use self::incremental::{IncrementalParser, Progress};
pub use self::input::{Input, Errors};
pub use self::output::{Output, OutputGuard};
pub use self::registry::{Registry, Launch, NAME, register};
pub use self::request::{ParsedRequest, ParsedHeaders, RawRequestLine};
pub use self::request_target::RequestTarget;
pub use self::response_writer::{ResponseWriter, write_response};


/// One HTTP transaction over a pair of streams
pub struct SingleShot<H, I, O> {
    handler: H,
    input: I,
    output: O,
    errors: Errors,
    config: Config,
}

/// Reads the request using the configured strategy
pub fn read_request<I: Read>(input: I, cfg: &Config)
    -> Result<ParsedRequest, Error>
{
    match cfg.strategy {
        ParseStrategy::LineOriented => {
            parser::read_request(&mut BufReader::new(input), cfg)
        }
        ParseStrategy::Incremental => {
            let mut input = input;
            incremental::read_request(&mut input, cfg)
        }
    }
}

impl<H: Handler> SingleShot<H, io::Stdin, io::Stdout> {
    /// Transaction on the process' standard input and output
    ///
    /// Handler's error stream is the standard error.
    pub fn stdio(handler: H) -> SingleShot<H, io::Stdin, io::Stdout> {
        SingleShot::new(handler, io::stdin(), io::stdout())
    }
}

impl<H: Handler, I: Read, O: Output> SingleShot<H, I, O> {
    pub fn new(handler: H, input: I, output: O) -> SingleShot<H, I, O> {
        SingleShot {
            handler: handler,
            input: input,
            output: output,
            errors: Errors::stderr(),
            config: Config::new(),
        }
    }
    /// Replaces default configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
    /// Stream handed to the handler as an error output
    pub fn errors(mut self, errors: Errors) -> Self {
        self.errors = errors;
        self
    }

    /// Parses request, calls handler and writes response
    ///
    /// The output is closed exactly once whatever the outcome is (also
    /// when the handler panics). If the transaction failed, its error is
    /// returned even if closing failed too. Output may contain a partial
    /// response in case of error.
    pub fn serve(self) -> Result<(), Error> {
        let SingleShot { handler, input, output, errors, config } = self;
        let mut output = OutputGuard::new(output);
        let result = transaction(handler, input, &mut output, errors, &config);
        let closed = output.close();
        trace!("Output closed");
        result?;
        closed?;
        Ok(())
    }

    /// Serves the transaction and exits the process
    ///
    /// Exit code is zero on success and one if the transaction failed.
    pub fn run(self) -> ! {
        let code = match self.serve() {
            Ok(()) => 0,
            Err(e) => {
                error!("Transaction failed: {}", e);
                1
            }
        };
        process::exit(code)
    }
}

fn transaction<H, I, W>(handler: H, input: I, output: &mut W,
    errors: Errors, cfg: &Config)
    -> Result<(), Error>
    where H: Handler, I: Read, W: io::Write,
{
    trace!("Reading request");
    let request = read_request(input, cfg)?;
    let env = Environment::build(request, errors)?;
    let response = dispatch(handler, env)?;
    trace!("Writing response");
    write_response(output, response)
}
