/// How the request is read from the input stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// Read request line and header lines up to CRLF, then exactly
    /// `Content-Length` bytes of body
    LineOriented,
    /// Feed input chunks into an `httparse`-based state machine, end of
    /// input inside the body completes the request
    Incremental,
}

/// Which requests get their `Content-Length` body read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPolicy {
    /// Read the body unless method is GET, HEAD, TRACE or CONNECT
    Declared,
    /// Never read the body of POST and PUT requests
    ///
    /// This is what early line-oriented adapters did. It looks inverted, so
    /// it's not the default, but it can be enabled for launchers that rely
    /// on the body staying in the input stream.
    SkipPostPut,
}

/// Fine-grained configuration of the single-shot server
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) strategy: ParseStrategy,
    pub(crate) body_policy: BodyPolicy,
    pub(crate) max_request_length: u64,
    pub(crate) read_chunk_size: usize,
}

impl Config {
    /// Create a config with defaults
    pub fn new() -> Config {
        Config {
            strategy: ParseStrategy::LineOriented,
            body_policy: BodyPolicy::Declared,
            max_request_length: 10_485_760,
            read_chunk_size: 4096,
        }
    }
    /// Parser used to read the request
    pub fn strategy(&mut self, value: ParseStrategy) -> &mut Self {
        self.strategy = value;
        self
    }
    /// Decides for which methods `Content-Length` is honored
    ///
    /// Only affects the line-oriented parser.
    pub fn body_policy(&mut self, value: BodyPolicy) -> &mut Self {
        self.body_policy = value;
        self
    }
    /// Maximum size of the request body
    pub fn max_request_length(&mut self, value: u64) -> &mut Self {
        self.max_request_length = value;
        self
    }
    /// Size of the chunks fed into incremental parser
    ///
    /// # Panics
    ///
    /// When value is zero.
    pub fn read_chunk_size(&mut self, value: usize) -> &mut Self {
        assert!(value > 0, "read chunk size must be positive");
        self.read_chunk_size = value;
        self
    }
    /// Create an owned clone to pass to the constructor
    ///
    /// This is just a convenience method.
    pub fn done(&mut self) -> Config {
        self.clone()
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
