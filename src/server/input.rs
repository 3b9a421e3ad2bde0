use std::fmt;
use std::io::{self, BufRead, Cursor, Read, Write};


/// Fully buffered request body handed to the handler
///
/// Can be read multiple times using `rewind()`.
#[derive(Debug, Clone)]
pub struct Input {
    data: Cursor<Vec<u8>>,
}

/// Error stream handed to the handler
///
/// Anything a handler wants to report goes here, never to the output.
pub struct Errors {
    sink: Box<dyn Write>,
}

impl Input {
    pub fn new(body: Vec<u8>) -> Input {
        Input { data: Cursor::new(body) }
    }
    /// Moves read position back to the start of the body
    pub fn rewind(&mut self) {
        self.data.set_position(0);
    }
    /// Total length of the body
    pub fn len(&self) -> usize {
        self.data.get_ref().len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.get_ref().is_empty()
    }
    /// Whole body regardless of the read position
    pub fn as_bytes(&self) -> &[u8] {
        self.data.get_ref()
    }
    pub fn into_inner(self) -> Vec<u8> {
        self.data.into_inner()
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.data.read(buf)
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.data.fill_buf()
    }
    fn consume(&mut self, amt: usize) {
        self.data.consume(amt)
    }
}

impl Errors {
    pub fn new<W: Write + 'static>(sink: W) -> Errors {
        Errors { sink: Box::new(sink) }
    }
    /// Errors sink pointing to the process' standard error
    pub fn stderr() -> Errors {
        Errors::new(io::stderr())
    }
}

impl Write for Errors {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl fmt::Debug for Errors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Errors")
    }
}
