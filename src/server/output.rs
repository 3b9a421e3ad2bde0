use std::fs::File;
use std::io::{self, Write};
use std::net::{Shutdown, TcpStream};
#[cfg(unix)] use std::os::unix::net::UnixStream;


/// An output stream that can be closed explicitly
///
/// Closing must flush everything that's written and signal end of the
/// response to the peer (where the transport allows that).
pub trait Output: Write {
    fn close(&mut self) -> io::Result<()>;
}

/// Closes the output exactly once
///
/// The lifecycle closes the output explicitly when the transaction is
/// over. If the transaction panics instead, the output is closed on drop.
pub struct OutputGuard<W: Output> {
    inner: Option<W>,
}

/// Only flushes
///
/// Standard output can't be closed without closing the descriptor under
/// the whole process, it's released when `SingleShot::run()` exits. A
/// launcher calling `SingleShot::serve()` on stdout directly keeps the
/// stream open and must terminate the process itself to signal the end
/// of the response.
impl Output for io::Stdout {
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Output for File {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all().or_else(|e| {
            // pipes and ttys can't be synced
            if e.kind() == io::ErrorKind::InvalidInput { Ok(()) } else { Err(e) }
        })
    }
}

impl Output for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.shutdown(Shutdown::Write)
    }
}

#[cfg(unix)]
impl Output for UnixStream {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.shutdown(Shutdown::Write)
    }
}

impl Output for Vec<u8> {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<'a, T: Output + ?Sized> Output for &'a mut T {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<W: Output> OutputGuard<W> {
    pub fn new(output: W) -> OutputGuard<W> {
        OutputGuard { inner: Some(output) }
    }
    /// Closes the output, consuming the guard
    pub fn close(mut self) -> io::Result<()> {
        match self.inner.take() {
            Some(mut output) => output.close(),
            None => Ok(()),
        }
    }
    fn get_mut(&mut self) -> io::Result<&mut W> {
        self.inner.as_mut().ok_or_else(|| {
            io::Error::new(io::ErrorKind::BrokenPipe, "output is closed")
        })
    }
}

impl<W: Output> Write for OutputGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.get_mut()?.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.get_mut()?.flush()
    }
}

impl<W: Output> Drop for OutputGuard<W> {
    fn drop(&mut self) {
        if let Some(mut output) = self.inner.take() {
            if let Err(e) = output.close() {
                error!("Error closing output: {}", e);
            }
        }
    }
}
