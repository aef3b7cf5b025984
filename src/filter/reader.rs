use crate::filter::classify::ByteClass;
use crate::filter::errors::{Error, Result};
use crate::filter::line_buffer::{LineBuffer, LINE_CAPACITY};
use crate::serial::Connection;
use std::io::Write;
use std::thread;
use std::time::Duration;

pub const READ_CHUNK_SIZE: usize = 255;
pub const LINE_MARKER: u8 = b'{';
pub const PAUSE: Duration = Duration::from_secs(1);

/// Reads the serial connection chunk by chunk, traces every byte to `log`
/// and echoes lines starting with [`LINE_MARKER`] to `console`.
///
/// Every received byte is written to the log as `<byte> \n`. An accepted
/// line is echoed as `<line> \n` and appended to the log with no terminator.
pub struct LineFilteringReader<C: Connection, L: Write, O: Write> {
    connection: C,
    log: L,
    console: O,
    line: LineBuffer,
    pause: Duration,
}

impl<C: Connection, L: Write, O: Write> LineFilteringReader<C, L, O> {
    pub fn new(connection: C, log: L, console: O) -> Self {
        LineFilteringReader {
            connection,
            log,
            console,
            line: LineBuffer::new(LINE_CAPACITY),
            pause: PAUSE,
        }
    }

    #[cfg(test)]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Traces and classifies one byte. The byte is always classified, even
    /// when its trace record could not be written.
    pub fn process_byte(&mut self, byte: u8) -> Result<()> {
        let traced = self.log.write_all(&[byte, b' ', b'\n']).map_err(Error::LogWrite);

        match ByteClass::of(byte) {
            ByteClass::LineFeed => self.end_line()?,
            ByteClass::Printable => {
                if !self.line.push(byte) && self.line.dropped() == 1 {
                    log::debug!("Line buffer full at {} bytes", LINE_CAPACITY);
                }
            }
            ByteClass::Other => {}
        }
        traced
    }

    /// Processes every byte of `chunk`, then flushes the log. Reports the
    /// first error hit.
    pub fn process_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        let mut first_error = None;
        for &byte in chunk {
            if let Err(e) = self.process_byte(byte) {
                first_error.get_or_insert(e);
            }
        }
        if let Err(e) = self.log.flush() {
            first_error.get_or_insert(Error::LogWrite(e));
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// One read from the connection followed by processing of whatever
    /// arrived. Returns the number of bytes read.
    pub fn poll(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.connection.read_chunk(buf)?;
        if n > 0 {
            self.process_chunk(&buf[..n])?;
        }
        Ok(n)
    }

    /// Polls until `interrupted` reports a signal number, pausing between
    /// reads. Errors are reported and the loop carries on.
    pub fn run<F>(&mut self, mut interrupted: F) -> i32
    where
        F: FnMut() -> Option<i32>,
    {
        let mut buf = [0u8; READ_CHUNK_SIZE];
        loop {
            if let Some(signum) = interrupted() {
                return signum;
            }
            if let Err(e) = self.poll(&mut buf) {
                log::error!("{}", e);
            }
            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        }
    }

    /// Flushes both outputs. Dropping the reader afterwards closes the log
    /// file and the serial port.
    pub fn close(mut self) -> Result<()> {
        self.log.flush().map_err(Error::LogWrite)?;
        self.console.flush().map_err(Error::ConsoleWrite)?;
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }
        let result = if self.line.starts_with(LINE_MARKER) {
            self.emit_line()
        } else {
            Ok(())
        };
        if self.line.dropped() > 0 {
            log::warn!(
                "Line longer than {} bytes, dropped {} byte(s)",
                LINE_CAPACITY,
                self.line.dropped()
            );
        }
        self.line.clear();
        result
    }

    fn emit_line(&mut self) -> Result<()> {
        log::trace!("Accepted line ({} bytes): {}", self.line.len(), self.line.as_str());

        let line = self.line.as_bytes();
        let echoed = self
            .console
            .write_all(line)
            .and_then(|_| self.console.write_all(b" \n"))
            .and_then(|_| self.console.flush())
            .map_err(Error::ConsoleWrite);
        self.log.write_all(line).map_err(Error::LogWrite)?;
        echoed
    }
}
