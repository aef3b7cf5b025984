#[cfg(test)]
use crate::serial::traits::{ByteSource, LineConfig};
#[cfg(test)]
use mockall::mock;
#[cfg(test)]
use serialport::{DataBits, FlowControl, Parity, StopBits};
#[cfg(test)]
use std::io::{ErrorKind, Read};
#[cfg(test)]
use std::time::Duration;

/// Hands out one pre-recorded chunk per `read` call.
#[cfg(test)]
pub struct MockSource<'a> {
    read_buf: Vec<&'a [u8]>,
    pointer: usize,
    fail_first: Option<ErrorKind>,
}

#[cfg(test)]
impl<'a> MockSource<'a> {
    pub fn new(data: Vec<&'a [u8]>) -> MockSource<'a> {
        MockSource {
            read_buf: data,
            pointer: 0,
            fail_first: None,
        }
    }

    /// The first read fails with `kind`, later reads hand out `data`.
    pub fn failing(kind: ErrorKind, data: Vec<&'a [u8]>) -> MockSource<'a> {
        MockSource {
            fail_first: Some(kind),
            ..MockSource::new(data)
        }
    }
}

#[cfg(test)]
impl<'a> Read for MockSource<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::result::Result<usize, std::io::Error> {
        if let Some(kind) = self.fail_first.take() {
            return Err(std::io::Error::new(kind, "mock failure"));
        }
        if self.read_buf.len() <= self.pointer {
            return Ok(0);
        }
        let data = self.read_buf[self.pointer];
        let n = data.len().min(buf.len());
        buf[..n].copy_from_slice(&data[..n]);
        self.pointer += 1;
        Ok(n)
    }
}

#[cfg(test)]
impl<'a> ByteSource for MockSource<'a> {}

#[cfg(test)]
mock! {
    pub Line {}

    impl LineConfig for Line {
        fn set_baud_rate(&mut self, baud_rate: u32) -> serialport::Result<()>;
        fn set_data_bits(&mut self, data_bits: DataBits) -> serialport::Result<()>;
        fn set_parity(&mut self, parity: Parity) -> serialport::Result<()>;
        fn set_stop_bits(&mut self, stop_bits: StopBits) -> serialport::Result<()>;
        fn set_flow_control(&mut self, flow_control: FlowControl) -> serialport::Result<()>;
        fn set_timeout(&mut self, timeout: Duration) -> serialport::Result<()>;
    }
}
