use crate::serial::errors::Result;
use serialport::{DataBits, FlowControl, Parity, StopBits};
use std::fs::File;
use std::io::Read;
use std::time::Duration;

/// Anything the device can be read through.
pub trait ByteSource: Read {}

impl ByteSource for File {}

/// The line parameters that can be changed on an already opened port.
pub trait LineConfig {
    fn set_baud_rate(&mut self, baud_rate: u32) -> serialport::Result<()>;
    fn set_data_bits(&mut self, data_bits: DataBits) -> serialport::Result<()>;
    fn set_parity(&mut self, parity: Parity) -> serialport::Result<()>;
    fn set_stop_bits(&mut self, stop_bits: StopBits) -> serialport::Result<()>;
    fn set_flow_control(&mut self, flow_control: FlowControl) -> serialport::Result<()>;
    fn set_timeout(&mut self, timeout: Duration) -> serialport::Result<()>;
}

pub trait Connection {
    /// Reads whatever the device delivered, at most `buf.len()` bytes.
    /// `Ok(0)` means the read timeout elapsed without data.
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_chunk(buf)
    }
}
