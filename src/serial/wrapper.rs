use super::traits::{ByteSource, LineConfig};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{Read, Result};
use std::time::Duration;

pub struct Wrapper {
    port: Box<dyn SerialPort>,
}

impl ByteSource for Wrapper {}

impl Read for Wrapper {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.port.read(buf)
    }
}

impl LineConfig for Wrapper {
    fn set_baud_rate(&mut self, baud_rate: u32) -> serialport::Result<()> {
        self.port.set_baud_rate(baud_rate)
    }

    fn set_data_bits(&mut self, data_bits: DataBits) -> serialport::Result<()> {
        self.port.set_data_bits(data_bits)
    }

    fn set_parity(&mut self, parity: Parity) -> serialport::Result<()> {
        self.port.set_parity(parity)
    }

    fn set_stop_bits(&mut self, stop_bits: StopBits) -> serialport::Result<()> {
        self.port.set_stop_bits(stop_bits)
    }

    fn set_flow_control(&mut self, flow_control: FlowControl) -> serialport::Result<()> {
        self.port.set_flow_control(flow_control)
    }

    fn set_timeout(&mut self, timeout: Duration) -> serialport::Result<()> {
        self.port.set_timeout(timeout)
    }
}

impl Wrapper {
    pub fn new(conn: Box<dyn SerialPort>) -> Wrapper {
        Wrapper { port: conn }
    }

    pub fn name(&self) -> Option<String> {
        self.port.name()
    }
}
