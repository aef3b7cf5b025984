use crate::serial::traits::LineConfig;
use serialport::{DataBits, FlowControl, Parity, StopBits};
use std::time::Duration;

pub const DEVICE_PATH: &str = "/dev/ttyACM0";
pub const BAUD_RATE: u32 = 19200;
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Fixed 8-N-1 line without flow control.
///
/// Raw input, no echo and no signal characters are set up by `serialport`
/// itself when the TTY is opened; everything here is re-applied afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PortSettings {
    pub path: String,
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    pub flow_control: FlowControl,
    pub timeout: Duration,
}

impl Default for PortSettings {
    fn default() -> Self {
        PortSettings {
            path: String::from(DEVICE_PATH),
            baud_rate: BAUD_RATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            flow_control: FlowControl::None,
            timeout: READ_TIMEOUT,
        }
    }
}

impl PortSettings {
    /// Applies every setting in turn. A failing step is reported and skipped,
    /// so the port keeps whatever configuration did succeed.
    /// Returns the number of steps that failed.
    pub fn apply<T: LineConfig>(&self, line: &mut T) -> usize {
        let steps = [
            ("data bits", line.set_data_bits(self.data_bits)),
            ("parity", line.set_parity(self.parity)),
            ("stop bits", line.set_stop_bits(self.stop_bits)),
            ("flow control", line.set_flow_control(self.flow_control)),
            ("baud rate", line.set_baud_rate(self.baud_rate)),
            ("read timeout", line.set_timeout(self.timeout)),
        ];

        let mut failed = 0;
        for (name, result) in steps {
            if let Err(e) = result {
                log::error!("Failed to set {} on {}: {}", name, self.path, e);
                failed += 1;
            }
        }
        failed
    }
}
