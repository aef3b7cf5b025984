use super::traits::ByteSource;
use crate::serial::errors::Result;
use crate::serial::settings::PortSettings;
use crate::serial::wrapper::Wrapper;
use crate::serial::Connection;
use std::fs::OpenOptions;
use std::io::{self, ErrorKind};

struct ConnectionImpl<T: ByteSource> {
    pub(in crate::serial::port) connection: T,
}

impl<T: ByteSource> Connection for ConnectionImpl<T> {
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.connection.read(buf) {
            Ok(n) => Ok(n),
            // A timeout is an empty read, and a signal landing mid-read is
            // picked up by the caller's next shutdown check.
            Err(e) if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::Interrupted => {
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Stands in for a device that could not be opened; every read fails.
struct Unopened {
    kind: ErrorKind,
    reason: String,
}

impl Connection for Unopened {
    fn read_chunk(&mut self, _: &mut [u8]) -> Result<usize> {
        Err(io::Error::new(self.kind, self.reason.clone()).into())
    }
}

/// Opens the device and applies `settings`.
///
/// Nothing here is fatal. If the line cannot be configured the device is
/// read as a plain file, and if it cannot be opened at all every read
/// reports the open error.
pub fn open(settings: &PortSettings) -> Box<dyn Connection> {
    let port = match serialport::new(settings.path.as_str(), settings.baud_rate)
        .timeout(settings.timeout)
        .open()
    {
        Ok(port) => port,
        Err(e) => {
            log::error!("Error configuring {}: {}", settings.path, e);
            return open_unconfigured(&settings.path);
        }
    };
    let mut wrapper = Wrapper::new(port);

    let failed = settings.apply(&mut wrapper);
    if failed > 0 {
        log::warn!(
            "Continuing with {} serial setting(s) not applied on {}",
            failed,
            settings.path
        );
    }
    log::info!(
        "Opened {} at {} baud",
        wrapper.name().unwrap_or_else(|| settings.path.clone()),
        settings.baud_rate
    );

    Box::new(ConnectionImpl {
        connection: wrapper,
    })
}

fn open_unconfigured(path: &str) -> Box<dyn Connection> {
    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => {
            log::warn!("Reading {} without serial line settings", path);
            Box::new(ConnectionImpl { connection: file })
        }
        Err(e) => {
            log::error!("Error opening {}: {}", path, e);
            Box::new(Unopened {
                kind: e.kind(),
                reason: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::serial::mock_serial::MockSource;
    use crate::serial::Error;

    fn new_conn<'a>(connection: MockSource<'a>) -> ConnectionImpl<MockSource<'a>> {
        ConnectionImpl { connection }
    }

    mod read_chunk_test {
        use super::*;

        #[test]
        fn read_once() {
            let mut conn = new_conn(MockSource::new(vec![b"{a}\n"]));
            let mut buf = [0u8; 255];
            let n = conn.read_chunk(&mut buf).unwrap();
            assert_eq!(b"{a}\n", &buf[..n]);
        }

        #[test]
        fn nothing_available() {
            let mut conn = new_conn(MockSource::new(Vec::new()));
            let mut buf = [0u8; 255];
            assert_eq!(0, conn.read_chunk(&mut buf).unwrap());
        }

        #[test]
        fn timeout_is_empty_read() {
            let mut conn = new_conn(MockSource::failing(ErrorKind::TimedOut, vec![b"x"]));
            let mut buf = [0u8; 255];
            assert_eq!(0, conn.read_chunk(&mut buf).unwrap());
            assert_eq!(1, conn.read_chunk(&mut buf).unwrap());
        }

        #[test]
        fn interrupted_is_empty_read() {
            let mut conn = new_conn(MockSource::failing(ErrorKind::Interrupted, Vec::new()));
            let mut buf = [0u8; 255];
            assert_eq!(0, conn.read_chunk(&mut buf).unwrap());
        }

        #[test]
        fn other_errors_propagate() {
            let mut conn = new_conn(MockSource::failing(ErrorKind::BrokenPipe, Vec::new()));
            let mut buf = [0u8; 255];
            match conn.read_chunk(&mut buf) {
                Err(Error::IoError(e)) => assert_eq!(ErrorKind::BrokenPipe, e.kind()),
                _ => panic!("IoError expected"),
            }
        }
    }

    mod open_test {
        use super::*;

        fn settings_for(path: &str) -> PortSettings {
            PortSettings {
                path: String::from(path),
                ..PortSettings::default()
            }
        }

        #[test]
        fn unconfigurable_device_still_reads() {
            // not a TTY, so the line settings cannot be read or applied
            let mut conn = open(&settings_for("/dev/null"));
            let mut buf = [0u8; 255];
            assert_eq!(0, conn.read_chunk(&mut buf).unwrap());
            assert_eq!(0, conn.read_chunk(&mut buf).unwrap());
        }

        #[test]
        fn missing_device_fails_every_read() {
            let mut conn = open(&settings_for("/nonexistent/serial-line-filter-tty"));
            let mut buf = [0u8; 255];
            for _ in 0..2 {
                match conn.read_chunk(&mut buf) {
                    Err(Error::IoError(e)) => assert_eq!(ErrorKind::NotFound, e.kind()),
                    _ => panic!("IoError expected"),
                }
            }
        }
    }
}
