use std::io;
use std::sync::atomic::{AtomicI32, Ordering};

static CAUGHT: AtomicI32 = AtomicI32::new(0);

extern "C" fn record_signal(signum: libc::c_int) {
    // Only an atomic store here. Cleanup runs in the read loop.
    CAUGHT.store(signum, Ordering::SeqCst);
}

/// Routes SIGINT and SIGTERM to a flag checked with [`caught`].
pub fn install() -> io::Result<()> {
    for signum in [libc::SIGINT, libc::SIGTERM] {
        let handler = record_signal as extern "C" fn(libc::c_int) as libc::sighandler_t;
        let previous = unsafe { libc::signal(signum, handler) };
        if previous == libc::SIG_ERR {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// The number of the last signal received, if any.
pub fn caught() -> Option<i32> {
    match CAUGHT.load(Ordering::SeqCst) {
        0 => None,
        signum => Some(signum),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn records_signal_number() {
        install().unwrap();
        unsafe {
            libc::raise(libc::SIGTERM);
        }
        assert_eq!(Some(libc::SIGTERM), caught());
    }
}
