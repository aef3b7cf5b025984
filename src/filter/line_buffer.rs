use crate::filter::classify::ByteClass;

pub const LINE_CAPACITY: usize = 255;

/// The printable part of the line currently being received.
///
/// Never holds more than `capacity` bytes and never holds anything outside
/// `0x20..=0x7e`; excess bytes are counted and dropped.
pub struct LineBuffer {
    data: Vec<u8>,
    capacity: usize,
    dropped: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> LineBuffer {
        LineBuffer {
            data: Vec::with_capacity(capacity),
            capacity,
            dropped: 0,
        }
    }

    /// Stores a printable byte. Returns false when the byte was not stored,
    /// either because it is not printable or because the buffer is full.
    pub fn push(&mut self, byte: u8) -> bool {
        if ByteClass::of(byte) != ByteClass::Printable {
            return false;
        }
        if self.data.len() >= self.capacity {
            self.dropped += 1;
            return false;
        }
        self.data.push(byte);
        true
    }

    pub fn starts_with(&self, marker: u8) -> bool {
        self.data.first() == Some(&marker)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_str(&self) -> &str {
        // only printable ASCII is ever stored
        std::str::from_utf8(&self.data).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes lost to the capacity limit since the last `clear`.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.dropped = 0;
    }
}
