/// How a received byte affects the line being assembled.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ByteClass {
    LineFeed,
    Printable,
    Other,
}

impl ByteClass {
    pub fn of(byte: u8) -> ByteClass {
        match byte {
            b'\n' => ByteClass::LineFeed,
            0x20..=0x7e => ByteClass::Printable,
            _ => ByteClass::Other,
        }
    }
}
