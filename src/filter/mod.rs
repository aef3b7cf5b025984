mod classify;
mod errors;
mod line_buffer;
mod mock;
mod reader;

pub use reader::LineFilteringReader;
