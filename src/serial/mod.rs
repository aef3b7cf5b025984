pub mod errors;
mod mock_serial;
mod port;
pub mod settings;
mod traits;
mod wrapper;

pub use errors::Error;
pub use port::open;
pub use settings::PortSettings;
pub use traits::Connection;
