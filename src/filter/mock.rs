#[cfg(test)]
use mockall::mock;

#[cfg(test)]
use crate::serial::Connection;

#[cfg(test)]
mock! {
    pub Serial{}

    impl Connection for Serial {
        fn read_chunk(&mut self, buf: &mut [u8]) -> crate::serial::errors::Result<usize>;
    }
}
