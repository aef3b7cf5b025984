use crate::app::errors::{Error, Result};
use std::path::PathBuf;

const DEFAULT_PROGRAM: &str = "serial_line_filter";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub log_path: PathBuf,
}

impl Args {
    /// Expects the program name followed by exactly one log file path.
    pub fn parse<I>(args: I) -> Result<Args>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| String::from(DEFAULT_PROGRAM));
        let rest: Vec<String> = args.collect();

        match <[String; 1]>::try_from(rest) {
            Ok([path]) => Ok(Args {
                log_path: PathBuf::from(path),
            }),
            Err(_) => Err(Error::Usage { program }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_path() {
        assert_eq!(
            Args {
                log_path: PathBuf::from("out.txt")
            },
            Args::parse(args(&["prog", "out.txt"])).unwrap()
        );
    }

    #[test]
    fn no_path() {
        match Args::parse(args(&["prog"])) {
            Err(Error::Usage { program }) => assert_eq!("prog", program),
            _ => panic!("Usage expected"),
        }
    }

    #[test]
    fn too_many_paths() {
        assert_eq!(true, Args::parse(args(&["prog", "a", "b"])).is_err());
    }

    #[test]
    fn nothing_at_all() {
        match Args::parse(Vec::new()) {
            Err(e) => assert_eq!("Usage: serial_line_filter [file-name]", e.to_string()),
            _ => panic!("Usage expected"),
        }
    }
}
