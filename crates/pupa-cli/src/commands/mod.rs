//! Command implementations.

pub mod cite;
pub mod normalize;
pub mod rehydrate;

pub use self::cite::execute_cite;
pub use self::normalize::execute_normalize;
pub use self::rehydrate::execute_rehydrate;

use crate::error::Result;
use std::io::Read;
use std::path::Path;

/// Read command input from a file, or stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
