// error module
mod error;
// loader module
mod loader;

pub use error::InputError;
pub use loader::{load_numbers_from_file, parse_numbers, parse_target};
