//! Local storage for Spendwise
//!
//! The backend owns all expense and budget data; locally there is only the
//! session file, written with atomic JSON writes.

pub mod file_io;
pub mod session;

pub use file_io::{read_json, write_json_atomic};
pub use session::SessionStore;
