pub mod types;
pub mod validator;
pub mod formatter;

pub use types::*;
pub use validator::*;
pub use formatter::*;
