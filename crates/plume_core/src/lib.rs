pub mod error;
pub mod export;
pub mod session;
pub mod tabular;

pub use error::{PlumeError, Result};
pub use export::{derive_filename, sql_artifact};
pub use session::{ChatHistory, ChatMessage, ChatRole};
pub use tabular::TabularPreview;
