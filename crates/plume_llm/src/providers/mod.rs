pub mod gemini;
pub mod relay;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use relay::{RelayConfig, RelayProvider};
