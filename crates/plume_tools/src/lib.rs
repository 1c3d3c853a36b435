//! plume_tools — the task flows behind each suite panel.
//!
//! Every task builds its prompt with a pure, separately testable function and
//! sends it through a [`plume_llm::Provider`]. Multi-step flows (the SQL
//! generator) issue independent, stateless requests in sequence; nothing is
//! cached between steps and nothing is retried.

pub mod tasks;

pub use tasks::{blog, chat, code, csv_qa, document, sql, website};
