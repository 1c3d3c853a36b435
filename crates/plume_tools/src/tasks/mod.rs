pub mod blog;
pub mod chat;
pub mod code;
pub mod csv_qa;
pub mod document;
pub mod sql;
pub mod website;

#[cfg(test)]
pub(crate) mod testutil;
