pub mod builtin;
pub mod models;
pub mod strings;
