#![crate_type = "lib"]
#![crate_name = "sqltutor"]

pub mod common;
pub mod config;
pub mod sql;
pub mod storage;
pub mod tutor;
pub mod types;
