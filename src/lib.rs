pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod generator;
pub mod secure_fs;
pub mod service;
pub mod vault;
