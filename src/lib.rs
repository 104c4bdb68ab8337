pub mod cli;
pub mod config;
pub mod contribute;
pub mod error;
pub mod filter;
pub mod gh;
pub mod report;
pub mod repo;
pub mod selector;
pub mod tracker;
