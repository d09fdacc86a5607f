pub mod build;
pub mod config;
pub mod outcome;
pub mod report;
pub mod runner;
