pub mod catalog;
pub mod conditions;
pub mod config;
pub mod report;
pub mod scoring;
