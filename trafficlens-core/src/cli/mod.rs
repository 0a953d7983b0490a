pub mod conf;
pub mod plugin;
pub mod report;
