pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod logging;
pub mod report;
pub mod request_log;
pub mod template;
pub mod translate;
