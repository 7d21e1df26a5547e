pub mod config;
pub mod logging;

pub mod checksum;
pub mod dedupe;
pub mod fetch;
pub mod pipeline;
pub mod storage;
pub mod url_model;
pub mod validate;
