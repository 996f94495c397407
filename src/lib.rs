//! Health Tracker CLI
//!
//! 共通ライブラリのロジックを端末とJSONファイルで動かす。

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod report;
pub mod store;
