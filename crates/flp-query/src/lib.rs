//! # FLP Query
//!
//! 以既定指派回答搬運成本點查詢

pub mod service;

// Re-export 主要類型
pub use service::QueryService;
