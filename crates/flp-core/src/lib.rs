//! # FLP Core
//!
//! 設施佈置核心資料模型與類型定義

pub mod assignment;
pub mod catalog;
pub mod distance;
pub mod flow;
pub mod numeric;

// Re-export 主要類型
pub use assignment::Assignment;
pub use catalog::Catalog;
pub use distance::DistanceTable;
pub use flow::{FlowRecord, FlowTable};
pub use numeric::parse_locale_decimal;

/// FLP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FlpError {
    #[error("找不到必要欄位: {0}")]
    MissingColumn(String),

    #[error("無法解析數值: {0}")]
    MalformedNumber(String),

    #[error("查詢的識別碼不存在: {0}")]
    UnknownIdentifier(String),

    #[error("距離矩陣維度不符: {0}")]
    InvalidDistanceMatrix(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FlpError>;
