//! # FLP
//!
//! 設施佈置優化引擎：把可移動單元指派到候選位置，
//! 使加權搬運總成本最小，並對選定指派回答成本點查詢。

// Re-export 主要類型
pub use flp_calc::{DistanceResolver, FlowCost, FlowCostCalculator};
pub use flp_core::{
    parse_locale_decimal, Assignment, Catalog, DistanceTable, FlowRecord, FlowTable, FlpError,
    Result,
};
pub use flp_optimizer::{AssignmentOptimizer, ScoredCandidate, SearchConfig, SearchResult};
pub use flp_query::QueryService;
