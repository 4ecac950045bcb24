//! # FLP Calculation Engine
//!
//! 搬運成本與距離解析核心

pub mod distance;
pub mod flow_cost;

// Re-export 主要類型
pub use distance::DistanceResolver;
pub use flow_cost::{FlowCost, FlowCostCalculator};
