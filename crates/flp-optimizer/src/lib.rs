//! # FLP Optimizer
//!
//! 指派搜尋模組（窮舉排列、計分、取最小成本）

pub mod search;

use flp_core::Assignment;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Re-export 主要類型
pub use search::{AssignmentOptimizer, SearchConfig};

/// 單一候選排列的計分結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// 候選排列（與單元依輸入順序逐位配對）
    pub permutation: Vec<String>,

    /// 該候選的總搬運成本
    pub cost: Decimal,
}

/// 搜尋結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// 是否存在有效指派
    pub feasible: bool,

    /// 最佳指派
    pub best_assignment: Option<Assignment>,

    /// 最佳總成本
    pub best_cost: Option<Decimal>,

    /// 所有候選的計分（依列舉順序）
    pub ranked: Vec<ScoredCandidate>,

    /// 計算耗時（毫秒）
    pub evaluation_time_ms: Option<u128>,
}

impl SearchResult {
    /// 創建可行的搜尋結果
    pub fn optimal(
        best_assignment: Assignment,
        best_cost: Decimal,
        ranked: Vec<ScoredCandidate>,
    ) -> Self {
        Self {
            feasible: true,
            best_assignment: Some(best_assignment),
            best_cost: Some(best_cost),
            ranked,
            evaluation_time_ms: None,
        }
    }

    /// 創建「找不到有效指派」的結果
    ///
    /// 候選位置少於單元數時的正常結局，不是錯誤。
    pub fn no_valid_assignment() -> Self {
        Self {
            feasible: false,
            best_assignment: None,
            best_cost: None,
            ranked: Vec::new(),
            evaluation_time_ms: None,
        }
    }

    /// 設置計算耗時
    pub fn with_evaluation_time_ms(mut self, elapsed_ms: u128) -> Self {
        self.evaluation_time_ms = Some(elapsed_ms);
        self
    }
}
