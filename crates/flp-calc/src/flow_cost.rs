//! 成對搬運成本計算

use flp_core::{DistanceTable, FlowTable};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceResolver;

/// 成對搬運成本計算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowCost {
    /// 累計成本
    pub cost: Decimal,

    /// 貢獻成本的物料代碼（表格順序）
    pub material_ids: Vec<String>,
}

impl FlowCost {
    /// 零成本、無物料的空結果
    pub fn zero() -> Self {
        Self {
            cost: Decimal::ZERO,
            material_ids: Vec::new(),
        }
    }
}

/// 成對搬運成本計算器
pub struct FlowCostCalculator;

impl FlowCostCalculator {
    /// 計算兩個識別碼之間的有方向搬運成本
    ///
    /// 逐列累加 `頻率 × 單位成本 × 距離`，物料代碼依表格順序收集；
    /// 沒有符合的列時回傳零成本空結果，不是錯誤。
    ///
    /// 距離以「傳入的這兩個識別碼」解析。呼叫端若傳的是邏輯單元
    /// 識別碼，距離表查不到鍵，這一段因子退化為 1，實際的位置距離
    /// 由呼叫端以指派後的位置另外乘上。兩次解析各自獨立，不可合併：
    /// 當這兩個識別碼恰好同時也是距離表的鍵時，兩段因子都會生效。
    pub fn between(
        origin: &str,
        destination: &str,
        flows: &FlowTable,
        distances: &DistanceTable,
    ) -> FlowCost {
        let mut total = Decimal::ZERO;
        let mut material_ids = Vec::new();

        for record in flows.between(origin, destination) {
            let distance = DistanceResolver::resolve(origin, destination, distances);
            total += record.frequency * record.unit_cost * distance;
            material_ids.push(record.material_id.clone());
        }

        tracing::trace!(
            "成對成本 {} → {}: {} ({} 筆記錄)",
            origin,
            destination,
            total,
            material_ids.len()
        );

        FlowCost {
            cost: total,
            material_ids,
        }
    }
}
