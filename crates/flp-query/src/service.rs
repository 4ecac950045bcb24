//! 查詢服務

use flp_calc::{DistanceResolver, FlowCost, FlowCostCalculator};
use flp_core::{Assignment, DistanceTable, FlowTable, FlpError, Result};
use rust_decimal::Decimal;

/// 查詢服務
///
/// 持有物料流表、距離表與已選定指派的唯讀快照；
/// 查詢之間沒有共享可變狀態，重複查詢回傳相同結果。
pub struct QueryService<'a> {
    flows: &'a FlowTable,
    distances: &'a DistanceTable,
    assignment: &'a Assignment,
}

impl<'a> QueryService<'a> {
    /// 創建新的查詢服務
    pub fn new(
        flows: &'a FlowTable,
        distances: &'a DistanceTable,
        assignment: &'a Assignment,
    ) -> Self {
        Self {
            flows,
            distances,
            assignment,
        }
    }

    /// 查詢單一物料的搬運成本
    ///
    /// 以該物料第一筆記錄的起訖點為準，在過濾出該物料的子表上
    /// 累加成本，再乘上指派後兩個位置之間的距離。
    /// 物料代碼不存在時回報 `UnknownIdentifier`，不會默默回傳 0。
    pub fn cost_for_material(&self, material_id: &str) -> Result<Decimal> {
        let filtered = self.flows.with_material(material_id);
        let first = filtered
            .records()
            .first()
            .ok_or_else(|| FlpError::UnknownIdentifier(material_id.to_string()))?;

        let origin = first.origin.clone();
        let destination = first.destination.clone();

        let flow = FlowCostCalculator::between(&origin, &destination, &filtered, self.distances);
        let slot_distance = DistanceResolver::resolve(
            self.assignment.resolve(&origin),
            self.assignment.resolve(&destination),
            self.distances,
        );

        tracing::debug!(
            "物料 {} 查詢：{} → {}，成本 {}",
            material_id,
            origin,
            destination,
            flow.cost * slot_distance
        );

        Ok(flow.cost * slot_distance)
    }

    /// 查詢兩個識別碼之間的搬運成本與貢獻物料
    ///
    /// 未過濾物料的成對成本，乘上指派後位置距離；同時回傳貢獻的
    /// 物料代碼（表格順序）。起訖點必須出現在物料流表中（任一筆
    /// 記錄的起點或終點），否則回報 `UnknownIdentifier`。
    pub fn cost_between(&self, origin: &str, destination: &str) -> Result<FlowCost> {
        if !self.flows.contains_location(origin) {
            return Err(FlpError::UnknownIdentifier(origin.to_string()));
        }
        if !self.flows.contains_location(destination) {
            return Err(FlpError::UnknownIdentifier(destination.to_string()));
        }

        let flow = FlowCostCalculator::between(origin, destination, self.flows, self.distances);
        let slot_distance = DistanceResolver::resolve(
            self.assignment.resolve(origin),
            self.assignment.resolve(destination),
            self.distances,
        );

        Ok(FlowCost {
            cost: flow.cost * slot_distance,
            material_ids: flow.material_ids,
        })
    }
}
