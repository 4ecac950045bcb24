//! 物料流模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::numeric::parse_locale_decimal;
use crate::Result;

/// 物料流記錄
///
/// 一筆有方向的物料搬運：(A→B) 與 (B→A) 是互相獨立的記錄集合。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 起點識別碼
    pub origin: String,

    /// 終點識別碼
    pub destination: String,

    /// 搬運頻率
    pub frequency: Decimal,

    /// 單位搬運成本
    pub unit_cost: Decimal,

    /// 物料代碼
    pub material_id: String,
}

impl FlowRecord {
    /// 創建新的物料流記錄
    pub fn new(
        origin: String,
        destination: String,
        frequency: Decimal,
        unit_cost: Decimal,
        material_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            destination,
            frequency,
            unit_cost,
            material_id,
        }
    }

    /// 從原始表格列解析記錄
    ///
    /// 頻率與單位成本為地區格式字串，建構時一次性驗證；
    /// 無法解析的值回報 `MalformedNumber`，整批載入失敗。
    pub fn parse(
        origin: &str,
        destination: &str,
        frequency: &str,
        unit_cost: &str,
        material_id: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            origin.to_string(),
            destination.to_string(),
            parse_locale_decimal(frequency)?,
            parse_locale_decimal(unit_cost)?,
            material_id.to_string(),
        ))
    }

    /// 檢查是否為指定方向的記錄
    pub fn is_between(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

/// 物料流表
///
/// 不可變快照：載入後只供查詢，不再重新驗證。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowTable {
    records: Vec<FlowRecord>,
}

impl FlowTable {
    /// 創建新的物料流表
    pub fn new(records: Vec<FlowRecord>) -> Self {
        Self { records }
    }

    /// 從原始表格列建構物料流表
    ///
    /// 列順序保留，後續的物料代碼收集依此順序輸出。
    pub fn from_rows(rows: &[(&str, &str, &str, &str, &str)]) -> Result<Self> {
        let records = rows
            .iter()
            .map(|(origin, destination, frequency, unit_cost, material_id)| {
                FlowRecord::parse(origin, destination, frequency, unit_cost, material_id)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(records))
    }

    /// 所有記錄（表格順序）
    pub fn records(&self) -> &[FlowRecord] {
        &self.records
    }

    /// 指定方向的記錄（表格順序）
    pub fn between<'a>(
        &'a self,
        origin: &'a str,
        destination: &'a str,
    ) -> impl Iterator<Item = &'a FlowRecord> {
        self.records
            .iter()
            .filter(move |record| record.is_between(origin, destination))
    }

    /// 過濾出指定物料的子表
    pub fn with_material(&self, material_id: &str) -> FlowTable {
        FlowTable::new(
            self.records
                .iter()
                .filter(|record| record.material_id == material_id)
                .cloned()
                .collect(),
        )
    }

    /// 檢查物料代碼是否存在
    pub fn contains_material(&self, material_id: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.material_id == material_id)
    }

    /// 檢查識別碼是否出現在任一記錄的起點或終點
    pub fn contains_location(&self, id: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.origin == id || record.destination == id)
    }

    /// 不重複的物料代碼（表格順序）
    pub fn material_ids(&self) -> Vec<String> {
        unique_in_order(self.records.iter().map(|r| r.material_id.as_str()))
    }

    /// 不重複的起點識別碼（表格順序）
    pub fn origins(&self) -> Vec<String> {
        unique_in_order(self.records.iter().map(|r| r.origin.as_str()))
    }

    /// 不重複的終點識別碼（表格順序）
    pub fn destinations(&self) -> Vec<String> {
        unique_in_order(self.records.iter().map(|r| r.destination.as_str()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 依首次出現順序去除重複
fn unique_in_order<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for id in ids {
        if seen.insert(id) {
            result.push(id.to_string());
        }
    }
    result
}
