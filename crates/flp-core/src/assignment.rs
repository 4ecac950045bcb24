//! 指派結果模型

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單元 → 位置的指派
///
/// 鍵依登錄順序保留：先是單元（依輸入順序），再是固定元件。
/// 固定元件永遠對應到自身。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assignment {
    slots: HashMap<String, String>,
    order: Vec<String>,
}

impl Assignment {
    /// 創建空的指派
    pub fn new() -> Self {
        Self::default()
    }

    /// 從一個候選排列建構指派
    ///
    /// 單元依輸入順序與排列逐位配對，固定元件接著釘在自身位置。
    pub fn from_permutation(
        units: &[String],
        permutation: &[String],
        fixed_components: &[String],
    ) -> Self {
        let mut assignment = Self::new();
        for (unit, slot) in units.iter().zip(permutation) {
            assignment.assign(unit.clone(), slot.clone());
        }
        for component in fixed_components {
            assignment.pin(component.clone());
        }
        assignment
    }

    /// 指派一個識別碼到位置
    pub fn assign(&mut self, id: String, slot: String) {
        if !self.slots.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.slots.insert(id, slot);
    }

    /// 將識別碼釘在自身位置（固定元件）
    pub fn pin(&mut self, id: String) {
        self.assign(id.clone(), id);
    }

    /// 解析識別碼對應的位置
    ///
    /// 未指派的識別碼原樣回傳：它可能本身就是實體位置代碼。
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.slots.get(id).map(String::as_str).unwrap_or(id)
    }

    /// 取得指派的位置；未指派回傳 `None`
    pub fn slot_of(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }

    /// 所有鍵（依登錄順序）
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// 所有 (識別碼, 位置) 配對（依登錄順序）
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(move |id| (id.as_str(), self.resolve(id)))
    }

    /// 限定在指定識別碼清單內的配對（依清單順序）
    ///
    /// 呈現層用來只列出單元的落點，濾掉固定元件。
    pub fn mapping_for(&self, ids: &[String]) -> Vec<(String, String)> {
        ids.iter()
            .filter_map(|id| {
                self.slot_of(id)
                    .map(|slot| (id.clone(), slot.to_string()))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
