//! 佈置目錄模型

use serde::{Deserialize, Serialize};

use crate::{FlpError, Result};

/// 佈置目錄
///
/// 三個輸入欄位：可移動單元、候選位置類型、固定元件。
/// 各欄位長度可以不同；空白儲存格在建構時丟棄。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// 可移動單元識別碼
    pub units: Vec<String>,

    /// 候選位置類型識別碼
    pub slot_types: Vec<String>,

    /// 固定元件識別碼（不參與指派，永遠對應到自身）
    pub fixed_components: Vec<String>,
}

impl Catalog {
    /// 創建新的佈置目錄
    pub fn new(
        units: Vec<String>,
        slot_types: Vec<String>,
        fixed_components: Vec<String>,
    ) -> Self {
        Self {
            units: drop_blank_cells(units),
            slot_types: drop_blank_cells(slot_types),
            fixed_components: drop_blank_cells(fixed_components),
        }
    }

    /// 從表格欄位建構目錄
    ///
    /// 缺少任一欄位時回報 `MissingColumn`，由呼叫端決定如何呈現。
    pub fn from_columns(
        units: Option<Vec<String>>,
        slot_types: Option<Vec<String>>,
        fixed_components: Option<Vec<String>>,
    ) -> Result<Self> {
        let units = units.ok_or_else(|| FlpError::MissingColumn("units".to_string()))?;
        let slot_types =
            slot_types.ok_or_else(|| FlpError::MissingColumn("slot_types".to_string()))?;
        let fixed_components = fixed_components
            .ok_or_else(|| FlpError::MissingColumn("fixed_components".to_string()))?;

        Ok(Self::new(units, slot_types, fixed_components))
    }

    /// 候選位置是否足夠容納所有單元
    pub fn has_enough_slots(&self) -> bool {
        self.slot_types.len() >= self.units.len()
    }

    /// 參與計分的識別碼總數（單元 + 固定元件）
    pub fn placeable_count(&self) -> usize {
        self.units.len() + self.fixed_components.len()
    }
}

/// 丟棄空白儲存格
fn drop_blank_cells(cells: Vec<String>) -> Vec<String> {
    cells
        .into_iter()
        .filter(|cell| !cell.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_catalog() {
        let catalog = Catalog::new(ids(&["A", "B"]), ids(&["X", "Y", "Z"]), ids(&["DEPO"]));

        assert_eq!(catalog.units, ids(&["A", "B"]));
        assert_eq!(catalog.slot_types.len(), 3);
        assert_eq!(catalog.fixed_components, ids(&["DEPO"]));
        assert!(catalog.has_enough_slots());
        assert_eq!(catalog.placeable_count(), 3);
    }

    #[test]
    fn test_blank_cells_dropped() {
        let catalog = Catalog::new(ids(&["A", "", "  ", "B"]), ids(&["X"]), vec![]);

        assert_eq!(catalog.units, ids(&["A", "B"]));
        assert!(catalog.fixed_components.is_empty());
    }

    #[test]
    fn test_missing_column_fails() {
        let err =
            Catalog::from_columns(Some(ids(&["A"])), None, Some(vec![])).unwrap_err();
        assert!(matches!(err, FlpError::MissingColumn(c) if c == "slot_types"));
    }

    #[test]
    fn test_not_enough_slots() {
        let catalog = Catalog::new(ids(&["A", "B"]), ids(&["X"]), vec![]);
        assert!(!catalog.has_enough_slots());
    }
}
