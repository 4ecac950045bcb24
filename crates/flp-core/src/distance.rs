//! 距離表模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::{FlpError, Result};

/// 實體位置間的距離表
///
/// 以列鍵與欄鍵索引的稀疏矩陣。允許不對稱（A→B 與 B→A 可以不同），
/// 也允許缺格：鍵存在但儲存格為空是合法狀態。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistanceTable {
    row_keys: HashSet<String>,
    col_keys: HashSet<String>,
    cells: HashMap<String, HashMap<String, Decimal>>,
}

impl DistanceTable {
    /// 創建空的距離表
    pub fn new() -> Self {
        Self::default()
    }

    /// 從完整矩陣建構距離表
    ///
    /// `cells[i][j]` 對應 `row_ids[i]` → `col_ids[j]`；`None` 表示空儲存格。
    pub fn from_matrix(
        row_ids: Vec<String>,
        col_ids: Vec<String>,
        cells: Vec<Vec<Option<Decimal>>>,
    ) -> Result<Self> {
        if cells.len() != row_ids.len() {
            return Err(FlpError::InvalidDistanceMatrix(format!(
                "列數 {} 與列鍵數 {} 不符",
                cells.len(),
                row_ids.len()
            )));
        }

        let mut table = Self::new();
        for col_id in &col_ids {
            table.add_col_key(col_id.clone());
        }

        for (row_id, row) in row_ids.iter().zip(cells) {
            table.add_row_key(row_id.clone());
            if row.len() != col_ids.len() {
                return Err(FlpError::InvalidDistanceMatrix(format!(
                    "列 {} 的欄數 {} 與欄鍵數 {} 不符",
                    row_id,
                    row.len(),
                    col_ids.len()
                )));
            }
            for (col_id, cell) in col_ids.iter().zip(row) {
                if let Some(distance) = cell {
                    table.insert(row_id.clone(), col_id.clone(), distance);
                }
            }
        }

        Ok(table)
    }

    /// 設定一格距離，同時登錄列鍵與欄鍵
    pub fn insert(&mut self, row_id: String, col_id: String, distance: Decimal) {
        self.row_keys.insert(row_id.clone());
        self.col_keys.insert(col_id.clone());
        self.cells.entry(row_id).or_default().insert(col_id, distance);
    }

    /// 登錄列鍵（允許沒有任何儲存格）
    pub fn add_row_key(&mut self, row_id: String) {
        self.row_keys.insert(row_id);
    }

    /// 登錄欄鍵（允許沒有任何儲存格）
    pub fn add_col_key(&mut self, col_id: String) {
        self.col_keys.insert(col_id);
    }

    /// 檢查是否為有效列鍵
    pub fn has_row(&self, id: &str) -> bool {
        self.row_keys.contains(id)
    }

    /// 檢查是否為有效欄鍵
    pub fn has_col(&self, id: &str) -> bool {
        self.col_keys.contains(id)
    }

    /// 取得儲存格；缺格回傳 `None`
    pub fn cell(&self, row_id: &str, col_id: &str) -> Option<Decimal> {
        self.cells.get(row_id)?.get(col_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty() && self.col_keys.is_empty()
    }
}
