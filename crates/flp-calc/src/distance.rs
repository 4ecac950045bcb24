//! 距離解析

use flp_core::DistanceTable;
use rust_decimal::Decimal;

/// 距離解析器
pub struct DistanceResolver;

impl DistanceResolver {
    /// 解析兩個識別碼之間的距離
    ///
    /// `origin` 必須是有效列鍵且 `destination` 是有效欄鍵才讀取儲存格；
    /// 鍵不存在或儲存格為空時一律回傳中性值 1。查詢永遠不會失敗：
    /// 傳入邏輯單元識別碼（不在距離表鍵中）是常態，不是錯誤。
    pub fn resolve(origin: &str, destination: &str, distances: &DistanceTable) -> Decimal {
        if distances.has_row(origin) && distances.has_col(destination) {
            distances
                .cell(origin, destination)
                .unwrap_or(Decimal::ONE)
        } else {
            Decimal::ONE
        }
    }
}
