//! 指派窮舉搜尋

use flp_calc::{DistanceResolver, FlowCostCalculator};
use flp_core::{Assignment, Catalog, DistanceTable, FlowTable};
use itertools::Itertools;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ScoredCandidate, SearchResult};

/// 搜尋配置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 是否並行評估候選排列
    ///
    /// 每個候選獨立計分，開關只影響耗時；排名順序與平手裁決
    /// 在兩種模式下完全一致。
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl SearchConfig {
    /// 建構器模式：設置是否並行
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// 指派優化器
pub struct AssignmentOptimizer;

impl AssignmentOptimizer {
    /// 窮舉搜尋最小成本指派
    pub fn optimize(
        catalog: &Catalog,
        flows: &FlowTable,
        distances: &DistanceTable,
    ) -> SearchResult {
        Self::optimize_with_config(catalog, flows, distances, SearchConfig::default())
    }

    /// 以指定配置窮舉搜尋最小成本指派
    ///
    /// 依輸入順序的字典序列舉所有「從位置類型中取 |單元| 個的排列」，
    /// 逐一計分並完整保留排名清單。最小值追蹤只在嚴格更小時取代，
    /// 平手保留最早列舉的候選，結果對相同輸入完全可重現。
    pub fn optimize_with_config(
        catalog: &Catalog,
        flows: &FlowTable,
        distances: &DistanceTable,
        config: SearchConfig,
    ) -> SearchResult {
        tracing::info!(
            "開始指派搜尋：單元 {} 個，位置類型 {} 個，固定元件 {} 個，物料流 {} 筆",
            catalog.units.len(),
            catalog.slot_types.len(),
            catalog.fixed_components.len(),
            flows.len()
        );

        let start_time = std::time::Instant::now();

        // 位置不足以容納所有單元 → 候選空間為空
        if !catalog.has_enough_slots() {
            tracing::info!("位置類型少於單元數，找不到有效指派");
            return SearchResult::no_valid_assignment()
                .with_evaluation_time_ms(start_time.elapsed().as_millis());
        }

        // Step 1: 列舉候選排列（字典序，依輸入順序）
        let candidates: Vec<Vec<String>> = catalog
            .slot_types
            .iter()
            .cloned()
            .permutations(catalog.units.len())
            .collect();
        tracing::debug!("候選排列數量: {}", candidates.len());

        // Step 2: 逐候選計分；並行與否不影響排名順序
        let score_one = |permutation: Vec<String>| {
            let assignment = Assignment::from_permutation(
                &catalog.units,
                &permutation,
                &catalog.fixed_components,
            );
            let cost = Self::score(&assignment, flows, distances);
            ScoredCandidate { permutation, cost }
        };

        let ranked: Vec<ScoredCandidate> = if config.parallel {
            candidates.into_par_iter().map(score_one).collect()
        } else {
            candidates.into_iter().map(score_one).collect()
        };

        // Step 3: 依列舉順序追蹤最小值；只有嚴格更小才取代
        let mut best: Option<(usize, Decimal)> = None;
        for (index, candidate) in ranked.iter().enumerate() {
            let improved = match best {
                Some((_, current_min)) => candidate.cost < current_min,
                None => true,
            };
            if improved {
                best = Some((index, candidate.cost));
            }
        }

        let result = match best {
            Some((index, best_cost)) => {
                let best_assignment = Assignment::from_permutation(
                    &catalog.units,
                    &ranked[index].permutation,
                    &catalog.fixed_components,
                );
                tracing::info!(
                    "搜尋完成，耗時 {:?}，最佳成本 {}（第 {} 個候選）",
                    start_time.elapsed(),
                    best_cost,
                    index + 1
                );
                SearchResult::optimal(best_assignment, best_cost, ranked)
            }
            None => {
                tracing::info!("候選空間為空，找不到有效指派");
                SearchResult::no_valid_assignment()
            }
        };

        result.with_evaluation_time_ms(start_time.elapsed().as_millis())
    }

    /// 對一個指派計分
    ///
    /// 走訪指派鍵（單元 ∪ 固定元件）的所有有序相異對 (u, v)：
    /// 成對搬運成本以原始識別碼計算，再乘上指派後兩個位置之間的距離。
    fn score(assignment: &Assignment, flows: &FlowTable, distances: &DistanceTable) -> Decimal {
        let ids: Vec<&str> = assignment.ids().collect();
        let mut total = Decimal::ZERO;

        for &origin in &ids {
            for &destination in &ids {
                if origin == destination {
                    continue;
                }
                let flow = FlowCostCalculator::between(origin, destination, flows, distances);
                let slot_distance = DistanceResolver::resolve(
                    assignment.resolve(origin),
                    assignment.resolve(destination),
                    distances,
                );
                total += flow.cost * slot_distance;
            }
        }

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn two_unit_setup(reverse_distance: i64) -> (Catalog, FlowTable, DistanceTable) {
        let catalog = Catalog::new(ids(&["A", "B"]), ids(&["X", "Y"]), vec![]);
        let flows = FlowTable::from_rows(&[("A", "B", "2", "3", "M1")]).unwrap();

        let mut distances = DistanceTable::new();
        distances.insert("X".to_string(), "Y".to_string(), Decimal::from(5));
        distances.insert("Y".to_string(), "X".to_string(), Decimal::from(reverse_distance));

        (catalog, flows, distances)
    }

    #[test]
    fn test_symmetric_tie_keeps_first_enumerated() {
        // 對稱距離 → 兩個候選同分 30，平手保留最早列舉的 (A:X, B:Y)
        let (catalog, flows, distances) = two_unit_setup(5);

        let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

        assert!(result.feasible);
        assert_eq!(result.best_cost, Some(Decimal::from(30)));
        assert_eq!(result.ranked.len(), 2);
        assert_eq!(result.ranked[0].cost, Decimal::from(30));
        assert_eq!(result.ranked[1].cost, Decimal::from(30));

        let best = result.best_assignment.unwrap();
        assert_eq!(best.slot_of("A"), Some("X"));
        assert_eq!(best.slot_of("B"), Some("Y"));
    }

    #[test]
    fn test_asymmetric_distance_picks_cheaper_orientation() {
        // Y→X 距離 2 → (A:Y, B:X) 的成本 6*2=12 勝過 6*5=30
        let (catalog, flows, distances) = two_unit_setup(2);

        let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

        assert_eq!(result.best_cost, Some(Decimal::from(12)));
        let best = result.best_assignment.unwrap();
        assert_eq!(best.slot_of("A"), Some("Y"));
        assert_eq!(best.slot_of("B"), Some("X"));
    }

    #[test]
    fn test_not_enough_slots_is_infeasible() {
        let catalog = Catalog::new(ids(&["A", "B"]), ids(&["X"]), vec![]);
        let flows = FlowTable::from_rows(&[("A", "B", "2", "3", "M1")]).unwrap();
        let distances = DistanceTable::new();

        let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

        assert!(!result.feasible);
        assert!(result.best_assignment.is_none());
        assert!(result.best_cost.is_none());
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_deterministic_across_runs_and_modes() {
        let (catalog, flows, distances) = two_unit_setup(2);

        let first = AssignmentOptimizer::optimize(&catalog, &flows, &distances);
        let second = AssignmentOptimizer::optimize(&catalog, &flows, &distances);
        let sequential = AssignmentOptimizer::optimize_with_config(
            &catalog,
            &flows,
            &distances,
            SearchConfig::default().with_parallel(false),
        );

        assert_eq!(first.best_cost, second.best_cost);
        assert_eq!(first.ranked, second.ranked);
        assert_eq!(first.ranked, sequential.ranked);
    }

    #[test]
    fn test_fixed_component_contributes_to_score() {
        // 固定元件 DEPO 釘在自身位置，與單元的流量參與計分
        let catalog = Catalog::new(ids(&["A"]), ids(&["X", "Y"]), ids(&["DEPO"]));
        let flows = FlowTable::from_rows(&[("A", "DEPO", "1", "2", "M1")]).unwrap();

        let mut distances = DistanceTable::new();
        distances.insert("X".to_string(), "DEPO".to_string(), Decimal::from(3));
        distances.insert("Y".to_string(), "DEPO".to_string(), Decimal::from(7));

        let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

        // A 放在 X：2*3=6；放在 Y：2*7=14
        assert_eq!(result.best_cost, Some(Decimal::from(6)));
        let best = result.best_assignment.unwrap();
        assert_eq!(best.slot_of("A"), Some("X"));
        assert_eq!(best.slot_of("DEPO"), Some("DEPO"));
    }

    #[test]
    fn test_ranked_list_is_full_enumeration() {
        let catalog = Catalog::new(ids(&["A", "B"]), ids(&["X", "Y", "Z"]), vec![]);
        let flows = FlowTable::from_rows(&[("A", "B", "1", "1", "M1")]).unwrap();
        let distances = DistanceTable::new();

        let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

        // P(3, 2) = 6 個候選，依字典序
        assert_eq!(result.ranked.len(), 6);
        assert_eq!(result.ranked[0].permutation, ids(&["X", "Y"]));
        assert_eq!(result.ranked[1].permutation, ids(&["X", "Z"]));
        assert_eq!(result.ranked[2].permutation, ids(&["Y", "X"]));
        assert_eq!(result.ranked[3].permutation, ids(&["Y", "Z"]));
        assert_eq!(result.ranked[4].permutation, ids(&["Z", "X"]));
        assert_eq!(result.ranked[5].permutation, ids(&["Z", "Y"]));
    }

    #[test]
    fn test_no_units_scores_components_only() {
        // 單元為空 → 唯一一個空排列，只有固定元件參與計分
        let catalog = Catalog::new(vec![], ids(&["X"]), ids(&["P", "Q"]));
        let flows = FlowTable::from_rows(&[("P", "Q", "2", "2", "M1")]).unwrap();

        let mut distances = DistanceTable::new();
        distances.insert("P".to_string(), "Q".to_string(), Decimal::from(3));

        let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

        assert!(result.feasible);
        assert_eq!(result.ranked.len(), 1);
        // 內層距離因子 3 與外層（P、Q 釘在自身）再乘 3 → 2*2*3*3 = 36
        assert_eq!(result.best_cost, Some(Decimal::from(36)));
    }
}
