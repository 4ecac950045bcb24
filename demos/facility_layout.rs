//! 設施佈置優化示例

use flp::{AssignmentOptimizer, Catalog, DistanceTable, FlowTable};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 設施佈置優化示例 ===\n");

    // 創建佈置目錄：三個可移動單元、三個候選位置、一個固定倉庫
    let catalog = Catalog::new(
        vec!["KESIM".to_string(), "KAYNAK".to_string(), "MONTAJ".to_string()],
        vec!["S1".to_string(), "S2".to_string(), "S3".to_string()],
        vec!["DEPO".to_string()],
    );

    // 物料流表（頻率與單位成本為地區格式字串）
    let flows = FlowTable::from_rows(&[
        ("KESIM", "KAYNAK", "6", "1,2", "M-100"),
        ("KAYNAK", "MONTAJ", "4", "2", "M-200"),
        ("MONTAJ", "DEPO", "8", "0,5", "M-300"),
        ("DEPO", "KESIM", "2", "1", "M-400"),
    ])?;

    // 距離表
    let mut distances = DistanceTable::new();
    for (row, col, d) in [
        ("S1", "S2", 2),
        ("S2", "S1", 2),
        ("S1", "S3", 5),
        ("S3", "S1", 5),
        ("S2", "S3", 3),
        ("S3", "S2", 3),
        ("S1", "DEPO", 4),
        ("DEPO", "S1", 4),
        ("S2", "DEPO", 2),
        ("DEPO", "S2", 2),
        ("S3", "DEPO", 1),
        ("DEPO", "S3", 1),
    ] {
        distances.insert(row.to_string(), col.to_string(), Decimal::from(d));
    }

    println!("單元: {:?}", catalog.units);
    println!("候選位置: {:?}", catalog.slot_types);
    println!("固定元件: {:?}\n", catalog.fixed_components);

    // 窮舉搜尋最小成本指派
    let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);

    if !result.feasible {
        println!("找不到有效指派");
        return Ok(());
    }

    let best = result.best_assignment.as_ref().expect("可行結果必有最佳指派");

    println!("最佳佈置:");
    for (unit, slot) in best.mapping_for(&catalog.units) {
        println!("  - {} → {}", unit, slot);
    }
    println!(
        "\n總搬運成本: {}",
        result.best_cost.expect("可行結果必有最佳成本")
    );
    println!("評估候選數: {}", result.ranked.len());
    if let Some(elapsed_ms) = result.evaluation_time_ms {
        println!("耗時: {} ms", elapsed_ms);
    }

    println!("\n所有候選（依列舉順序）:");
    for (index, candidate) in result.ranked.iter().enumerate() {
        println!(
            "  {}. {:?} → 成本 {}",
            index + 1,
            candidate.permutation,
            candidate.cost
        );
    }

    Ok(())
}
