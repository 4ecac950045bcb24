//! 佈置查詢示例：對選定指派回答物料與起訖點成本

use flp::{AssignmentOptimizer, Catalog, DistanceTable, FlowTable, QueryService};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 佈置查詢示例 ===\n");

    let catalog = Catalog::new(
        vec!["A".to_string(), "B".to_string()],
        vec!["X".to_string(), "Y".to_string()],
        vec![],
    );

    let flows = FlowTable::from_rows(&[
        ("A", "B", "2", "3", "M1"),
        ("A", "B", "1", "4", "M2"),
        ("B", "A", "1", "10", "M3"),
    ])?;

    let mut distances = DistanceTable::new();
    distances.insert("X".to_string(), "Y".to_string(), Decimal::from(5));
    distances.insert("Y".to_string(), "X".to_string(), Decimal::from(2));

    let result = AssignmentOptimizer::optimize(&catalog, &flows, &distances);
    let best = match result.best_assignment.as_ref() {
        Some(assignment) => assignment,
        None => {
            println!("找不到有效指派");
            return Ok(());
        }
    };

    println!("選定指派:");
    for (unit, slot) in best.mapping_for(&catalog.units) {
        println!("  - {} → {}", unit, slot);
    }

    let service = QueryService::new(&flows, &distances, best);

    // 物料查詢
    println!("\n各物料搬運成本:");
    for material_id in flows.material_ids() {
        let cost = service.cost_for_material(&material_id)?;
        println!("  - {}: {}", material_id, cost);
    }

    // 起訖點查詢
    println!("\n起訖點查詢 A → B:");
    let pair = service.cost_between("A", "B")?;
    println!("  成本 {}，物料 {:?}", pair.cost, pair.material_ids);

    Ok(())
}
