// ==========================================
// ReconciliationMerger 单元测试
// ==========================================


use production_progress::ReconciliationMerger;
use test_helpers::{actual, dt, plan, target_date};

#[test]
fn test_disjoint_inputs_concatenate() {
    let merger = ReconciliationMerger::new();
    let plans = vec![
        plan("L1", "甲社", "製品A", Some(dt(9, 0)), Some(dt(10, 0)), Some(100.0)),
        plan("L2", "乙社", "製品B", Some(dt(10, 0)), Some(dt(11, 0)), Some(50.0)),
    ];
    let actuals = vec![actual("L3", "丙社", "製品C", Some(30.0), &[(dt(9, 0), dt(9, 30))])];

    let merged = merger.merge(&plans, &actuals);
    // 键不相交: 行数 = 计划行数 + 实绩行数
    assert_eq!(merged.len(), 3);

    // 计划行在前, 实绩侧为空
    assert!(merged[0].has_plan());
    assert!(!merged[0].has_actual_start());
    // 仅实绩行在后, 计划侧为空
    assert!(!merged[2].has_plan());
    assert_eq!(merged[2].actual_quantity, Some(30.0));
    assert_eq!(merged[2].status, None); // 分类器填充前为空
}

#[test]
fn test_overlapping_keys_aggregate() {
    let merger = ReconciliationMerger::new();
    let plans = vec![plan(
        "L1",
        "甲社",
        "製品A",
        Some(dt(9, 0)),
        Some(dt(12, 0)),
        Some(100.0),
    )];
    // 同键两条实绩: 数量求和, 开始取最小, 结束取最大, 区间按来源顺序拼接
    let actuals = vec![
        actual("L1", "甲社", "製品A", Some(40.0), &[(dt(9, 10), dt(10, 0))]),
        actual(
            "L1",
            "甲社",
            "製品A",
            Some(55.0),
            &[(dt(10, 30), dt(11, 0)), (dt(11, 15), dt(11, 45))],
        ),
    ];

    let merged = merger.merge(&plans, &actuals);
    assert_eq!(merged.len(), 1);

    let row = &merged[0];
    assert_eq!(row.actual_quantity, Some(95.0));
    assert_eq!(row.actual_start, Some(dt(9, 10)));
    assert_eq!(row.actual_end, Some(dt(11, 45)));
    // 50 + 30 + 30 分钟
    assert_eq!(row.actual_duration_minutes, Some(110.0));
    assert_eq!(row.session_starts, vec![dt(9, 10), dt(10, 30), dt(11, 15)]);
    assert_eq!(row.session_ends, vec![dt(10, 0), dt(11, 0), dt(11, 45)]);
    // 计划字段原样
    assert_eq!(row.planned_quantity, Some(100.0));
    assert_eq!(row.date, Some(target_date()));
}

#[test]
fn test_empty_actuals_pass_plan_through() {
    let merger = ReconciliationMerger::new();
    let plans = vec![plan("L1", "甲社", "製品A", Some(dt(9, 0)), Some(dt(10, 0)), Some(10.0))];

    let merged = merger.merge(&plans, &[]);
    assert_eq!(merged.len(), 1);
    assert!(merged[0].actual_start.is_none());
    assert!(merged[0].actual_duration_minutes.is_none());
    assert!(merged[0].session_starts.is_empty());
}

#[test]
fn test_empty_plan_passes_actuals_through() {
    let merger = ReconciliationMerger::new();
    let actuals = vec![
        actual("L1", "甲社", "製品A", Some(10.0), &[(dt(9, 0), dt(9, 30))]),
        actual("L2", "乙社", "製品B", None, &[]),
    ];

    let merged = merger.merge(&[], &actuals);
    assert_eq!(merged.len(), 2);
    assert!(merged.iter().all(|row| !row.has_plan()));
    // 无区间的实绩: 开始/结束为空, 时长合计为 0
    assert!(merged[1].actual_start.is_none());
    assert_eq!(merged[1].actual_duration_minutes, Some(0.0));
}

#[test]
fn test_actual_only_keys_keep_first_seen_order() {
    let merger = ReconciliationMerger::new();
    let actuals = vec![
        actual("L9", "丙社", "製品C", Some(1.0), &[]),
        actual("L1", "甲社", "製品A", Some(2.0), &[]),
        actual("L5", "乙社", "製品B", Some(3.0), &[]),
    ];

    let merged = merger.merge(&[], &actuals);
    let lines: Vec<&str> = merged.iter().map(|r| r.line.as_str()).collect();
    assert_eq!(lines, vec!["L9", "L1", "L5"]);
}

#[test]
fn test_quantity_none_stays_none_when_all_absent() {
    let merger = ReconciliationMerger::new();
    let actuals = vec![actual("L1", "甲社", "製品A", None, &[(dt(9, 0), dt(9, 30))])];

    let merged = merger.merge(&[], &actuals);
    // 全部缺失时不伪造 0
    assert_eq!(merged[0].actual_quantity, None);
}

#[test]
fn test_plan_without_start_never_joins() {
    let merger = ReconciliationMerger::new();
    // 无计划开始时刻 -> 无日期键 -> 不与实绩合流
    let plans = vec![plan("L1", "甲社", "製品A", None, Some(dt(10, 0)), Some(10.0))];
    let actuals = vec![actual("L1", "甲社", "製品A", Some(5.0), &[(dt(9, 0), dt(9, 30))])];

    let merged = merger.merge(&plans, &actuals);
    assert_eq!(merged.len(), 2);
    assert!(merged[0].actual_start.is_none()); // 计划行未并入实绩
    assert!(!merged[1].has_plan()); // 实绩独立成行
}
