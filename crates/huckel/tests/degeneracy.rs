use huckel::{aggregate, Level};

#[test]
fn collapses_repeated_values() {
    let levels = aggregate(&[-2.0, -2.0, 0.0, 0.0, 0.0, 2.0]);
    assert_eq!(
        levels,
        vec![
            Level { energy: -2.0, degeneracy: 2 },
            Level { energy: 0.0, degeneracy: 3 },
            Level { energy: 2.0, degeneracy: 1 },
        ]
    );
}

#[test]
fn empty_input_yields_no_levels() {
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn single_value() {
    let levels = aggregate(&[0.0]);
    assert_eq!(levels, vec![Level { energy: 0.0, degeneracy: 1 }]);
}

#[test]
fn all_distinct_keeps_order() {
    let levels = aggregate(&[-1.618, -0.618, 0.618, 1.618]);
    assert_eq!(levels.len(), 4);
    for (level, &e) in levels.iter().zip(&[-1.618, -0.618, 0.618, 1.618]) {
        assert_eq!(level.energy, e);
        assert_eq!(level.degeneracy, 1);
    }
}

#[test]
fn fully_degenerate_input() {
    let levels = aggregate(&[1.0, 1.0, 1.0]);
    assert_eq!(levels, vec![Level { energy: 1.0, degeneracy: 3 }]);
}
