use partition_dp::{PartitionError, PartitionSolver, Strategy};

fn solvers() -> impl Iterator<Item = PartitionSolver> {
    Strategy::ALL
        .into_iter()
        .map(|s| PartitionSolver::builder().with_strategy(s).build())
}

#[test]
fn invalid_length() {
    for solver in solvers() {
        assert_eq!(
            solver.solve(&[], 0, 1),
            Err(PartitionError::InvalidLength { n: 0, len: 0 })
        );
        assert_eq!(
            solver.solve(&[], 1, 1),
            Err(PartitionError::InvalidLength { n: 1, len: 0 })
        );
        assert_eq!(
            solver.solve(&[1, 2, 3], 0, 1),
            Err(PartitionError::InvalidLength { n: 0, len: 3 })
        );
        assert_eq!(
            solver.solve(&[1, 2, 3], 4, 1),
            Err(PartitionError::InvalidLength { n: 4, len: 3 })
        );
    }
}

#[test]
fn invalid_painter_count() {
    for solver in solvers() {
        assert_eq!(
            solver.solve(&[1, 2, 3], 3, 0),
            Err(PartitionError::InvalidPainterCount { k: 0 })
        );
    }
}

#[test]
fn invalid_board_value() {
    for solver in solvers() {
        assert_eq!(
            solver.solve(&[1, 0, 3], 3, 2),
            Err(PartitionError::InvalidBoardValue { index: 1, value: 0 })
        );
        assert_eq!(
            solver.solve(&[1, 2, -3], 1, 2),
            Err(PartitionError::InvalidBoardValue {
                index: 2,
                value: -3
            })
        );
    }
}

#[test]
fn length_then_painters_then_values() {
    for solver in solvers() {
        assert!(matches!(
            solver.solve(&[-1, -2], 5, 0),
            Err(PartitionError::InvalidLength { .. })
        ));
        assert!(matches!(
            solver.solve(&[-1, -2], 2, 0),
            Err(PartitionError::InvalidPainterCount { .. })
        ));
        assert!(matches!(
            solver.solve(&[-1, -2], 2, 1),
            Err(PartitionError::InvalidBoardValue { index: 0, .. })
        ));
    }
}
