use super::*;

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let pos = Position::default();
    assert_eq!(pos.perft(4), 197281);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_starting_position_depth_5() {
    let pos = Position::default();
    assert_eq!(pos.perft(5), 4865609);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = Position::default();
    let split = pos.divide(3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);
}
