use tilecolor::graph::Topology;
use tilecolor::limits::{MAX_COLS, MAX_ROWS};
use tilecolor::topology::grid;
use tilecolor::Board;

#[test]
fn non_positive_dimensions_build_nothing() {
    for (r, c) in [(0, 0), (0, 3), (3, 0), (-1, 4), (i32::MIN, i32::MIN)] {
        let g = grid::build(r, c);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.topology(), Topology::Grid { rows: 0, cols: 0 });
    }
}

#[test]
fn oversized_dimensions_are_clamped() {
    let g = grid::build(i32::MAX, 1);
    assert_eq!(g.topology(), Topology::Grid { rows: MAX_ROWS, cols: 1 });
    assert_eq!(g.vertex_count(), 4 * MAX_ROWS as usize);
    let g = grid::build(1, MAX_COLS as i32 + 10);
    assert_eq!(g.tile_count(), MAX_COLS as usize);
}

#[test]
fn single_row_and_column_boards() {
    let row = grid::build(1, 5);
    let col = grid::build(5, 1);
    assert_eq!(row.edge_count(), 5 * 4 + 4);
    assert_eq!(col.edge_count(), 5 * 4 + 4);
    assert!(row.lookup("A5-Right").is_some());
    assert!(col.lookup("E1-Bottom").is_some());
}

#[test]
fn empty_board_ignores_events() {
    let mut b = Board::new(0, 7);
    assert!(b.region_enter("A1-Top").is_err());
    assert!(!b.region_leave("A1-Top"));
    assert!(b.hex_colors().is_empty());
    assert!(b.color_arrays().ids.is_empty());
    let v = b.to_json_value();
    assert_eq!(v["vertices"].as_array().map(|a| a.len()), Some(0));
    b.resize(1, 1);
    assert_eq!(b.hex_colors().len(), 4);
}

#[test]
fn row_labels_roll_over_after_z() {
    let g = grid::build(28, 1);
    assert!(g.lookup("Z1-Top").is_some());
    assert!(g.lookup("AA1-Top").is_some());
    assert!(g.lookup("AB1-Left").is_some());
    assert!(g.lookup("AC1-Top").is_none());
}
