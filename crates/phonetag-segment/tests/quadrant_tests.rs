use phonetag_segment::{Quadrant, split_quadrants};

#[test]
fn test_quadrant_order_and_names() {
    let names: Vec<&str> = Quadrant::ALL.iter().map(|q| q.name()).collect();
    assert_eq!(names, ["top-left", "top-right", "bottom-left", "bottom-right"]);
    assert_eq!(Quadrant::BottomLeft.to_string(), "bottom-left");
}

#[test]
fn test_split_even_sizes() {
    let mut buffer = vec![0u32; 36];
    let quadrants = split_quadrants(&mut buffer, 6);
    for q in &quadrants {
        assert_eq!(q.pixel_count(), 9);
    }
}

#[test]
fn test_split_odd_size_far_quadrants_larger() {
    let mut buffer = vec![0u32; 25];
    let [top_left, top_right, bottom_left, bottom_right] = split_quadrants(&mut buffer, 5);
    assert_eq!(top_left.pixel_count(), 4);
    assert_eq!(top_right.pixel_count(), 6);
    assert_eq!(bottom_left.pixel_count(), 6);
    assert_eq!(bottom_right.pixel_count(), 9);
}

#[test]
fn test_split_writes_land_in_own_region() {
    let size = 4;
    let mut buffer = vec![0usize; size * size];
    for (tag, mut quadrant) in split_quadrants(&mut buffer, size).into_iter().enumerate() {
        let xs = quadrant.x_range();
        for (_, row) in quadrant.rows_mut() {
            assert_eq!(row.len(), xs.len());
            row.fill(tag + 1);
        }
    }

    #[rustfmt::skip]
    let expected = vec![
        1, 1, 2, 2,
        1, 1, 2, 2,
        3, 3, 4, 4,
        3, 3, 4, 4,
    ];
    assert_eq!(buffer, expected);
}

#[test]
fn test_rows_carry_absolute_y() {
    let mut buffer = vec![0u8; 9];
    let [_, _, mut bottom_left, _] = split_quadrants(&mut buffer, 3);
    let ys: Vec<usize> = bottom_left.rows_mut().map(|(y, _)| y).collect();
    assert_eq!(ys, vec![1, 2]);
}

#[test]
fn test_split_size_one() {
    let mut buffer = vec![0u8; 1];
    let quadrants = split_quadrants(&mut buffer, 1);
    let counts: Vec<usize> = quadrants.iter().map(|q| q.pixel_count()).collect();
    assert_eq!(counts, vec![0, 0, 0, 1]);
}

#[test]
#[should_panic]
fn test_split_wrong_length_panics() {
    let mut buffer = vec![0u8; 10];
    let _ = split_quadrants(&mut buffer, 3);
}
