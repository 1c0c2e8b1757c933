use number_tile::digit::Digit;
use number_tile::geometry::{Point, Rect};
use number_tile::grid::{Grid, Size};
use number_tile::sprite::{frame_source, Face, Frame};
use number_tile::TileError;

#[test]
fn test_digit_words() {
    let words: Vec<&str> = Digit::all().map(|d| d.word()).collect();

    assert_eq!(
        words,
        vec!["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"]
    );
    assert_eq!(Digit::try_from(0), Err(TileError::UnsupportedNumber(0)));
    assert_eq!(Digit::try_from(10), Err(TileError::UnsupportedNumber(10)));
}

#[test]
fn test_asset_names() {
    let four = Digit::try_from(4).unwrap();

    assert_eq!(Face::Normal.asset_name(four), "four");
    assert_eq!(Face::Blinking.asset_name(four), "blinkingfour");
}

#[test]
fn test_rect_contains_half_open() {
    let rect = Rect::from_center(Point::new(100, 100), 40);

    assert_eq!(rect, Rect::new(80, 80, 40, 40));
    assert!(rect.contains(80, 80));
    assert!(rect.contains(119, 119));
    assert!(!rect.contains(120, 100));
    assert!(!rect.contains(100, 120));
    assert!(!rect.contains(79, 100));
    assert!(!rect.contains(100, 79));
    assert!(!Rect::from_center(Point::new(0, 0), 0).contains(0, 0));
}

#[test]
fn test_frame_source() {
    assert_eq!(frame_source((80, 40), Frame::First), Rect::new(0, 0, 40, 40));
    assert_eq!(frame_source((80, 40), Frame::Second), Rect::new(40, 0, 40, 40));
    assert_eq!(Frame::First.toggle(), Frame::Second);
    assert_eq!(Frame::Second.toggle(), Frame::First);
}

#[test]
fn test_size_from_str() {
    assert_eq!("640x480".parse::<Size>(), Ok(Size::new(640, 480)));
    assert!("640".parse::<Size>().is_err());
    assert!("ax480".parse::<Size>().is_err());
}

#[test]
fn test_grid_row_major() {
    let grid = Grid::new(3, 2, &mut |x, y| (x, y));

    assert_eq!(grid.size(), 6);
    assert_eq!(grid.get(2, 1), Some(&(2, 1)));
    assert_eq!(grid.get(3, 0), None);
    assert_eq!(grid.get(0, 2), None);

    let order: Vec<_> = grid.iter().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);

    let failed: Result<Grid<u8>, &str> = Grid::try_new(2, 2, &mut |x, _| if x == 1 { Err("boom") } else { Ok(0) });
    assert_eq!(failed.err(), Some("boom"));
}
