use gridstar_core::Point;

/// Straight-line (L2) distance between two points. Used as the A* estimate.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance: the number of king moves between two points on
/// an empty board.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_matches_pythagoras() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(7, 7), Point::new(7, 7)), 0.0);
        assert_eq!(
            euclidean(Point::new(1, 2), Point::new(4, 6)),
            euclidean(Point::new(4, 6), Point::new(1, 2))
        );
    }

    #[test]
    fn chebyshev_counts_king_moves() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, 4)), 4);
        assert_eq!(chebyshev(Point::new(5, 1), Point::new(2, 1)), 3);
        assert_eq!(chebyshev(Point::new(2, 2), Point::new(2, 2)), 0);
    }

    #[test]
    fn euclidean_never_below_chebyshev() {
        for x in -5..=5 {
            for y in -5..=5 {
                let p = Point::new(x, y);
                assert!(euclidean(Point::ZERO, p) >= f64::from(chebyshev(Point::ZERO, p)));
            }
        }
    }
}
