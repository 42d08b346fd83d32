use super::*;
use crate::error::DimError;
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(p(x1, y1), p(x2, y2))
}

#[test]
fn classify_dominant_axis() {
    assert_eq!(classify(&seg(0.0, 0.0, 1.0, 10.0)), Orientation::Vertical);
    assert_eq!(classify(&seg(0.0, 0.0, 10.0, 1.0)), Orientation::Horizontal);
    // direction of travel does not matter
    assert_eq!(classify(&seg(1.0, 10.0, 0.0, 0.0)), Orientation::Vertical);
    assert_eq!(classify(&seg(10.0, -1.0, 0.0, 0.0)), Orientation::Horizontal);
}

#[test]
fn classify_tie_is_horizontal() {
    assert_eq!(classify(&seg(0.0, 0.0, 5.0, 5.0)), Orientation::Horizontal);
    assert_eq!(classify(&seg(0.0, 0.0, -5.0, 5.0)), Orientation::Horizontal);
    // zero-length segment: 0 < 0 is false
    assert_eq!(classify(&seg(2.0, 2.0, 2.0, 2.0)), Orientation::Horizontal);
}

#[test]
fn partition_preserves_order() {
    let segs = [
        seg(0.0, 0.0, 0.0, 10.0),
        seg(0.0, 0.0, 10.0, 0.0),
        seg(5.0, 0.0, 5.0, 10.0),
        seg(0.0, 5.0, 10.0, 5.0),
    ];
    let (v, h) = partition_indices(&segs);
    assert_eq!(v, vec![0, 2]);
    assert_eq!(h, vec![1, 3]);
}

#[test]
fn reduce_concrete_scenario() {
    let pts = [p(0.0, 0.0), p(5.0, 2.0), p(5.0, 2.0), p(2.0, 8.0)];
    assert_eq!(
        sorted_unique(&pts, Axis::X),
        vec![p(0.0, 0.0), p(2.0, 8.0), p(5.0, 2.0)]
    );
    let e = reduce(&pts, Axis::X).unwrap();
    assert_eq!(e.first, p(0.0, 0.0));
    assert_eq!(e.last, p(5.0, 2.0));
    // same points ordered by Y first
    let ey = reduce(&pts, Axis::Y).unwrap();
    assert_eq!(ey.first, p(0.0, 0.0));
    assert_eq!(ey.last, p(2.0, 8.0));
}

#[test]
fn reduce_secondary_axis_breaks_ties() {
    let pts = [p(1.0, 9.0), p(1.0, -3.0), p(1.0, 4.0)];
    let e = reduce(&pts, Axis::X).unwrap();
    assert_eq!(e.first, p(1.0, -3.0));
    assert_eq!(e.last, p(1.0, 9.0));
}

#[test]
fn reduce_empty_fails() {
    assert!(matches!(
        reduce(&[], Axis::X),
        Err(DimError::EmptyInput { .. })
    ));
}

#[test]
fn reduce_single_point_is_degenerate() {
    let q = p(3.5, -1.0);
    let e = reduce(&[q], Axis::Y).unwrap();
    assert_eq!(e, Extent { first: q, last: q });
    assert!(e.is_degenerate());
    let e2 = reduce(&[q, q, q], Axis::X).unwrap();
    assert!(e2.is_degenerate());
}

#[test]
fn point_at_matches_normalized_evaluation() {
    let s = seg(0.0, 0.0, 10.0, 20.0);
    assert_eq!(s.point_at(0.0), p(0.0, 0.0));
    assert_eq!(s.point_at(1.0), p(10.0, 20.0));
    let q = s.point_at(0.2);
    assert!((q.x - 2.0).abs() < 1e-12 && (q.y - 4.0).abs() < 1e-12);
    assert!((s.length() - 500f64.sqrt()).abs() < 1e-12);
}

#[test]
fn dimension_lines_anchor_on_first() {
    let e = Extent {
        first: p(1.0, 2.0),
        last: p(7.0, 11.0),
    };
    let v = vertical_line(&e);
    assert_eq!(v.start, p(1.0, 2.0));
    assert_eq!(v.end, p(1.0, 11.0));
    assert_eq!(v.direction, LineDirection::Vertical);
    let h = horizontal_line(&e);
    assert_eq!(h.start, p(1.0, 2.0));
    assert_eq!(h.end, p(7.0, 2.0));
    assert_eq!(h.direction, LineDirection::Horizontal);
    assert_eq!(line_for(LineDirection::Vertical, &e), v);
    assert!((h.length() - 6.0).abs() < 1e-12);
    let moved = v.translated(p(3.0, 0.0));
    assert_eq!(moved.start, p(4.0, 2.0));
    assert_eq!(moved.end, p(4.0, 11.0));
}

#[test]
fn signed_zero_collapses_in_dedup() {
    let e = reduce(&[p(0.0, 1.0), p(-0.0, 1.0)], Axis::X).unwrap();
    assert!(e.is_degenerate());
}

#[test]
fn signed_zero_sorts_as_zero() {
    // (-0, 0) and (0, 0) are the same point and must sort next to each other
    let pts = [p(-0.0, 1.0), p(0.0, 0.0), p(-0.0, 0.0)];
    let sorted = sorted_unique(&pts, Axis::X);
    assert_eq!(sorted, vec![p(0.0, 0.0), p(0.0, 1.0)]);
    let e = reduce(&pts, Axis::X).unwrap();
    assert_eq!(e.first, p(0.0, 0.0));
    assert_eq!(e.last, p(0.0, 1.0));
    assert!(!e.is_degenerate());

    let ey = reduce(&[p(1.0, -0.0), p(0.0, 0.0), p(1.0, 0.0)], Axis::Y).unwrap();
    assert_eq!(ey.first, p(0.0, 0.0));
    assert_eq!(ey.last, p(1.0, 0.0));
}

// Integer-valued coordinates so duplicates actually occur; zeros may carry
// either sign.
fn coord() -> impl Strategy<Value = f64> {
    (-20i32..20, any::<bool>()).prop_map(|(v, neg)| {
        if v == 0 && neg {
            -0.0
        } else {
            v as f64
        }
    })
}

fn points() -> impl Strategy<Value = Vec<Point2D>> {
    prop::collection::vec((coord(), coord()), 1..24)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point2D::new(x, y)).collect())
}

fn axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y)]
}

proptest! {
    #[test]
    fn classify_matches_delta_rule(x1 in -1e3f64..1e3, y1 in -1e3f64..1e3, x2 in -1e3f64..1e3, y2 in -1e3f64..1e3) {
        let s = seg(x1, y1, x2, y2);
        let expected = if (x1 - x2).abs() < (y1 - y2).abs() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        prop_assert_eq!(classify(&s), expected);
    }

    #[test]
    fn reduce_is_order_invariant(
        (orig, shuffled) in points().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        primary in axis(),
    ) {
        prop_assert_eq!(reduce(&orig, primary).unwrap(), reduce(&shuffled, primary).unwrap());
    }

    #[test]
    fn reduce_is_idempotent(pts in points(), primary in axis()) {
        let once = sorted_unique(&pts, primary);
        prop_assert_eq!(sorted_unique(&once, primary), once.clone());
        prop_assert_eq!(reduce(&once, primary).unwrap(), reduce(&pts, primary).unwrap());
    }

    #[test]
    fn reduce_ignores_duplicates(pts in points(), primary in axis()) {
        let mut doubled = pts.clone();
        doubled.extend(pts.iter().copied());
        prop_assert_eq!(reduce(&doubled, primary).unwrap(), reduce(&pts, primary).unwrap());
    }

    #[test]
    fn extent_is_distinct_iff_more_than_one_point(pts in points(), primary in axis()) {
        let distinct = sorted_unique(&pts, primary).len();
        let e = reduce(&pts, primary).unwrap();
        prop_assert_eq!(e.is_degenerate(), distinct == 1);
        for q in &pts {
            prop_assert!(e.first.cmp_by(*q, primary).is_le());
            prop_assert!(e.last.cmp_by(*q, primary).is_ge());
        }
    }
}
