use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use zpype::tween::{Ease, Segment, Tween};

#[test]
fn test_segment_yields_exactly_n_values() {
    let mut tween = Tween::single(Segment::linear(Vec2::ZERO, Vec2::new(10.0, 0.0), 5));

    let values: Vec<Vec2> = tween.by_ref().collect();
    assert_eq!(values.len(), 5);
    assert_eq!(values[4], Vec2::new(10.0, 0.0));
    assert_that(&tween.finished()).is_true();
    assert_that(&tween.advance()).is_none();
}

#[test]
fn test_exhausted_tween_stays_exhausted() {
    let mut tween = Tween::single(Segment::linear(Vec2::ZERO, Vec2::ONE, 2));
    tween.advance();
    tween.advance();

    for _ in 0..5 {
        assert_that(&tween.advance()).is_none();
        assert_that(&tween.finished()).is_true();
    }
}

#[test]
fn test_linear_segment_is_evenly_spaced() {
    let tween = Tween::single(Segment::linear(Vec2::ZERO, Vec2::new(4.0, 8.0), 4));
    let values: Vec<Vec2> = tween.collect();
    assert_eq!(
        values,
        vec![
            Vec2::new(1.0, 2.0),
            Vec2::new(2.0, 4.0),
            Vec2::new(3.0, 6.0),
            Vec2::new(4.0, 8.0),
        ]
    );
}

#[test]
fn test_hold_segment_repeats_its_value() {
    let tween = Tween::single(Segment::hold(Vec2::new(3.0, 3.0), 3));
    let values: Vec<Vec2> = tween.collect();
    assert_eq!(values, vec![Vec2::new(3.0, 3.0); 3]);
}

#[test]
fn test_chain_is_consumed_in_order_with_no_lookahead() {
    // delay, then move, then hold: the shape of every banner slide.
    let start = Vec2::new(0.0, -10.0);
    let mid = Vec2::new(0.0, 50.0);
    let tween = Tween::new([
        Segment::hold(start, 2),
        Segment::linear(start, mid, 4),
        Segment::hold(mid, 2),
    ]);

    assert_eq!(tween.remaining(), 8);
    let values: Vec<Vec2> = tween.collect();
    assert_eq!(values.len(), 8);
    assert_eq!(values[0], start);
    assert_eq!(values[1], start);
    assert_eq!(values[5], mid);
    assert_eq!(values[7], mid);
}

#[test]
fn test_zero_tick_segments_are_skipped() {
    let tween = Tween::new([
        Segment::linear(Vec2::ZERO, Vec2::ONE, 0),
        Segment::linear(Vec2::ONE, Vec2::splat(2.0), 2),
    ]);
    let values: Vec<Vec2> = tween.collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values[1], Vec2::splat(2.0));
}

#[test]
fn test_eased_segment_ends_exactly_at_endpoint() {
    for ease in [Ease::Linear, Ease::QuadIn, Ease::QuadOut] {
        let tween = Tween::single(Segment::new(Vec2::ZERO, Vec2::new(7.0, -3.0), 9, ease));
        let last = tween.last().unwrap();
        assert_eq!(last, Vec2::new(7.0, -3.0));
    }
}

#[test]
fn test_quad_easing_shape() {
    // QuadIn starts slow, QuadOut starts fast.
    assert_that(&(Ease::QuadIn.apply(0.25) < 0.25)).is_true();
    assert_that(&(Ease::QuadOut.apply(0.25) > 0.25)).is_true();
    assert_that(&Ease::QuadIn.apply(1.0)).is_equal_to(1.0);
    assert_that(&Ease::QuadOut.apply(1.0)).is_equal_to(1.0);
}
