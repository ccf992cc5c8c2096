use folio_wasm::gate::{GateOutcome, GateState};
use folio_wasm::paint::{Painter, Rgba};
use folio_wasm::shapes::Bounds;
use folio_wasm::sprite::Strip;
use folio_wasm::{App, SketchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, PartialEq)]
enum Op {
    Clear(String),
    Circle,
    Square,
    Polygon(usize),
    Sprite(String, Strip, (f64, f64)),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Painter for Recorder {
    fn clear(&mut self, css_color: &str) {
        self.ops.push(Op::Clear(css_color.to_owned()));
    }
    fn fill_circle(&mut self, _: (f64, f64), _: f64, _: Rgba) {
        self.ops.push(Op::Circle);
    }
    fn fill_rotated_square(&mut self, _: (f64, f64), _: f64, _: f64, _: Rgba) {
        self.ops.push(Op::Square);
    }
    fn fill_polygon(&mut self, points: &[(f64, f64)], _: Rgba) {
        self.ops.push(Op::Polygon(points.len()));
    }
    fn draw_sprite(&mut self, asset: &str, strip: Strip, at: (f64, f64)) {
        self.ops.push(Op::Sprite(asset.to_owned(), strip, at));
    }
}

fn app() -> App {
    App::new(
        SketchConfig::default(),
        StdRng::seed_from_u64(2025),
        Bounds::new(640.0, 480.0),
    )
}

fn unlocked() -> App {
    let mut app = app();
    assert_eq!(app.submit_passcode(Some("2025")), GateOutcome::Unlocked);
    app
}

#[test]
fn locked_sketch_draws_nothing_and_ignores_input() {
    let mut app = app();
    let mut rec = Recorder::default();
    app.frame(0.0, &mut rec);
    assert!(rec.ops.is_empty());

    app.pointer_moved(10.0);
    app.pointer_moved(50.0);
    app.hover("作品集", 0.0);
    assert_eq!(app.field().scale(), 1.0);
    assert_eq!(app.animator().current(), None);
    assert!(app.field().shapes().is_empty());
}

#[test]
fn wrong_codes_keep_gate_locked() {
    let mut app = app();
    assert_eq!(app.submit_passcode(Some("1234")), GateOutcome::Rejected);
    assert_eq!(app.submit_passcode(None), GateOutcome::Rejected);
    assert_eq!(app.gate().state(), GateState::Locked);
    assert_eq!(app.submit_passcode(Some("2025")), GateOutcome::Unlocked);
    assert_eq!(app.gate().state(), GateState::Unlocked);
}

#[test]
fn repeated_rejections_slow_down_reprompts() {
    let mut app = app();
    assert_eq!(app.retry_delay_ms(), 0);
    app.submit_passcode(None);
    let first = app.retry_delay_ms();
    assert!(first > 0);
    for _ in 0..50 {
        app.submit_passcode(None);
    }
    let capped = app.retry_delay_ms();
    assert!(capped > first);
    app.submit_passcode(None);
    assert_eq!(app.retry_delay_ms(), capped);
}

#[test]
fn unlocking_populates_field_once() {
    let mut app = unlocked();
    let first = app.field().shapes().to_vec();
    assert_eq!(first.len(), 30);
    assert_eq!(app.submit_passcode(Some("2025")), GateOutcome::AlreadyOpen);
    assert_eq!(app.field().shapes(), first.as_slice());
}

#[test]
fn frame_clears_then_draws_every_shape() {
    let mut app = unlocked();
    let mut rec = Recorder::default();
    app.frame(16.0, &mut rec);
    assert_eq!(rec.ops[0], Op::Clear("#faedcd".into()));
    assert_eq!(rec.ops.len(), 31);
    assert!(rec.ops[1..]
        .iter()
        .all(|op| matches!(op, Op::Circle | Op::Square | Op::Polygon(10))));
}

#[test]
fn pointer_direction_drives_scale() {
    let mut app = unlocked();
    app.pointer_moved(100.0);
    app.pointer_moved(120.0);
    assert!((app.field().scale() - 1.1).abs() < 1e-9);
    for x in (0..100).rev() {
        app.pointer_moved(f64::from(x));
    }
    assert!((app.field().scale() - 0.1).abs() < 1e-9);
}

#[test]
fn hover_shows_sliced_sheet_and_leave_hides_it() {
    let mut app = unlocked();
    app.sheet_loaded("黑馬.png", 200, 1205);
    app.hover("作品集", 1000.0);
    assert_eq!(app.animator().current(), Some("黑馬.png"));
    assert_eq!(app.animator().frame(), 0);

    let mut rec = Recorder::default();
    app.frame(1200.0, &mut rec);
    let expected = Op::Sprite(
        "黑馬.png".into(),
        Strip { y: 100, width: 200, height: 100 },
        (10.0, 10.0),
    );
    assert_eq!(rec.ops.last(), Some(&expected));

    app.leave();
    let mut rec = Recorder::default();
    app.frame(1400.0, &mut rec);
    assert!(!rec.ops.iter().any(|op| matches!(op, Op::Sprite(..))));
}

#[test]
fn unknown_label_changes_nothing() {
    let mut app = unlocked();
    app.hover("聯絡我", 0.0);
    assert_eq!(app.animator().current(), None);
}

#[test]
fn resize_keeps_shapes_on_canvas() {
    let mut app = unlocked();
    app.resize(40.0, 30.0);
    let b = app.bounds();
    assert!(app.field().shapes().iter().all(|s| b.contains((s.x, s.y))));
    let mut rec = Recorder::default();
    for i in 0..500 {
        app.frame(f64::from(i) * 16.0, &mut rec);
    }
    assert!(app.field().shapes().iter().all(|s| b.contains((s.x, s.y))));
}
