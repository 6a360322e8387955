// Host-side tests for the starfield simulation and its frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use folio_web::core::env::{self, EnvSignals, Viewport};
use folio_web::core::starfield::*;
use folio_web::core::{CoreError, ManualTicker, Ticker};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    Grid(usize),
    Star(Vec2, f32, Rgba),
    Line(Line, Rgba),
}

#[derive(Default, Clone)]
struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    fn stars(&self) -> Vec<Vec2> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Star(p, _, _) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn lines(&self) -> Vec<(Line, Rgba)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Line(l, color) => Some((*l, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _viewport: Viewport) {
        self.calls.borrow_mut().push(Call::Clear);
    }

    fn stroke_lines(&mut self, lines: &[Line], _color: Rgba, _width: f32) {
        self.calls.borrow_mut().push(Call::Grid(lines.len()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.borrow_mut().push(Call::Star(center, radius, color));
    }

    fn line(&mut self, line: Line, color: Rgba, _width: f32) {
        self.calls.borrow_mut().push(Call::Line(line, color));
    }
}

fn viewport(w: f32, h: f32) -> Viewport {
    Viewport::new(w, h).expect("valid viewport")
}

fn field(w: f32, h: f32, seed: u64) -> Starfield {
    Starfield::new(viewport(w, h), StarfieldConfig::default(), StdRng::seed_from_u64(seed))
}

fn assert_depth_invariant(f: &Starfield) {
    let max = f.max_depth();
    for (i, s) in f.stars().iter().enumerate() {
        assert!(s.pos.z > 0.0 && s.pos.z <= max, "star {i} depth {} outside (0, {max}]", s.pos.z);
    }
}

#[test]
fn star_budget_follows_viewport_width() {
    assert_eq!(field(767.0, 600.0, 1).stars().len(), 20);
    assert_eq!(field(768.0, 600.0, 1).stars().len(), 40);
    assert_eq!(field(1920.0, 1080.0, 1).stars().len(), 40);
}

#[test]
fn depth_stays_in_range_while_flying() {
    let mut f = field(1280.0, 800.0, 7);
    assert_depth_invariant(&f);
    for frame in 0..5000 {
        // fast scrolling shortens every trip
        f.step((frame % 3000) as f32);
        assert_depth_invariant(&f);
    }
}

#[test]
fn star_reaching_camera_respawns_at_max_depth() {
    let cfg = StarfieldConfig {
        base_speed: 2000.0,
        ..StarfieldConfig::default()
    };
    let vp = viewport(1000.0, 600.0);
    let mut f = Starfield::new(vp, cfg, StdRng::seed_from_u64(3));
    let respawned = f.step(0.0);
    assert_eq!(respawned, f.stars().len(), "every star overshoots the camera");
    for s in f.stars() {
        assert_eq!(s.pos.z, f.max_depth());
        assert!(s.pos.x.abs() <= vp.width, "x {} out of range", s.pos.x);
        assert!(s.pos.y.abs() <= vp.height, "y {} out of range", s.pos.y);
    }
}

#[test]
fn projection_culls_points_outside_viewport() {
    let vp = viewport(800.0, 600.0);
    assert_eq!(project(Vec3::new(0.0, 0.0, 100.0), &vp, 128.0), Some(Vec2::new(400.0, 300.0)));
    assert_eq!(project(Vec3::new(10_000.0, 0.0, 10.0), &vp, 128.0), None);
    assert_eq!(project(Vec3::new(0.0, -10_000.0, 10.0), &vp, 128.0), None);
    assert_eq!(project(Vec3::new(0.0, 0.0, 0.0), &vp, 128.0), None);
}

#[test]
fn drawn_stars_are_inside_viewport() {
    let vp = viewport(1024.0, 768.0);
    let mut f = field(vp.width, vp.height, 11);
    let mut surface = Recorder::default();
    let env = EnvSignals::new(vp);
    let mut culled = 0;
    for _ in 0..200 {
        let stats = f.render(&env, &mut surface);
        assert_eq!(stats.drawn + stats.culled, f.stars().len());
        culled += stats.culled;
    }
    assert!(culled > 0, "a wide spawn box should put some stars off screen");
    for p in surface.stars() {
        assert!(vp.contains(p), "star drawn at {p:?}");
    }
}

#[test]
fn nearer_stars_are_larger_and_brighter() {
    let f = field(1000.0, 800.0, 5);
    let near = Star {
        pos: Vec3::new(0.0, 0.0, 100.0),
        size_seed: 0.0,
    };
    let far = Star {
        pos: Vec3::new(0.0, 0.0, 900.0),
        size_seed: 0.0,
    };
    let (pn, pf) = (f.projected(&near).unwrap(), f.projected(&far).unwrap());
    assert!(pn.radius > pf.radius);
    assert!(pn.opacity > pf.opacity);
    assert!((pn.radius - 0.9 * 2.0).abs() < 1e-5);
    assert!((pn.opacity - 0.9 * 0.7).abs() < 1e-5);
}

#[test]
fn connection_fades_with_squared_distance() {
    let star = Vec2::new(100.0, 100.0);
    assert_eq!(connection_opacity(star, star, 150.0, 0.3), Some(0.3));
    let half = connection_opacity(star, star + Vec2::new(150.0 / 2f32.sqrt(), 0.0), 150.0, 0.3).unwrap();
    assert!((half - 0.15).abs() < 1e-4, "half the squared radius gives half opacity, got {half}");
    assert_eq!(connection_opacity(star, star + Vec2::new(150.0, 0.0), 150.0, 0.3), None);
}

#[test]
fn no_connections_before_pointer_moves() {
    let vp = viewport(800.0, 600.0);
    let mut f = field(vp.width, vp.height, 2);
    let mut surface = Recorder::default();
    let mut env = EnvSignals::new(vp);
    for _ in 0..30 {
        f.render(&env, &mut surface);
    }
    assert!(surface.lines().is_empty());

    env.pointer = Some(vp.center());
    let mut total = 0;
    for _ in 0..30 {
        total += f.render(&env, &mut surface).connections;
    }
    assert_eq!(total, surface.lines().len());
    for (line, color) in surface.lines() {
        assert_eq!(line.to, vp.center());
        assert!(line.from.distance(vp.center()) < 150.0);
        assert_eq!((color.r, color.g, color.b), (0, 255, 65));
        assert!(color.a > 0.0 && color.a <= 0.3);
    }
}

#[test]
fn grid_phase_wraps_within_cell() {
    let mut f = field(800.0, 600.0, 9);
    for i in 0..2000 {
        f.step(0.0);
        let phase = f.grid_phase(i as f32 * 13.0);
        assert!((0.0..80.0).contains(&phase), "phase {phase}");
    }
    let lines = f.grid_lines(0.0);
    let vertical = lines.iter().filter(|l| l.from.x == l.to.x).count();
    assert_eq!(vertical, 10, "800px wide at 80px cells");
    assert!(lines.iter().all(|l| l.from.y <= 600.0));
}

#[test]
fn resize_rescales_depth_and_budget() {
    let mut f = field(1600.0, 900.0, 4);
    f.resize(viewport(400.0, 800.0));
    assert_eq!(f.stars().len(), 20);
    assert_eq!(f.max_depth(), 400.0);
    assert_depth_invariant(&f);
    f.resize(viewport(1200.0, 800.0));
    assert_eq!(f.stars().len(), 40);
    assert_depth_invariant(&f);
}

#[test]
fn invalid_viewport_is_rejected() {
    assert!(matches!(Viewport::new(0.0, 600.0), Err(CoreError::InvalidViewport { .. })));
    assert!(Viewport::new(f32::NAN, 600.0).is_err());
}

#[test]
fn loop_renders_each_frame_and_stops_on_unmount() {
    let ticker = ManualTicker::new();
    let vp = viewport(800.0, 600.0);
    let env = env::shared(EnvSignals::new(vp));
    let surface = Recorder::default();
    let mut lp = StarfieldLoop::mount(ticker.clone(), env.clone(), field(800.0, 600.0, 1), Ok(surface.clone()));
    assert!(lp.is_running());

    ticker.advance_frames(3, 1.0 / 60.0);
    let clears = |s: &Recorder| s.calls.borrow().iter().filter(|c| **c == Call::Clear).count();
    assert_eq!(clears(&surface), 3);

    lp.unmount();
    assert_eq!(ticker.subscriber_count(), 0);
    ticker.advance_frames(3, 1.0 / 60.0);
    assert_eq!(clears(&surface), 3, "no frame after unmount");
}

#[test]
fn loop_follows_viewport_changes() {
    let ticker = ManualTicker::new();
    let env = env::shared(EnvSignals::new(viewport(1280.0, 800.0)));
    let surface = Recorder::default();
    let _lp = StarfieldLoop::mount(ticker.clone(), env.clone(), field(1280.0, 800.0, 1), Ok(surface.clone()));
    ticker.advance(0.016);
    env.borrow_mut().viewport = viewport(500.0, 800.0);
    surface.calls.borrow_mut().clear();
    ticker.advance(0.016);
    let drawn = surface.stars().len();
    assert!(drawn <= 20, "mobile budget after resize, drew {drawn}");
}

#[test]
fn missing_surface_leaves_loop_inert() {
    let ticker = ManualTicker::new();
    let env = env::shared(EnvSignals::default());
    let lp = StarfieldLoop::mount::<StdRng, Recorder>(
        ticker.clone(),
        env,
        field(800.0, 600.0, 1),
        Err(CoreError::SurfaceUnavailable),
    );
    assert!(!lp.is_running());
    assert_eq!(ticker.subscriber_count(), 0);
    ticker.advance(0.016);
}

#[test]
fn dropping_loop_unsubscribes() {
    let ticker = ManualTicker::new();
    let env = env::shared(EnvSignals::default());
    {
        let _lp = StarfieldLoop::mount(ticker.clone(), env, field(800.0, 600.0, 1), Ok(Recorder::default()));
        assert_eq!(ticker.subscriber_count(), 1);
    }
    assert_eq!(ticker.subscriber_count(), 0);
}

#[test]
fn canvas_backing_follows_height_and_pixel_ratio() {
    let vp = Viewport::new(1280.0, 800.0).unwrap();
    assert_eq!(vp.backing_size(2.0), (2560, 1600));
    assert!(!env::needs_resync((2560, 1600), vp, 2.0));

    // mobile URL bar collapsing: width unchanged
    let shorter = Viewport::new(1280.0, 600.0).unwrap();
    assert!(env::needs_resync((2560, 1600), shorter, 2.0), "height-only change");

    // window moved to a monitor with another pixel ratio
    assert!(env::needs_resync((2560, 1600), vp, 1.0), "dpr change");

    // the backing store is never zero-sized
    assert_eq!(Viewport::new(0.4, 0.4).unwrap().backing_size(1.0), (1, 1));
}
