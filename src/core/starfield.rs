//! Starfield background: a scrolling grid plus stars flying towards the
//! camera, with faint lines connecting nearby stars to the pointer.
//!
//! Stars live in a viewport-centred space (`x`, `y`) with `z` the depth ahead
//! of the camera. Each frame depth shrinks by a speed that grows with the
//! scroll offset; a star reaching the camera plane is recycled at maximum
//! depth with a fresh planar position. Maximum depth equals the viewport
//! width, so wider screens get longer trails.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

use super::constants::*;
use super::env::{EnvSignals, SharedEnv, Viewport};
use super::error::CoreError;
use super::ticker::{SubscriptionId, Ticker};

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub grid_cell_size: f32,
    pub grid_time_rate: f32,
    pub grid_scroll_rate: f32,
    pub time_step: f32,
    pub mobile_width_threshold: f32,
    pub low_budget: usize,
    pub high_budget: usize,
    pub focal_length: f32,
    pub base_speed: f32,
    pub scroll_speed_factor: f32,
    pub max_radius: f32,
    pub max_opacity: f32,
    pub connection_radius: f32,
    pub connection_max_opacity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            grid_cell_size: GRID_CELL_SIZE,
            grid_time_rate: GRID_TIME_RATE,
            grid_scroll_rate: GRID_SCROLL_RATE,
            time_step: TIME_STEP_PER_FRAME,
            mobile_width_threshold: MOBILE_WIDTH_THRESHOLD,
            low_budget: STARS_LOW_BUDGET,
            high_budget: STARS_HIGH_BUDGET,
            focal_length: FOCAL_LENGTH,
            base_speed: STAR_BASE_SPEED,
            scroll_speed_factor: STAR_SCROLL_SPEED_FACTOR,
            max_radius: STAR_MAX_RADIUS,
            max_opacity: STAR_MAX_OPACITY,
            connection_radius: CONNECTION_RADIUS,
            connection_max_opacity: CONNECTION_MAX_OPACITY,
        }
    }
}

/// Number of stars for a viewport width: small screens get the low budget.
#[inline]
pub fn star_budget(width: f32, config: &StarfieldConfig) -> usize {
    if width < config.mobile_width_threshold {
        config.low_budget
    } else {
        config.high_budget
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
}

/// Drawing sink for one frame. The browser implementation wraps a 2D canvas
/// context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    /// Stroke all lines as a single path.
    fn stroke_lines(&mut self, lines: &[Line], color: Rgba, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, line: Line, color: Rgba, width: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec3,
    pub size_seed: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedStar {
    pub screen: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// Pinhole projection onto the screen; `None` if the star lands outside the
/// viewport or sits on the camera plane.
#[inline]
pub fn project(pos: Vec3, viewport: &Viewport, focal_length: f32) -> Option<Vec2> {
    if pos.z <= 0.0 {
        return None;
    }
    let k = focal_length / pos.z;
    let screen = Vec2::new(pos.x * k, pos.y * k) + viewport.center();
    viewport.contains(screen).then_some(screen)
}

/// `1` at the camera plane falling linearly to `0` at maximum depth.
#[inline]
pub fn nearness(z: f32, max_depth: f32) -> f32 {
    if max_depth <= 0.0 {
        return 0.0;
    }
    (1.0 - z / max_depth).max(0.0)
}

/// Opacity of the line from a star to the pointer, fading linearly with the
/// squared distance; `None` beyond the connection radius.
#[inline]
pub fn connection_opacity(star: Vec2, pointer: Vec2, radius: f32, max_opacity: f32) -> Option<f32> {
    let dist_sq = star.distance_squared(pointer);
    let radius_sq = radius * radius;
    (dist_sq < radius_sq).then(|| (1.0 - dist_sq / radius_sq) * max_opacity)
}

/// Counters for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub connections: usize,
    pub respawned: usize,
}

pub struct Starfield<R = StdRng> {
    config: StarfieldConfig,
    viewport: Viewport,
    stars: Vec<Star>,
    time: f32,
    rng: R,
}

impl<R: Rng> Starfield<R> {
    pub fn new(viewport: Viewport, config: StarfieldConfig, rng: R) -> Self {
        let mut field = Self {
            config,
            viewport,
            stars: Vec::new(),
            time: 0.0,
            rng,
        };
        let budget = star_budget(viewport.width, &field.config);
        field.fill_to(budget);
        field
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn max_depth(&self) -> f32 {
        self.viewport.width
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    fn spawn(&mut self) -> Star {
        let max_depth = self.max_depth();
        let mut star = Star {
            pos: Vec3::ZERO,
            size_seed: self.rng.gen::<f32>() * self.config.max_radius,
        };
        self.place(&mut star);
        // gen() is in [0, 1), so depth lands in (0, max_depth]
        star.pos.z = max_depth - self.rng.gen::<f32>() * max_depth;
        star
    }

    fn place(&mut self, star: &mut Star) {
        let Viewport { width, height } = self.viewport;
        star.pos.x = (self.rng.gen::<f32>() - 0.5) * width * 2.0;
        star.pos.y = (self.rng.gen::<f32>() - 0.5) * height * 2.0;
    }

    fn fill_to(&mut self, budget: usize) {
        self.stars.truncate(budget);
        while self.stars.len() < budget {
            let star = self.spawn();
            self.stars.push(star);
        }
    }

    /// Adopt a new viewport: depths are rescaled so they stay within the new
    /// maximum and the population follows the new budget.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let ratio = viewport.width / self.viewport.width;
        self.viewport = viewport;
        let max_depth = self.max_depth();
        for star in &mut self.stars {
            star.pos.z = (star.pos.z * ratio).clamp(f32::MIN_POSITIVE, max_depth);
        }
        let budget = star_budget(viewport.width, &self.config);
        log::info!(
            "[starfield] resize {}x{} -> {} stars",
            viewport.width,
            viewport.height,
            budget
        );
        self.fill_to(budget);
    }

    /// Vertical phase of the grid for the current simulated time.
    #[inline]
    pub fn grid_phase(&self, scroll_y: f32) -> f32 {
        let c = &self.config;
        (self.time * c.grid_time_rate + scroll_y * c.grid_scroll_rate).rem_euclid(c.grid_cell_size)
    }

    /// Grid lines for the current frame: horizontal lines shifted by the
    /// phase (dropped once past the bottom edge) and fixed vertical lines.
    pub fn grid_lines(&self, scroll_y: f32) -> SmallVec<[Line; 48]> {
        let Viewport { width, height } = self.viewport;
        let cell = self.config.grid_cell_size;
        let phase = self.grid_phase(scroll_y);
        let mut lines = SmallVec::new();
        if cell <= 0.0 {
            return lines;
        }
        let mut y = 0.0;
        while y < height {
            let y_pos = y + phase;
            if y_pos <= height {
                lines.push(Line {
                    from: Vec2::new(0.0, y_pos),
                    to: Vec2::new(width, y_pos),
                });
            }
            y += cell;
        }
        let mut x = 0.0;
        while x < width {
            lines.push(Line {
                from: Vec2::new(x, 0.0),
                to: Vec2::new(x, height),
            });
            x += cell;
        }
        lines
    }

    #[inline]
    pub fn speed(&self, scroll_y: f32) -> f32 {
        self.config.base_speed + scroll_y * self.config.scroll_speed_factor
    }

    /// Move one star towards the camera, recycling it at maximum depth.
    /// Returns whether it was respawned.
    fn advance_star(&mut self, index: usize, speed: f32) -> bool {
        let max_depth = self.max_depth();
        let mut star = self.stars[index];
        star.pos.z -= speed;
        let respawned = star.pos.z <= 0.0;
        if respawned {
            star.pos.z = max_depth;
            self.place(&mut star);
        }
        star.pos.z = star.pos.z.min(max_depth);
        self.stars[index] = star;
        respawned
    }

    /// Advance simulated time and every star by one frame without drawing.
    pub fn step(&mut self, scroll_y: f32) -> usize {
        self.time += self.config.time_step;
        let speed = self.speed(scroll_y);
        (0..self.stars.len())
            .filter(|&i| self.advance_star(i, speed))
            .count()
    }

    /// Where a star lands on screen and how it looks, if visible.
    pub fn projected(&self, star: &Star) -> Option<ProjectedStar> {
        let screen = project(star.pos, &self.viewport, self.config.focal_length)?;
        let near = nearness(star.pos.z, self.max_depth());
        let opacity = near * self.config.max_opacity;
        if opacity <= 0.0 {
            return None;
        }
        Some(ProjectedStar {
            screen,
            radius: near * self.config.max_radius,
            opacity,
        })
    }

    /// Advance one frame and draw it.
    pub fn render<S: Surface + ?Sized>(&mut self, env: &EnvSignals, surface: &mut S) -> FrameStats {
        let mut stats = FrameStats::default();
        self.time += self.config.time_step;
        surface.clear(self.viewport);

        let grid = self.grid_lines(env.scroll_y);
        surface.stroke_lines(&grid, Rgba::rgb(GRID_RGB, GRID_STROKE_ALPHA), GRID_LINE_WIDTH);

        let speed = self.speed(env.scroll_y);
        let (radius, max_alpha) = (
            self.config.connection_radius,
            self.config.connection_max_opacity,
        );
        for i in 0..self.stars.len() {
            if self.advance_star(i, speed) {
                stats.respawned += 1;
            }
            let Some(p) = self.projected(&self.stars[i]) else {
                stats.culled += 1;
                continue;
            };
            surface.fill_circle(p.screen, p.radius, Rgba::rgb(STAR_RGB, p.opacity));
            stats.drawn += 1;

            let Some(pointer) = env.pointer else {
                continue;
            };
            if let Some(alpha) = connection_opacity(p.screen, pointer, radius, max_alpha) {
                surface.line(
                    Line {
                        from: p.screen,
                        to: pointer,
                    },
                    Rgba::rgb(CONNECTION_RGB, alpha),
                    1.0,
                );
                stats.connections += 1;
            }
        }
        stats
    }
}

/// A starfield attached to a [`Ticker`]: renders every frame until unmounted
/// or dropped.
pub struct StarfieldLoop<T: Ticker> {
    ticker: T,
    subscription: Option<SubscriptionId>,
}

impl<T: Ticker> StarfieldLoop<T> {
    /// Start rendering `field` into `surface` every frame. Without a surface
    /// the loop stays inert and nothing is drawn.
    pub fn mount<R, S>(
        ticker: T,
        env: SharedEnv,
        mut field: Starfield<R>,
        surface: Result<S, CoreError>,
    ) -> Self
    where
        R: Rng + 'static,
        S: Surface + 'static,
    {
        let mut surface = match surface {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[starfield] {e}; background disabled");
                return Self {
                    ticker,
                    subscription: None,
                };
            }
        };
        let id = ticker.subscribe(Box::new(move |_tick| {
            let env = *env.borrow();
            if env.viewport != field.viewport() {
                field.resize(env.viewport);
            }
            field.render(&env, &mut surface);
        }));
        log::info!("[starfield] mounted");
        Self {
            ticker,
            subscription: Some(id),
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn unmount(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.ticker.unsubscribe(id);
            log::info!("[starfield] unmounted");
        }
    }
}

impl<T: Ticker> Drop for StarfieldLoop<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}
