use crate::frame::*;
use crate::shape::*;
use crate::color::*;
use crate::stroke::*;
use crate::config::*;

use lp_curves::*;

use serde::{Serialize, Deserialize};

///
/// Physical properties of the generated bouncing ball
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Radius of the ball, in canvas units
    pub radius: f32,

    /// Downwards acceleration, in canvas units per second squared
    pub gravity: f32,

    /// Fraction of the vertical speed that is kept after bouncing off the floor
    pub restitution: f32,

    /// Velocity of the ball in the first frame, in canvas units per second
    pub initial_velocity: Coord2,

    /// Simulated time between frames, in seconds
    pub time_step: f32,
}

impl Default for BallSettings {
    fn default() -> BallSettings {
        BallSettings {
            radius:             40.0,
            gravity:            2400.0,
            restitution:        0.8,
            initial_velocity:   Coord2(360.0, 0.0),
            time_step:          1.0 / 24.0,
        }
    }
}

///
/// Simulates a ball bouncing around inside the canvas
///
#[derive(Clone, PartialEq, Debug)]
pub struct BouncingBall {
    settings:   BallSettings,
    canvas:     CanvasSize,
    position:   Coord2,
    velocity:   Coord2,
}

impl BouncingBall {
    ///
    /// Creates a ball in the top-left quarter of the canvas
    ///
    pub fn new(settings: BallSettings, canvas: CanvasSize) -> BouncingBall {
        let start = Coord2(canvas.width as f32 / 4.0, canvas.height as f32 / 4.0);

        let mut ball = BouncingBall {
            settings:   settings,
            canvas:     canvas,
            position:   start,
            velocity:   settings.initial_velocity,
        };
        ball.keep_inside();

        ball
    }

    #[inline]
    pub fn position(&self) -> Coord2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Coord2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.settings.radius.max(0.0)
    }

    ///
    /// Advances the simulation by one time step
    ///
    pub fn step(&mut self) {
        let dt = self.settings.time_step;

        // Semi-implicit Euler: update the velocity first, then move with the new velocity
        self.velocity.1 += self.settings.gravity * dt;
        self.position   = self.position + self.velocity * dt;

        self.keep_inside();
    }

    ///
    /// Bounces the ball off any wall it has moved through
    ///
    fn keep_inside(&mut self) {
        let radius      = self.radius();
        let restitution = self.settings.restitution.clamp(0.0, 1.0);
        let (min_x, max_x) = axis_limits(self.canvas.width as f32, radius);
        let (min_y, max_y) = axis_limits(self.canvas.height as f32, radius);

        if self.position.0 < min_x {
            self.position.0 = min_x;
            self.velocity.0 = self.velocity.0.abs();
        } else if self.position.0 > max_x {
            self.position.0 = max_x;
            self.velocity.0 = -self.velocity.0.abs();
        }

        if self.position.1 < min_y {
            self.position.1 = min_y;
            self.velocity.1 = self.velocity.1.abs();
        } else if self.position.1 > max_y {
            // The floor is the only surface that absorbs energy
            self.position.1 = max_y;
            self.velocity.1 = -self.velocity.1.abs() * restitution;
        }
    }
}

///
/// The range of positions the center of the ball can occupy along one axis
///
fn axis_limits(length: f32, radius: f32) -> (f32, f32) {
    if length >= radius * 2.0 {
        (radius, length - radius)
    } else {
        (length / 2.0, length / 2.0)
    }
}

///
/// Generates a series of frames showing a bouncing ball
///
pub fn generate_bouncing_ball_frames(settings: BallSettings, canvas: CanvasSize, count: usize, color: Color, width: f32) -> Vec<Frame> {
    let mut ball    = BouncingBall::new(settings, canvas);
    let mut frames  = Vec::with_capacity(count);

    for _ in 0..count {
        let params  = ShapeParams::new(ball.position(), ball.radius() * 2.0, color);
        let shape   = PlacedShape { kind: ShapeKind::Circle, params: params, width: width };

        frames.push(Frame::with_actions(vec![DrawAction::Shape(shape)]));
        ball.step();
    }

    frames
}

#[cfg(test)]
mod test {
    use super::*;

    fn canvas() -> CanvasSize {
        CanvasSize { width: 400, height: 300 }
    }

    #[test]
    fn ball_never_leaves_the_canvas() {
        let mut ball = BouncingBall::new(BallSettings::default(), canvas());

        for _ in 0..1000 {
            ball.step();

            let Coord2(x, y) = ball.position();
            assert!(x - ball.radius() >= 0.0 && x + ball.radius() <= 400.0);
            assert!(y - ball.radius() >= 0.0 && y + ball.radius() <= 300.0);
        }
    }

    #[test]
    fn ball_falls_then_bounces() {
        let mut ball        = BouncingBall::new(BallSettings::default(), canvas());
        let mut bounced     = false;

        for _ in 0..100 {
            let falling = ball.velocity().1 > 0.0;
            ball.step();

            if falling && ball.velocity().1 < 0.0 {
                bounced = true;
                break;
            }
        }

        assert!(bounced);
    }

    #[test]
    fn floor_absorbs_energy() {
        let settings    = BallSettings { initial_velocity: Coord2(0.0, 0.0), ..BallSettings::default() };
        let mut ball    = BouncingBall::new(settings, canvas());
        let start_y     = ball.position().1;
        let mut highest = ball.position().1;

        // Skip the first fall, then track the peak of the first bounce
        while ball.velocity().1 >= 0.0 { ball.step(); }
        while ball.velocity().1 < 0.0 {
            ball.step();
            highest = highest.min(ball.position().1);
        }

        // Smaller y is higher up the canvas: the bounce never gets back to the start
        assert!(highest > start_y);
    }

    #[test]
    fn tiny_canvas_pins_ball_to_center() {
        let mut ball = BouncingBall::new(BallSettings::default(), CanvasSize { width: 10, height: 10 });
        ball.step();

        assert!(ball.position() == Coord2(5.0, 5.0));
    }

    #[test]
    fn generates_one_ball_per_frame() {
        let frames = generate_bouncing_ball_frames(BallSettings::default(), canvas(), 12, Color::RED, 3.0);

        assert!(frames.len() == 12);
        for frame in frames.iter() {
            let actions = frame.visible_actions().collect::<Vec<_>>();
            assert!(actions.len() == 1);

            match actions[0] {
                DrawAction::Shape(shape)    => { assert!(shape.kind == ShapeKind::Circle); assert!(shape.params.size == 80.0); }
                _                           => { assert!(false, "Expected a shape"); }
            }
        }
    }

    #[test]
    fn ball_moves_between_frames() {
        let frames      = generate_bouncing_ball_frames(BallSettings::default(), canvas(), 2, Color::RED, 3.0);
        let centers     = frames.iter()
            .map(|frame| match frame.visible_actions().next() {
                Some(DrawAction::Shape(shape))  => shape.params.center,
                _                               => Coord2(0.0, 0.0)
            })
            .collect::<Vec<_>>();

        assert!(centers[0] != centers[1]);
    }
}
