//! Answer Lever
//!
//! The wall lever the player pulls to submit the puzzle. Two poses (OFF
//! and ON) with an animated swing between them, plus two indicator bulbs
//! the render layer reads: one lit once the lever has ever been pulled,
//! one showing the outcome (green forever on a win, red for a couple of
//! seconds on a wrong answer before the arm drops back to OFF).

/// Arm angle at rest, degrees.
pub const LEVER_OFF_ANGLE: f32 = -30.0;

/// Arm angle when pulled, degrees.
pub const LEVER_ON_ANGLE: f32 = 30.0;

/// Arm swing per `update` CALL, degrees. This is intentionally not a
/// per-second rate: the swing speed tracks the host's update frequency.
/// Converting to per-second would change the observed feel, so the unit
/// is spelled out in the name instead.
pub const LEVER_DEGREES_PER_UPDATE: f32 = 2.0;

/// How long the red error bulb stays lit, seconds.
pub const ERROR_DISPLAY_SECONDS: f32 = 2.0;

/// Delay after a wrong pull before the arm swings back to OFF, seconds.
pub const RESET_DELAY_SECONDS: f32 = 0.5;

/// What the outcome bulb should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeLight {
    /// Unlit - no answer submitted, or the error display expired
    Off,
    /// Permanent green - the puzzle was solved
    Green,
    /// Temporary red - last answer was wrong
    Red,
}

/// Animated lever state machine.
///
/// Drive it with [`activate`](Lever::activate) on the pull event and
/// [`update`](Lever::update) once per frame. Once `won` latches, every
/// further `activate` is a no-op; the lever stays ON and green.
#[derive(Debug, Clone)]
pub struct Lever {
    /// Current arm angle, degrees
    current_angle: f32,
    /// Angle the arm is swinging toward
    target_angle: f32,
    /// True while the arm is mid-swing
    is_animating: bool,

    /// Latched on the first pull, never cleared
    activated: bool,
    /// Latched on a winning pull; terminal
    won: bool,
    /// True while the red bulb is lit
    showing_error: bool,
    /// Seconds the red bulb has been lit
    error_timer: f32,
    /// True while waiting out the delay before dropping back to OFF
    waiting_before_reset: bool,
    /// Seconds since the wrong pull armed the reset
    reset_delay_timer: f32,
}

impl Default for Lever {
    fn default() -> Self {
        Self {
            current_angle: LEVER_OFF_ANGLE,
            target_angle: LEVER_OFF_ANGLE,
            is_animating: false,
            activated: false,
            won: false,
            showing_error: false,
            error_timer: 0.0,
            waiting_before_reset: false,
            reset_delay_timer: 0.0,
        }
    }
}

impl Lever {
    /// Create a lever at rest in the OFF pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the lever to its initial state (level restart).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pull the lever with the win condition evaluated at pull time.
    ///
    /// No-op once `won` is latched. Otherwise the arm starts swinging to
    /// ON (if not already there) and `activated` latches. A winning pull
    /// latches `won` and cancels any error/reset timers; a wrong pull
    /// lights the red bulb and arms the delayed drop back to OFF.
    pub fn activate(&mut self, win_condition_met: bool) {
        if self.won {
            return;
        }

        if self.target_angle != LEVER_ON_ANGLE {
            self.target_angle = LEVER_ON_ANGLE;
            self.is_animating = true;
        }

        self.activated = true;

        if win_condition_met {
            self.won = true;
            self.showing_error = false;
            self.error_timer = 0.0;
            self.waiting_before_reset = false;
            self.reset_delay_timer = 0.0;
        } else {
            self.showing_error = true;
            self.error_timer = 0.0;
            self.waiting_before_reset = true;
            self.reset_delay_timer = 0.0;
        }
    }

    /// Advance the swing animation and both timers.
    ///
    /// The arm moves a fixed [`LEVER_DEGREES_PER_UPDATE`] per call and
    /// snaps exactly onto the target when it reaches or overshoots it.
    pub fn update(&mut self, delta_time: f32) {
        if self.is_animating {
            if self.current_angle < self.target_angle {
                self.current_angle += LEVER_DEGREES_PER_UPDATE;
                if self.current_angle >= self.target_angle {
                    self.current_angle = self.target_angle;
                    self.is_animating = false;
                }
            } else if self.current_angle > self.target_angle {
                self.current_angle -= LEVER_DEGREES_PER_UPDATE;
                if self.current_angle <= self.target_angle {
                    self.current_angle = self.target_angle;
                    self.is_animating = false;
                }
            } else {
                self.is_animating = false;
            }
        }

        if self.showing_error {
            self.error_timer += delta_time;
            if self.error_timer >= ERROR_DISPLAY_SECONDS {
                self.showing_error = false;
                self.error_timer = 0.0;
            }
        }

        if self.waiting_before_reset {
            self.reset_delay_timer += delta_time;
            if self.reset_delay_timer >= RESET_DELAY_SECONDS {
                // Wrong answer: drop the arm back to OFF
                self.target_angle = LEVER_OFF_ANGLE;
                self.is_animating = true;
                self.waiting_before_reset = false;
                self.reset_delay_timer = 0.0;
            }
        }
    }

    /// Current arm angle, degrees, for the render layer.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// True while the arm is past vertical toward the ON pose.
    pub fn is_on(&self) -> bool {
        self.current_angle > 0.0
    }

    /// True while the arm is mid-swing.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Activation bulb: lit once the lever has ever been pulled.
    pub fn activation_lit(&self) -> bool {
        self.activated
    }

    /// Outcome bulb state for the render layer.
    pub fn outcome_light(&self) -> OutcomeLight {
        if self.won {
            OutcomeLight::Green
        } else if self.showing_error {
            OutcomeLight::Red
        } else {
            OutcomeLight::Off
        }
    }

    /// True once a winning pull has latched. Terminal.
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// True while the red error bulb is lit.
    pub fn is_showing_error(&self) -> bool {
        self.showing_error
    }
}
