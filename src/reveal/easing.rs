//! Animated properties and timing curves

use serde::{Deserialize, Serialize};

/// Animated properties of the logo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub scale: f64,
    pub opacity: f64,
}

impl Pose {
    /// Natural size, fully visible
    pub const NATURAL: Pose = Pose {
        scale: 1.0,
        opacity: 1.0,
    };

    /// Blown up and fully transparent
    pub fn enlarged(scale: f64) -> Self {
        Self {
            scale,
            opacity: 0.0,
        }
    }

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            scale: self.scale + (to.scale - self.scale) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::NATURAL
    }
}

/// CSS-style cubic Bézier timing function with endpoints (0,0) and (1,1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// easeOutQuad-like curve used by all reveal transitions
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Curve parameter whose x coordinate is `x`
    fn solve_t(&self, x: f64) -> f64 {
        // Newton first, bisection if the slope flattens out
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in [0, 1]
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        CubicBezier::EASE_OUT
    }
}

/// A timed interpolation between two poses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl Tween {
    /// Pose after `elapsed_ms`; exactly `to` once the duration has passed
    pub fn sample(&self, elapsed_ms: f64) -> Pose {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f64 {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms as f64).max(0.0);
        self.from.lerp(self.to, self.easing.ease(progress))
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}
