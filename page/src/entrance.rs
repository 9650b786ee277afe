//! One-shot entrance transition for the hero heading block.
//!
//! The block is rendered in [`EntranceState::Pending`] (transparent, shifted
//! down) and moves to [`EntranceState::Shown`] exactly once, after the first
//! paint. There is no replay and no cancellation: once shown it stays shown.
//!
//! On the page the transition is a CSS transition keyed on the
//! `data-entrance` attribute; [`ENTRANCE_SCRIPT`] flips the attribute after the
//! first frame. [`EntranceTiming::sample`] evaluates the same curve in Rust.

use std::time::Duration;

/// Lifecycle of the entrance transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntranceState {
    /// Mounted, not yet painted
    #[default]
    Pending,
    /// Transition triggered
    Shown,
}

impl EntranceState {
    /// Value of the `data-entrance` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            EntranceState::Pending => "pending",
            EntranceState::Shown => "shown",
        }
    }

    /// Handle the first paint. Returns `true` only for the call that actually
    /// moved the state; later calls leave it untouched.
    pub fn on_first_paint(&mut self) -> bool {
        match self {
            EntranceState::Pending => {
                *self = EntranceState::Shown;
                true
            }
            EntranceState::Shown => false,
        }
    }

    /// Visual frame of the block `elapsed` after the state was entered.
    pub fn frame(self, timing: &EntranceTiming, elapsed: Duration) -> EntranceFrame {
        match self {
            EntranceState::Pending => timing.initial_frame(),
            EntranceState::Shown => timing.sample(elapsed),
        }
    }
}

/// Opacity and vertical offset of the block at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceFrame {
    /// 0.0 (invisible) to 1.0
    pub opacity: f64,
    /// Downward offset in CSS pixels
    pub offset_px: f64,
}

/// A CSS cubic Bézier timing function with endpoints fixed at (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// The CSS `ease-out` keyword.
    pub const EASE_OUT: CubicBezier = CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    fn axis(s: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    /// Eased progress for a linear time fraction `t` in `[0, 1]`.
    pub fn progress(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        // x(s) is monotonic for control points inside [0, 1]; bisect for s.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..48 {
            let mid = (lo + hi) / 2.0;
            if Self::axis(mid, self.x1, self.x2) < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Self::axis((lo + hi) / 2.0, self.y1, self.y2)
    }

    /// CSS `cubic-bezier(...)` notation.
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Duration, distance and curve of the entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTiming {
    /// Transition length
    pub duration: Duration,
    /// Starting downward offset in CSS pixels
    pub offset_px: f64,
    /// Timing function
    pub curve: CubicBezier,
}

impl Default for EntranceTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            offset_px: 10.0,
            curve: CubicBezier::EASE_OUT,
        }
    }
}

impl EntranceTiming {
    /// Frame before the transition starts.
    pub fn initial_frame(&self) -> EntranceFrame {
        EntranceFrame {
            opacity: 0.0,
            offset_px: self.offset_px,
        }
    }

    /// Frame `elapsed` into the transition; clamps past the end.
    pub fn sample(&self, elapsed: Duration) -> EntranceFrame {
        let total = self.duration.as_secs_f64();
        let t = if total == 0.0 {
            1.0
        } else {
            elapsed.as_secs_f64() / total
        };
        let p = self.curve.progress(t);
        EntranceFrame {
            opacity: p,
            offset_px: self.offset_px * (1.0 - p),
        }
    }

    /// Stylesheet rules driving the transition from the `data-entrance` attribute.
    pub fn css(&self) -> String {
        let ms = self.duration.as_millis();
        let curve = self.curve.css();
        format!(
            "[data-entrance=\"{pending}\"] {{ opacity: 0; transform: translateY({offset}px); }}\n\
             [data-entrance=\"{shown}\"] {{ opacity: 1; transform: translateY(0); \
             transition: opacity {ms}ms {curve}, transform {ms}ms {curve}; }}\n",
            pending = EntranceState::Pending.as_str(),
            shown = EntranceState::Shown.as_str(),
            offset = self.offset_px,
        )
    }
}

/// Rules applied when scripting is off, so the block never stays hidden.
pub const NOSCRIPT_CSS: &str = "[data-entrance] { opacity: 1; transform: none; }";

/// Flips every pending block to shown once the first frame has been painted.
///
/// The nested `requestAnimationFrame` runs the callback on the frame after the
/// initial paint, so the pending styles are on screen before the transition.
pub const ENTRANCE_SCRIPT: &str = r#"
(() => {
  const show = () => {
    document.querySelectorAll('[data-entrance="pending"]').forEach(el => {
      el.setAttribute('data-entrance', 'shown');
    });
  };
  requestAnimationFrame(() => requestAnimationFrame(show));
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn first_paint_transitions_once() {
        let mut state = EntranceState::default();
        assert_eq!(state, EntranceState::Pending);

        assert!(state.on_first_paint());
        assert_eq!(state, EntranceState::Shown);

        assert!(!state.on_first_paint());
        assert_eq!(state, EntranceState::Shown);
    }

    #[test]
    fn pending_frame_is_hidden_and_offset() {
        let timing = EntranceTiming::default();
        let frame = EntranceState::Pending.frame(&timing, Duration::from_secs(5));
        assert_eq!(
            frame,
            EntranceFrame {
                opacity: 0.0,
                offset_px: 10.0
            }
        );
    }

    #[test]
    fn sample_starts_hidden_and_ends_visible() {
        let timing = EntranceTiming::default();

        let start = timing.sample(Duration::ZERO);
        assert!(approx(start.opacity, 0.0));
        assert!(approx(start.offset_px, 10.0));

        let end = timing.sample(Duration::from_millis(600));
        assert!(approx(end.opacity, 1.0));
        assert!(approx(end.offset_px, 0.0));

        let past = timing.sample(Duration::from_millis(2_000));
        assert!(approx(past.opacity, 1.0));
    }

    #[test]
    fn sample_is_monotonic() {
        let timing = EntranceTiming::default();
        let mut last = timing.sample(Duration::ZERO);
        for ms in (10..=600).step_by(10) {
            let frame = timing.sample(Duration::from_millis(ms));
            assert!(frame.opacity >= last.opacity);
            assert!(frame.offset_px <= last.offset_px);
            last = frame;
        }
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let timing = EntranceTiming::default();
        let half = timing.sample(Duration::from_millis(300));
        // ease-out is ahead of linear at the midpoint (~0.69)
        assert!(half.opacity > 0.6 && half.opacity < 0.75, "{}", half.opacity);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let timing = EntranceTiming {
            duration: Duration::ZERO,
            ..Default::default()
        };
        assert!(approx(timing.sample(Duration::ZERO).opacity, 1.0));
    }

    #[test]
    fn css_matches_timing() {
        let css = EntranceTiming::default().css();
        assert!(css.contains(r#"[data-entrance="pending"]"#));
        assert!(css.contains("translateY(10px)"));
        assert!(css.contains("opacity 600ms cubic-bezier(0, 0, 0.58, 1)"));
    }

    #[test]
    fn script_targets_both_states() {
        assert!(ENTRANCE_SCRIPT.contains(EntranceState::Pending.as_str()));
        assert!(ENTRANCE_SCRIPT.contains(EntranceState::Shown.as_str()));
    }
}
