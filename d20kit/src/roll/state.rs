use crate::die::{CRITICAL_HIGH, CRITICAL_LOW};
use crate::math::quaternion::{from_axis_angle, slerp};
use crate::types::*;

/// What a finished roll landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub value: u8,
    pub critical_high: bool,
    pub critical_low: bool,
}

impl Outcome {
    pub fn new(value: u8) -> Outcome {
        Outcome {
            value,
            critical_high: value == CRITICAL_HIGH,
            critical_low: value == CRITICAL_LOW,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Rolling,
}

/// Everything needed to replay one roll's animation.
#[derive(Clone, Debug)]
pub struct Roll {
    pub start: Quat,
    pub target: Quat,
    pub spin_axis: Vec3,
    pub spin_total: Real,
    pub duration: TimeMs,
    pub outcome: Outcome,
    // Latched by the first `advance` after the roll is triggered.
    start_time: Option<TimeMs>,
    // Progress never runs backwards, even if the clock does.
    t: Real,
}

impl Roll {
    pub fn new(
        start: Quat,
        target: Quat,
        spin_axis: Vec3,
        spin_total: Real,
        duration: TimeMs,
        outcome: Outcome,
    ) -> Roll {
        Roll {
            start,
            target,
            spin_axis,
            spin_total,
            duration,
            outcome,
            start_time: None,
            t: 0.0,
        }
    }

    pub fn start_time(&self) -> Option<TimeMs> {
        self.start_time
    }

    /// Fraction of the roll completed by `now`, in `[0, 1]`.
    pub fn advance(&mut self, now: TimeMs) -> Real {
        if self.start_time.is_none() && now.is_finite() {
            self.start_time = Some(now);
        }
        if let Some(start_time) = self.start_time {
            // `max` also swallows NaN.
            let t = ((now - start_time) / self.duration).max(0.0).min(1.0);
            self.t = self.t.max(t);
        }
        self.t
    }

    /// Orientation at progress `t`: easing toward the target while a
    /// free spin about `spin_axis` winds down to nothing.
    pub fn orientation_at(&self, t: Real) -> Quat {
        let e = ease_out_cubic(t);
        let settling = slerp(&self.start, &self.target, e);
        let spin = from_axis_angle(&self.spin_axis, (1.0 - e) * self.spin_total);
        settling * spin
    }
}

#[derive(Clone, Debug)]
pub enum RollState {
    Idle,
    Rolling(Roll),
}

impl RollState {
    pub fn phase(&self) -> Phase {
        match *self {
            RollState::Idle => Phase::Idle,
            RollState::Rolling(_) => Phase::Rolling,
        }
    }
}

impl Default for RollState {
    fn default() -> RollState {
        RollState::Idle
    }
}

pub fn ease_out_cubic(t: Real) -> Real {
    1.0 - (1.0 - t).powi(3)
}
