//! Action-gauge (ATB) scheduling for two combatants.
//!
//! Each combatant fills a gauge at its speed; whoever reaches the threshold
//! acts and pays exactly one threshold back, keeping any overflow. Instead of
//! ticking, [`Timeline::advance`] jumps straight to the next instant a gauge
//! fills.
//!
//! Gauges are stored scaled by `speed_first × speed_second`. Speeds never
//! change during a battle, so in scaled units every gauge stays a multiple of
//! its own speed, every time-to-ready is an exact integer, and simultaneous
//! readiness is detected exactly rather than through float comparison.

/// One of the two combatants, in the order they were passed to the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Roller id used when deriving roll seeds.
    pub const fn roller(self) -> u32 {
        self.index() as u32
    }
}

/// Who is ready after an [`advance`](Timeline::advance).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    /// Exactly one gauge is full.
    One(Side),
    /// Both gauges filled in the same step; the caller breaks the tie.
    Both,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    speeds: [u128; 2],
    gauges: [u128; 2],
    /// Threshold in scaled units.
    threshold: u128,
    /// Gauge units per unscaled point.
    scale: u128,
    /// Elapsed time in scaled units.
    clock: u128,
}

impl Timeline {
    /// Creates a timeline with both gauges empty. Speeds below 1 are raised
    /// to 1 so the gauges always move.
    pub fn new(speed_first: u64, speed_second: u64, threshold: u64) -> Self {
        let speeds = [u128::from(speed_first.max(1)), u128::from(speed_second.max(1))];
        let scale = speeds[0] * speeds[1];

        Self {
            speeds,
            gauges: [0, 0],
            threshold: u128::from(threshold.max(1)).saturating_mul(scale),
            scale,
            clock: 0,
        }
    }

    /// Jumps forward to the next instant at least one gauge is full.
    pub fn advance(&mut self) -> Readiness {
        let time_to_ready = |side: Side| {
            let missing = self.threshold.saturating_sub(self.gauges[side.index()]);
            missing.div_ceil(self.speeds[side.index()])
        };
        let step = time_to_ready(Side::First).min(time_to_ready(Side::Second));

        for side in Side::BOTH {
            let i = side.index();
            self.gauges[i] = self.gauges[i].saturating_add(step * self.speeds[i]);
        }
        self.clock = self.clock.saturating_add(step);

        tracing::trace!(
            step = %step,
            first = %self.gauge(Side::First),
            second = %self.gauge(Side::Second),
            "timeline advanced"
        );

        match (self.is_ready(Side::First), self.is_ready(Side::Second)) {
            (true, true) => Readiness::Both,
            (false, true) => Readiness::One(Side::Second),
            // advance always fills at least one gauge
            _ => Readiness::One(Side::First),
        }
    }

    /// Pays one threshold from the acting side's gauge, keeping overflow.
    pub fn spend(&mut self, side: Side) {
        let gauge = &mut self.gauges[side.index()];
        *gauge = gauge.saturating_sub(self.threshold);
    }

    pub fn is_ready(&self, side: Side) -> bool {
        self.gauges[side.index()] >= self.threshold
    }

    /// Gauge in unscaled points, rounded down.
    pub fn gauge(&self, side: Side) -> u64 {
        u64::try_from(self.gauges[side.index()] / self.scale).unwrap_or(u64::MAX)
    }

    /// Elapsed time in threshold-per-speed units (1 = the time a speed-1
    /// combatant needs to gain one gauge point).
    pub fn elapsed(&self) -> f64 {
        self.clock as f64 / self.scale as f64
    }
}
