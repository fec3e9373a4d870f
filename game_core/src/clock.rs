/// Fixed-rate tick scheduler driven by host timestamps.
///
/// The host reports elapsed wall time; the clock answers how many whole ticks
/// are due. Elapsed time per call is capped at `max_frame_dt` so a suspended
/// tab or a debugger pause does not trigger a burst of catch-up ticks.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    pub period: f32,
    pub max_frame_dt: f32,
    accumulator: f32,
    last: Option<f64>,
}

impl TickClock {
    pub fn new(period: f32, max_frame_dt: f32) -> Self {
        Self {
            period,
            max_frame_dt,
            accumulator: 0.0,
            last: None,
        }
    }

    /// Feed elapsed seconds; returns the number of ticks to run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, self.max_frame_dt);
        let mut due = 0;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            due += 1;
        }
        due
    }

    /// Feed an absolute timestamp in milliseconds (e.g. from
    /// `requestAnimationFrame`). The first call only records the timestamp.
    pub fn advance_to(&mut self, now_ms: f64) -> u32 {
        let elapsed = match self.last {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last = Some(now_ms);
        self.advance(elapsed)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(crate::Params::TICK_DT, crate::Params::MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_whole_ticks() {
        let mut clock = TickClock::new(0.03125, 0.25);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.025), 1);
        assert_eq!(clock.advance(0.0625), 2);
    }

    #[test]
    fn test_advance_caps_long_stalls() {
        let mut clock = TickClock::new(0.03125, 0.25);
        assert_eq!(clock.advance(10.0), 8);
    }

    #[test]
    fn test_negative_elapsed_is_ignored() {
        let mut clock = TickClock::new(0.03125, 0.25);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(0.03125), 1, "Accumulator not driven negative");
    }

    #[test]
    fn test_advance_to_uses_timestamp_deltas() {
        let mut clock = TickClock::new(0.03125, 0.25);
        assert_eq!(clock.advance_to(1000.0), 0, "First timestamp only primes the clock");
        assert_eq!(clock.advance_to(1070.0), 2);
        assert_eq!(clock.advance_to(1080.0), 0);
    }
}
