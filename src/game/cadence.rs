/// Fixed-interval stepping. Accumulates elapsed time and reports how many
/// whole intervals have passed, so behavior does not depend on frame rate.
#[derive(Clone, Debug)]
pub struct Cadence {
    interval: f64,
    elapsed: f64
}

impl Cadence {
    pub fn new(interval: f64) -> Self {
        Cadence { interval, elapsed: 0.0 }
    }

    /// A cadence whose first interval is already due: the next `advance`
    /// fires at least once, even with zero elapsed time.
    pub fn primed(interval: f64) -> Self {
        Cadence { interval, elapsed: interval }
    }

    pub fn advance(&mut self, dt: f64) -> u32 {
        if !(self.interval > 0.0) {
            return 0;
        }

        self.elapsed += dt.max(0.0);

        let due = (self.elapsed / self.interval).floor();
        if !due.is_finite() {
            self.elapsed = 0.0;
            return u32::max_value();
        }

        self.elapsed = (self.elapsed - due * self.interval).max(0.0);
        due.min(u32::max_value() as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_whole_interval() {
        let mut cadence = Cadence::new(1.0);

        assert_eq!(cadence.advance(0.4), 0);
        assert_eq!(cadence.advance(0.4), 0);
        assert_eq!(cadence.advance(0.4), 1);
        assert_eq!(cadence.advance(2.0), 2);
    }

    #[test]
    fn huge_steps_saturate_instead_of_spinning() {
        let mut fine = Cadence::new(1e-3);
        assert_eq!(fine.advance(5.0e6), u32::max_value());

        let mut primed = Cadence::primed(1.0);
        assert_eq!(primed.advance(1e17), u32::max_value());
        assert!(primed.advance(0.0) <= 1);

        let mut unbounded = Cadence::new(1.0);
        assert_eq!(unbounded.advance(::std::f64::INFINITY), u32::max_value());
        assert_eq!(unbounded.advance(0.5), 0);
    }

    #[test]
    fn frame_rate_does_not_change_total() {
        let mut coarse = Cadence::new(0.5);
        let mut fine = Cadence::new(0.5);

        let coarse_total: u32 = (0..10).map(|_| coarse.advance(0.25)).sum();
        let fine_total: u32 = (0..40).map(|_| fine.advance(0.0625)).sum();

        assert_eq!(coarse_total, 5);
        assert_eq!(fine_total, 5);
    }

    #[test]
    fn primed_fires_immediately() {
        let mut cadence = Cadence::primed(5.0);

        assert_eq!(cadence.advance(0.0), 1);
        assert_eq!(cadence.advance(4.9), 0);
        assert_eq!(cadence.advance(0.1), 1);
    }

    #[test]
    fn non_positive_interval_never_fires() {
        let mut cadence = Cadence::new(0.0);
        assert_eq!(cadence.advance(10.0), 0);
    }
}
