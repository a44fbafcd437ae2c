use std::time::{Duration, Instant};

/// Schedules redraws at a fixed target rate.
///
/// The runtime asks [`FramePacer::poll`] when the event loop is about to wait.
/// Deadlines advance by whole intervals from the previous one so the average
/// rate stays on target; after a stall the schedule restarts from `now`
/// instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    /// Creates a pacer for `fps` frames per second. `0` is treated as `1`.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            next: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns whether a frame is due at `now`, and the next deadline to wait for.
    pub fn poll(&mut self, now: Instant) -> (bool, Instant) {
        let deadline = *self.next.get_or_insert(now);
        if now < deadline {
            return (false, deadline);
        }

        let mut next = deadline + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next = Some(next);
        (true, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_is_due() {
        let mut pacer = FramePacer::new(60);
        let now = Instant::now();
        let (due, next) = pacer.poll(now);
        assert!(due);
        assert_eq!(next, now + pacer.interval());
    }

    #[test]
    fn waits_until_deadline() {
        let mut pacer = FramePacer::new(50);
        let t0 = Instant::now();
        pacer.poll(t0);

        let (due, next) = pacer.poll(t0 + Duration::from_millis(5));
        assert!(!due);
        assert_eq!(next, t0 + Duration::from_millis(20));

        let (due, next) = pacer.poll(t0 + Duration::from_millis(21));
        assert!(due);
        assert_eq!(next, t0 + Duration::from_millis(40));
    }

    #[test]
    fn stall_restarts_schedule() {
        let mut pacer = FramePacer::new(100);
        let t0 = Instant::now();
        pacer.poll(t0);

        let late = t0 + Duration::from_secs(1);
        let (due, next) = pacer.poll(late);
        assert!(due);
        assert_eq!(next, late + Duration::from_millis(10));
    }

    #[test]
    fn zero_fps_is_one_per_second() {
        assert_eq!(FramePacer::new(0).interval(), Duration::from_secs(1));
    }
}
