use crate::error::SearchTimeout;

fn unlimited_time() -> f64 {
    f64::INFINITY
}

static UNLIMITED_TIME: fn() -> f64 = unlimited_time;

/// Wraps the caller's remaining-time query (milliseconds) for one decision.
///
/// `check` has to be called at the top of every recursive search call, so the worst case overrun is a single
/// successor generation plus evaluation.
pub struct Clock<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold: f64,
}

impl<'a> Clock<'a> {
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold: f64) -> Self {
        Clock { time_left, threshold }
    }

    pub fn time_left(&self) -> f64 {
        (self.time_left)()
    }

    pub fn check(&self) -> Result<(), SearchTimeout> {
        if self.time_left() < self.threshold {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }
}

impl Clock<'static> {
    /// clock that never runs out
    pub fn unlimited() -> Self {
        Clock::new(&UNLIMITED_TIME, 0.0)
    }
}

/*====================================================================================================================*/
