//! Periodic tasks that rotate combinations and drive the countdown.
//!
//! Both tasks belong to one [`TrainerTimers`] and are always stopped and
//! restarted together, so a settings change can never leave a stale timer
//! firing with the old configuration.

use crate::config::COUNTDOWN_TICK_MS;
use crate::settings::ComboDuration;
use gloo_timers::callback::Interval;
use log::debug;

/// Something that can run a callback every `period_ms`.
///
/// Dropping the returned handle must cancel the callback.
pub trait Schedule {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// `setInterval` through `gloo-timers`. Only usable in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSchedule;

impl Schedule for BrowserSchedule {
    type Handle = Interval;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// A named repeating task that can be started and stopped.
pub struct PeriodicTask<H> {
    name: &'static str,
    handle: Option<H>,
}

impl<H> PeriodicTask<H> {
    pub fn new(name: &'static str) -> Self {
        Self { name, handle: None }
    }

    /// Starts the task, cancelling any previous run first.
    pub fn start<S>(&mut self, schedule: &S, period_ms: u32, callback: impl FnMut() + 'static)
    where
        S: Schedule<Handle = H>,
    {
        self.stop();
        self.handle = Some(schedule.every(period_ms, Box::new(callback)));
        debug!("Started {} task every {} ms", self.name, period_ms);
    }

    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            debug!("Stopped {} task", self.name);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

/// The rotation and countdown tasks of one trainer.
pub struct TrainerTimers<H> {
    rotation: PeriodicTask<H>,
    countdown: PeriodicTask<H>,
}

impl<H> Default for TrainerTimers<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TrainerTimers<H> {
    pub fn new() -> Self {
        Self {
            rotation: PeriodicTask::new("rotation"),
            countdown: PeriodicTask::new("countdown"),
        }
    }

    /// Stops both tasks and starts them again for `interval`.
    ///
    /// The countdown is registered first: when both fall due together it
    /// reaches zero before the rotation resets it.
    pub fn restart<S>(
        &mut self,
        schedule: &S,
        interval: ComboDuration,
        on_rotate: impl FnMut() + 'static,
        on_tick: impl FnMut() + 'static,
    ) where
        S: Schedule<Handle = H>,
    {
        self.stop();
        self.countdown.start(schedule, COUNTDOWN_TICK_MS, on_tick);
        self.rotation.start(schedule, interval.millis(), on_rotate);
    }

    pub fn stop(&mut self) {
        self.rotation.stop();
        self.countdown.stop();
    }

    pub fn is_running(&self) -> bool {
        self.rotation.is_running() && self.countdown.is_running()
    }
}
