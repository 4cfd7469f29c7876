//! Startup sequence: bring up the collaborators once, then hand them to the
//! measurement task.

use log::{error, info};

use crate::Error;

/// Where the firmware ends up after [`launch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Measurement task spawned and looping
    Running,
    /// Startup failed; nothing else happens until reset
    Halted,
}

/// Run `init` and pass what it builds to `spawn`.
///
/// A failure in either step is logged once and leaves the firmware halted;
/// `spawn` is never called when `init` fails.
pub fn launch<P, I, S>(init: I, spawn: S) -> State
where
    I: FnOnce() -> Result<P, Error>,
    S: FnOnce(P) -> Result<(), Error>,
{
    let parts = match init() {
        Ok(parts) => parts,
        Err(e) => {
            error!("I2C init failed ({}). Halting.", e);
            return State::Halted;
        }
    };

    info!("I2C init success. Starting measurements.");

    match spawn(parts) {
        Ok(()) => State::Running,
        Err(e) => {
            error!("{}. Halting.", e);
            State::Halted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::LoopConfig,
        logic::{
            LoopDriver, show_splash,
            tests::{Event, FixedSource, NoDelay, RecordingDisplay},
        },
    };

    use core::cell::Cell;
    use log::{Level, LevelFilter, Log, Metadata, Record};

    std::thread_local! {
        static ERRORS: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts error records emitted on the current test thread
    struct ErrorCounter;

    impl Log for ErrorCounter {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if record.level() == Level::Error {
                ERRORS.with(|count| count.set(count.get() + 1));
            }
        }

        fn flush(&self) {}
    }

    static COUNTER: ErrorCounter = ErrorCounter;

    fn errors_logged_by<F: FnOnce()>(f: F) -> usize {
        // Another test may have installed it already
        let _ = log::set_logger(&COUNTER);
        log::set_max_level(LevelFilter::Trace);
        ERRORS.with(|count| count.set(0));
        f();
        ERRORS.with(|count| count.get())
    }

    #[test]
    fn bus_failure_logs_a_single_error() {
        let errors = errors_logged_by(|| {
            let state = launch(|| Err::<(), _>(Error::Bus("failed to create I2C bus")), |_| Ok(()));
            assert_eq!(state, State::Halted);
        });
        assert_eq!(errors, 1);
    }

    #[test]
    fn successful_launch_logs_no_error() {
        let errors = errors_logged_by(|| {
            assert_eq!(launch(|| Ok(()), |_| Ok(())), State::Running);
        });
        assert_eq!(errors, 0);
    }

    #[test]
    fn bus_failure_never_spawns() {
        let mut spawned = false;
        let state = launch(
            || Err::<(), _>(Error::Bus("failed to create I2C bus")),
            |_| {
                spawned = true;
                Ok(())
            },
        );

        assert_eq!(state, State::Halted);
        assert!(!spawned);
    }

    #[test]
    fn successful_init_spawns_driver() {
        let mut spawned = None;
        let state = launch(
            || {
                let mut display = RecordingDisplay::default();
                show_splash(&mut display)?;
                Ok(LoopDriver::new(
                    FixedSource::new(22.5, 55.3, 1012.8),
                    display,
                    NoDelay,
                    &LoopConfig::default(),
                ))
            },
            |driver| {
                spawned = Some(driver);
                Ok(())
            },
        );

        assert_eq!(state, State::Running);
        let (_, display, _) = spawned.expect("driver handed to spawn").into_parts();
        assert_eq!(display.events[1], Event::Text(0, "Initializing...".into()));
    }

    #[test]
    fn spawn_failure_halts() {
        let state = launch(|| Ok(()), |_| Err(Error::Spawn));
        assert_eq!(state, State::Halted);
    }
}
