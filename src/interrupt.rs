//! Single-shot interrupt handling.
//!
//! Bridges exactly one OS termination signal (SIGINT/SIGTERM, or Ctrl-C /
//! Ctrl-Break on Windows) to an optional cleanup callback and a single-use
//! completion channel. Typical use in a tool's main:
//!
//! ```no_run
//! # async fn demo() -> std::io::Result<()> {
//! use kitbag::InterruptHandler;
//!
//! let mut handler = InterruptHandler::with_cleanup(|| {
//!     // flush state, remove temp files
//! });
//! handler.start()?;
//! handler.wait().await; // exits the process with status 0
//! # Ok(())
//! # }
//! ```

use std::io;
use tokio::sync::oneshot;

type CleanupFn = Box<dyn FnOnce() + Send + 'static>;

/// One-shot bridge from OS termination signals to a cleanup callback.
///
/// [`start`](Self::start) arms the signal subscription and returns
/// immediately; the callback runs at most once, on the background listener
/// task, and has completed before [`wait`](Self::wait) observes completion.
pub struct InterruptHandler {
    cleanup: Option<CleanupFn>,
    done: Option<oneshot::Receiver<()>>,
    trigger: Option<oneshot::Sender<()>>,
}

impl InterruptHandler {
    /// Handler with no cleanup callback. Completion still fires on signal.
    pub fn new() -> Self {
        Self {
            cleanup: None,
            done: None,
            trigger: None,
        }
    }

    /// Handler that runs `cleanup` once before completion fires.
    pub fn with_cleanup<F>(cleanup: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            cleanup: Some(Box::new(cleanup)),
            done: None,
            trigger: None,
        }
    }

    /// Subscribe to termination signals and spawn the one-shot listener.
    ///
    /// The subscription is registered before this returns, so a signal
    /// arriving right after `start` is not lost. Errors only when signal
    /// registration itself fails; that is fatal for callers relying on
    /// graceful shutdown, since there is no fallback path. Must be called
    /// within a tokio runtime.
    ///
    /// Signals after the first are ignored: the listener consumes exactly
    /// one event and then becomes inert.
    pub fn start(&mut self) -> io::Result<()> {
        let mut signals = TerminationSignals::subscribe()?;
        let (done_tx, done_rx) = oneshot::channel();
        let (trigger_tx, trigger_rx) = oneshot::channel::<()>();
        let cleanup = self.cleanup.take();

        tokio::spawn(async move {
            let fired = tokio::select! {
                _ = signals.recv() => true,
                sent = trigger_rx => sent.is_ok(),
            };
            if !fired {
                // Trigger half dropped without firing (the handler went
                // away without waiting); stay armed for the real signal.
                signals.recv().await;
            }
            if let Some(cleanup) = cleanup {
                cleanup();
            }
            let _ = done_tx.send(());
        });

        self.done = Some(done_rx);
        self.trigger = Some(trigger_tx);
        Ok(())
    }

    /// Deliver a simulated interrupt through the same path a real signal
    /// takes. No effect before `start` or after the first delivery.
    pub fn trigger(&mut self) {
        if let Some(trigger) = self.trigger.take() {
            let _ = trigger.send(());
        }
    }

    /// Block until a termination signal has been handled, then exit the
    /// process with status 0. Never returns normally.
    ///
    /// The cleanup callback has run to completion before the exit happens.
    pub async fn wait(mut self) {
        self.wait_done().await;
        std::process::exit(0);
    }

    /// Await completion without exiting: once this returns, the callback
    /// (if any) has finished. Returns immediately when `start` was never
    /// called.
    pub async fn wait_done(&mut self) {
        if let Some(done) = self.done.take() {
            let _ = done.await;
        }
    }
}

impl Default for InterruptHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// The platform's termination-signal subscription, registered eagerly so
/// `start` can surface registration failures.
#[cfg(unix)]
struct TerminationSignals {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    fn subscribe() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(&mut self) {
        tokio::select! {
            _ = self.sigint.recv() => {}
            _ = self.sigterm.recv() => {}
        }
    }
}

#[cfg(windows)]
struct TerminationSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
    ctrl_break: tokio::signal::windows::CtrlBreak,
}

#[cfg(windows)]
impl TerminationSignals {
    fn subscribe() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
            ctrl_break: tokio::signal::windows::ctrl_break()?,
        })
    }

    async fn recv(&mut self) {
        tokio::select! {
            _ = self.ctrl_c.recv() => {}
            _ = self.ctrl_break.recv() => {}
        }
    }
}
