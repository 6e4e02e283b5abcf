//! Cancellable request contexts.
//!
//! A [`Context`] carries a cancellation signal and an optional deadline for
//! one logical call. Child contexts inherit the parent's cancellation and can
//! only narrow its deadline, never extend it.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Why a context stopped accepting work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The context, or one of its ancestors, was cancelled.
    #[error("context canceled")]
    Canceled,

    /// The context's deadline passed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Cancellation scope and deadline for a single call.
///
/// Cloning a context yields a handle to the same scope: cancelling any clone
/// cancels all of them.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use external::Context;
///
/// let parent = Context::background();
/// let child = parent.with_timeout(Duration::from_secs(1));
///
/// parent.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A root context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child whose deadline is at most `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a child whose deadline is the earlier of `deadline` and the
    /// parent's own deadline.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        };

        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Derive a child with the same deadline that can be cancelled on its own.
    pub fn with_cancel(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// The effective deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether this context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The reason this context is done, or `None` while it is still live.
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            return Some(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolve once the context is cancelled or its deadline passes.
    pub async fn done(&self) -> ContextError {
        match self.deadline {
            Some(deadline) => tokio::select! {
                biased;
                _ = self.token.cancelled() => ContextError::Canceled,
                _ = tokio::time::sleep_until(deadline) => ContextError::DeadlineExceeded,
            },
            None => {
                self.token.cancelled().await;
                ContextError::Canceled
            }
        }
    }

    /// Drive `future` to completion unless the context finishes first.
    ///
    /// A context that is already done wins without polling `future`. When the
    /// context wins, `future` is dropped, which aborts any I/O it owns.
    pub async fn run<F>(&self, future: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        // A timer for a past deadline is not guaranteed to fire on first poll.
        if let Some(reason) = self.err() {
            return Err(reason);
        }

        tokio::select! {
            biased;
            reason = self.done() => Err(reason),
            output = future => Ok(output),
        }
    }

    /// Guard that cancels this context when dropped.
    ///
    /// Binding the guard for the length of a call releases the scope on
    /// every exit path, including unwinding.
    pub fn release_on_drop(&self) -> DropGuard {
        self.token.clone().drop_guard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_background_is_live() {
        let ctx = Context::background();

        assert_eq!(ctx.err(), None);
        assert_eq!(ctx.deadline(), None);
        assert!(!ctx.is_cancelled());
    }

    #[tokio::test]
    async fn test_child_deadline_never_extends_parent() {
        let parent = Context::background().with_timeout(Duration::from_millis(100));
        let child = parent.with_timeout(Duration::from_secs(60));

        assert_eq!(child.deadline(), parent.deadline());

        let narrower = parent.with_timeout(Duration::from_millis(10));
        assert!(narrower.deadline() < parent.deadline());
    }

    #[tokio::test]
    async fn test_cancel_propagates_to_children_only() {
        let parent = Context::background();
        let child = parent.with_cancel();

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());

        let sibling = parent.with_cancel();
        parent.cancel();
        assert_eq!(sibling.err(), Some(ContextError::Canceled));
    }

    #[test]
    fn test_done_resolves_for_cancelled_context() {
        let ctx = Context::background().with_timeout(Duration::from_secs(60));
        ctx.cancel();

        assert_eq!(tokio_test::block_on(ctx.done()), ContextError::Canceled);
    }

    #[tokio::test]
    async fn test_release_on_drop_cancels_scope() {
        let parent = Context::background();
        let scope = parent.with_timeout(Duration::from_secs(5));

        {
            let _release = scope.release_on_drop();
        }

        assert!(scope.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn test_run_returns_output_when_live() {
        let ctx = Context::background().with_timeout(Duration::from_secs(5));

        let output = ctx.run(async { 7 }).await;

        assert_eq!(output, Ok(7));
    }

    #[tokio::test]
    async fn test_run_on_cancelled_context_skips_future() {
        let ctx = Context::background();
        ctx.cancel();

        let output = ctx.run(async { panic!("future must not be polled") }).await;

        assert_eq!(output, Err::<(), _>(ContextError::Canceled));
    }

    #[tokio::test]
    async fn test_run_times_out_pending_future() {
        let ctx = Context::background().with_timeout(Duration::from_millis(20));

        let output = ctx.run(std::future::pending::<()>()).await;

        assert_eq!(output, Err(ContextError::DeadlineExceeded));
        assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_run_never_polls_after_expired_deadline() {
        for _ in 0..200 {
            let ctx =
                Context::background().with_deadline(Instant::now() - Duration::from_millis(1));

            let output = ctx.run(async { 1 }).await;

            assert_eq!(output, Err(ContextError::DeadlineExceeded));
        }
    }

    #[tokio::test]
    async fn test_run_on_expired_deadline() {
        let ctx = Context::background().with_deadline(Instant::now() - Duration::from_millis(1));

        let output = ctx.run(async { panic!("future must not be polled") }).await;

        assert_eq!(output, Err::<(), _>(ContextError::DeadlineExceeded));
    }
}
