//! Task execution used by the merge sort to fork one half of a window.
//!
//! The sort never spawns threads itself. It asks an [`Executor`] to run two closures and waits
//! for both. Whatever runs them must re-raise a panic from either closure at the join point, and
//! must let the sibling closure run to completion first.

use std::panic::{self, AssertUnwindSafe};

/// Runs `oper_a` and `oper_b`, potentially in parallel, and returns both results.
///
/// `oper_a` is the continuation of the calling thread, `oper_b` is the forked task.
pub trait Executor: Sync {
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}

/// The global rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rayon;

impl Executor for Rayon {
    #[inline]
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        rayon::join(oper_a, oper_b)
    }
}

/// A caller supplied, bounded rayon pool.
impl Executor for rayon::ThreadPool {
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        // Already inside this pool `install` runs the closure in place.
        self.install(|| rayon::join(oper_a, oper_b))
    }
}

/// Runs both closures on the calling thread, `oper_a` first.
///
/// Mirrors the panic behavior of `rayon::join`: if `oper_a` panics, `oper_b` still runs before
/// the panic is resumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Executor for Sequential {
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let result_a = panic::catch_unwind(AssertUnwindSafe(oper_a));
        let result_b = oper_b();

        match result_a {
            Ok(result_a) => (result_a, result_b),
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

impl<E: Executor> Executor for &E {
    #[inline]
    fn join<A, B, RA, RB>(&self, oper_a: A, oper_b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (**self).join(oper_a, oper_b)
    }
}
