//! Reusable element fixtures.
//!
//! - [`DropLedger`] / [`Tracked`]: count constructions, clones and drops.
//! - [`PanicOnClone`]: panics once a shared clone budget runs out.
//! - [`PanicOnDefault`]: panics once a per-thread construction budget runs out.
//! - [`Counted`]: default-constructible, counts constructions and drops per thread.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

/// Shared counters for a family of [`Tracked`] values.
///
/// Every value made by [`track`](DropLedger::track) or cloned from one
/// reports back here, so a test can assert that each element was dropped
/// exactly once.
#[derive(Clone, Default)]
pub struct DropLedger {
    counts: Rc<Counts>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value.
    pub fn track(&self, value: i32) -> Tracked {
        self.counts.created.set(self.counts.created.get() + 1);
        Tracked {
            value,
            counts: Rc::clone(&self.counts),
        }
    }

    /// Values created (including clones).
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Clones made from tracked values.
    pub fn clones(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Values dropped.
    pub fn drops(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.drops()
    }
}

/// An `i32` that reports its clones and drops to a [`DropLedger`].
pub struct Tracked {
    pub value: i32,
    counts: Rc<Counts>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counts.created.set(self.counts.created.get() + 1);
        self.counts.cloned.set(self.counts.cloned.get() + 1);
        Self {
            value: self.value,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// A value whose `clone` panics after a shared budget of successful clones.
///
/// All values built from the same budget (including clones) draw from it.
#[derive(Debug)]
pub struct PanicOnClone {
    pub value: i32,
    budget: Rc<Cell<usize>>,
}

impl PanicOnClone {
    /// Create a family of values that may be cloned `budget` times in total.
    pub fn family(budget: usize) -> impl Fn(i32) -> PanicOnClone {
        let budget = Rc::new(Cell::new(budget));
        move |value| PanicOnClone {
            value,
            budget: Rc::clone(&budget),
        }
    }

    /// Clones still allowed before the next one panics.
    pub fn remaining(&self) -> usize {
        self.budget.get()
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self {
            value: self.value,
            budget: Rc::clone(&self.budget),
        }
    }
}

impl PartialEq for PanicOnClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

thread_local! {
    static DEFAULT_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
    static COUNTED_CREATED: Cell<usize> = const { Cell::new(0) };
    static COUNTED_DROPPED: Cell<usize> = const { Cell::new(0) };
}

fn spend_default_budget() {
    DEFAULT_BUDGET.with(|budget| match budget.get() {
        Some(0) => panic!("default budget exhausted"),
        Some(left) => budget.set(Some(left - 1)),
        None => {}
    });
}

/// A value whose `Default` impl panics once the current thread's budget
/// is spent.
///
/// The budget is unlimited until [`arm`](PanicOnDefault::arm) is called.
/// Each test runs on its own thread, so budgets do not leak between tests.
#[derive(Debug, PartialEq, Eq)]
pub struct PanicOnDefault(pub u32);

impl PanicOnDefault {
    /// Allow `successes` more default constructions on this thread.
    ///
    /// The budget is shared with [`Counted`].
    pub fn arm(successes: usize) {
        DEFAULT_BUDGET.with(|budget| budget.set(Some(successes)));
    }

    /// Remove the budget on this thread.
    pub fn disarm() {
        DEFAULT_BUDGET.with(|budget| budget.set(None));
    }
}

impl Default for PanicOnDefault {
    fn default() -> Self {
        spend_default_budget();
        PanicOnDefault(0)
    }
}

/// A default-constructible value that counts constructions and drops on
/// the current thread.
///
/// `Default` draws from the same budget as [`PanicOnDefault`], so a test
/// can arm a failure and then check that every constructed value was
/// dropped. Counters are per thread, not per test; call
/// [`reset`](Counted::reset) first.
#[derive(Debug, PartialEq, Eq)]
pub struct Counted {
    value: u32,
}

impl Counted {
    pub fn new(value: u32) -> Self {
        COUNTED_CREATED.with(|n| n.set(n.get() + 1));
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Zero both counters on this thread.
    pub fn reset() {
        COUNTED_CREATED.with(|n| n.set(0));
        COUNTED_DROPPED.with(|n| n.set(0));
    }

    /// Values constructed on this thread since the last reset.
    pub fn created() -> usize {
        COUNTED_CREATED.with(Cell::get)
    }

    /// Values dropped on this thread since the last reset.
    pub fn drops() -> usize {
        COUNTED_DROPPED.with(Cell::get)
    }

    /// Values constructed but not yet dropped.
    pub fn live() -> usize {
        Self::created() - Self::drops()
    }
}

impl Default for Counted {
    fn default() -> Self {
        spend_default_budget();
        Self::new(0)
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        COUNTED_DROPPED.with(|n| n.set(n.get() + 1));
    }
}
