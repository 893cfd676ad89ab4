//! Effect contexts for [`crate::traverse_m`].
//!
//! An [`Effect`] is a capability with two essential operations: lifting a
//! plain value into the context (`pure`) and sequencing an ordered run of
//! wrapped values into one wrapped `Vec` (`sequence`). `map` and `and_then`
//! complete the monad surface needed to state the traversal laws.
//!
//! Every context here sequences strictly left to right and stops pulling
//! from the input iterator once its failure channel fires. Law coverage per
//! context:
//!
//! | context       | identity | short-circuit | composition via `and_then`      |
//! |---------------|----------|---------------|---------------------------------|
//! | [`Identity`]  | yes      | n/a           | yes                             |
//! | [`Optional`]  | yes      | yes           | yes                             |
//! | [`Fallible`]  | yes      | yes           | success values and Ok/Err only  |
//! | [`Journal`]   | yes      | n/a           | values only, log order differs  |
//!
//! For `Fallible` both sides of the composition law fail together, but may
//! report different errors. For `Journal` the sequential form logs all of
//! `f` before all of `g`, while the fused form interleaves them per leaf.

use std::marker::PhantomData;

/// A traversal context, described by the type it wraps values in.
///
/// There is no asynchronous context. A boxed future or deferred thunk would
/// need `T: 'static` on `Wrapped<T>` and on every method here, which would
/// restrict all contexts, not only that one.
pub trait Effect {
    type Wrapped<T>;

    fn pure<T>(value: T) -> Self::Wrapped<T>;

    fn map<T, U, F>(wrapped: Self::Wrapped<T>, f: F) -> Self::Wrapped<U>
    where
        F: FnOnce(T) -> U;

    fn and_then<T, U, F>(wrapped: Self::Wrapped<T>, f: F) -> Self::Wrapped<U>
    where
        F: FnOnce(T) -> Self::Wrapped<U>;

    /// Combines wrapped values in iteration order.
    fn sequence<T, I>(items: I) -> Self::Wrapped<Vec<T>>
    where
        I: IntoIterator<Item = Self::Wrapped<T>>;
}

/// No effect: the wrapped value is the value itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Effect for Identity {
    type Wrapped<T> = T;

    fn pure<T>(value: T) -> T {
        value
    }

    fn map<T, U, F>(wrapped: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(wrapped)
    }

    fn and_then<T, U, F>(wrapped: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(wrapped)
    }

    fn sequence<T, I>(items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }
}

/// Optional values; any `None` makes the whole sequence `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

impl Effect for Optional {
    type Wrapped<T> = Option<T>;

    fn pure<T>(value: T) -> Option<T> {
        Some(value)
    }

    fn map<T, U, F>(wrapped: Option<T>, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        wrapped.map(f)
    }

    fn and_then<T, U, F>(wrapped: Option<T>, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        wrapped.and_then(f)
    }

    fn sequence<T, I>(items: I) -> Option<Vec<T>>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        items.into_iter().collect()
    }
}

/// Result-or-error; the first `Err` in sequence order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallible<E>(PhantomData<fn() -> E>);

impl<E> Effect for Fallible<E> {
    type Wrapped<T> = Result<T, E>;

    fn pure<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    fn map<T, U, F>(wrapped: Result<T, E>, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        wrapped.map(f)
    }

    fn and_then<T, U, F>(wrapped: Result<T, E>, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        wrapped.and_then(f)
    }

    fn sequence<T, I>(items: I) -> Result<Vec<T>, E>
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        items.into_iter().collect()
    }
}

/// A value together with the ordered log produced while computing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logged<T, L> {
    pub value: T,
    pub log: Vec<L>,
}

impl<T, L> Logged<T, L> {
    pub fn new(value: T, log: Vec<L>) -> Self {
        Self { value, log }
    }

    /// A value with a single log entry.
    pub fn tell(value: T, entry: L) -> Self {
        Self {
            value,
            log: vec![entry],
        }
    }

    pub fn into_parts(self) -> (T, Vec<L>) {
        (self.value, self.log)
    }
}

/// Writer context: logs are concatenated in sequencing order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Journal<L>(PhantomData<fn() -> L>);

impl<L> Effect for Journal<L> {
    type Wrapped<T> = Logged<T, L>;

    fn pure<T>(value: T) -> Logged<T, L> {
        Logged::new(value, Vec::new())
    }

    fn map<T, U, F>(wrapped: Logged<T, L>, f: F) -> Logged<U, L>
    where
        F: FnOnce(T) -> U,
    {
        Logged::new(f(wrapped.value), wrapped.log)
    }

    fn and_then<T, U, F>(wrapped: Logged<T, L>, f: F) -> Logged<U, L>
    where
        F: FnOnce(T) -> Logged<U, L>,
    {
        let Logged { value, mut log } = wrapped;
        let next = f(value);
        log.extend(next.log);
        Logged::new(next.value, log)
    }

    fn sequence<T, I>(items: I) -> Logged<Vec<T>, L>
    where
        I: IntoIterator<Item = Logged<T, L>>,
    {
        let mut values = Vec::new();
        let mut log = Vec::new();
        for item in items {
            values.push(item.value);
            log.extend(item.log);
        }
        Logged::new(values, log)
    }
}
