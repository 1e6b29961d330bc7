use core::fmt;

use crate::types::alloc_type::Box;
use crate::types::{ActionArg, ChainValue, InjectionPolicy};

/// A context for executing a linear sequence of fallible actions while
/// deferring error handling to the end of the sequence.
///
/// Once any action reports an error, every subsequent action applied to the
/// same context is skipped (not invoked), and the error stays sticky until
/// [`flush`](Chain::flush) is called. This turns the usual "check an error
/// after every call" pattern into a single check at the end, while still
/// guaranteeing that nothing runs after a failure.
///
/// The error type `E` is fully opaque to the chain: it is stored and handed
/// back exactly as the actions produced it, never wrapped or translated.
/// Action results are threaded through the chain as type-erased
/// [`ChainValue`]s; actions downcast them back to concrete types (see
/// [`ChainValueExt`](crate::traits::ChainValueExt)).
///
/// Execution is strictly synchronous and single-threaded: each action runs
/// to completion on the caller's thread before the entry point returns. A
/// context belongs to one logical call sequence at a time; sharing one
/// across threads requires external mutual exclusion.
///
/// # Examples
///
/// ```
/// use defer_chain::{chain_value, ActionArg, Chain, ChainValueExt};
///
/// let mut chain: Chain<&str> = Chain::new();
///
/// let add_one = |v: Option<defer_chain::ChainValue>| {
///     Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) + 1))
/// };
/// let times_six = |v: Option<defer_chain::ChainValue>| {
///     Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) * 6))
/// };
///
/// chain.apply(add_one, ActionArg::supplied(1_i32));
/// chain.apply(times_six, ActionArg::previous());
///
/// let (result, error) = chain.flush();
/// assert!(error.is_none());
/// assert_eq!(result.downcast_value::<i32>(), Some(12));
/// ```
pub struct Chain<E> {
    /// The error reported by the most recently attempted action, or `None`
    /// if no action in the current chain has failed.
    ///
    /// Public for seeding a chain with a synthetic starting error and for
    /// tests; production code paths should only mutate it through the
    /// `apply*` entry points.
    pub last_error: Option<E>,
    /// The result of the most recently executed successful action, or a
    /// caller-supplied seed value before any action has run.
    pub last_result: Option<ChainValue>,
}

impl<E> Chain<E> {
    /// Creates an empty context: no error, no previous result.
    #[inline]
    pub fn new() -> Self {
        Self {
            last_error: None,
            last_result: None,
        }
    }

    /// Applies one action to the chain. This is the primitive every other
    /// entry point delegates to.
    ///
    /// If the chain already holds an error, the action is not invoked and
    /// the context is left untouched. Otherwise the value selected by
    /// `arg.policy` is moved into the action, the action runs synchronously,
    /// and its outcome is recorded: `Ok(v)` stores `v` as the new previous
    /// result, `Err(e)` stores `e` and clears the previous result.
    ///
    /// # Arguments
    ///
    /// * `action` - The action in canonical shape: takes the injected value,
    ///   returns the next result or an error.
    /// * `arg` - Override value and injection policy for this call.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{chain_value, ActionArg, Chain, ChainValueExt};
    ///
    /// let mut chain: Chain<&str> = Chain::new();
    /// chain.apply(|_| Ok(chain_value("ready")), ActionArg::previous());
    /// assert_eq!(chain.last_result.downcast_value_ref::<&str>(), Some(&"ready"));
    /// ```
    pub fn apply<F>(&mut self, action: F, arg: ActionArg)
    where
        F: FnOnce(Option<ChainValue>) -> Result<Option<ChainValue>, E>,
    {
        if self.last_error.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("chain already failed, skipping action");
            return;
        }

        let ActionArg { value, policy } = arg;
        let injected = match policy {
            InjectionPolicy::UseSuppliedValue => value,
            InjectionPolicy::UsePreviousResult => self.last_result.take(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(?policy, injected = injected.is_some(), "applying action");

        match action(injected) {
            Ok(result) => {
                self.last_result = result;
                self.last_error = None;
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("action reported an error, chain is now failed");
                self.last_result = None;
                self.last_error = Some(error);
            }
        }
    }

    /// Applies an action which takes no arguments and returns a value.
    ///
    /// The injected value has nowhere to go, so only the policy is threaded
    /// through; the action's result becomes the chain's previous result as
    /// usual.
    #[inline]
    pub fn apply_nullary<F>(&mut self, action: F, policy: InjectionPolicy)
    where
        F: FnOnce() -> Result<Option<ChainValue>, E>,
    {
        self.apply(|_| action(), ActionArg::from(policy));
    }

    /// Applies an action which takes one argument and returns only an error.
    ///
    /// Since the action produces no value, `None` is recorded as a
    /// pseudo-result; the next action in the chain receives `None` unless
    /// its descriptor overrides the injected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{ActionArg, Chain, ChainValueExt};
    ///
    /// let mut chain: Chain<&str> = Chain::new();
    /// chain.apply_void(
    ///     |v| {
    ///         assert_eq!(v.downcast_value::<i32>(), Some(7));
    ///         Ok(())
    ///     },
    ///     ActionArg::supplied(7_i32),
    /// );
    /// assert!(chain.last_result.is_none());
    /// ```
    #[inline]
    pub fn apply_void<F>(&mut self, action: F, arg: ActionArg)
    where
        F: FnOnce(Option<ChainValue>) -> Result<(), E>,
    {
        self.apply(|value| action(value).map(|()| None), arg);
    }

    /// Applies an action which takes no arguments and returns only an error.
    ///
    /// Combines the adaptations of [`apply_nullary`](Chain::apply_nullary)
    /// and [`apply_void`](Chain::apply_void): the injected value is ignored
    /// and `None` is recorded as the pseudo-result.
    #[inline]
    pub fn apply_nullary_void<F>(&mut self, action: F, policy: InjectionPolicy)
    where
        F: FnOnce() -> Result<(), E>,
    {
        self.apply(|_| action().map(|()| None), ActionArg::from(policy));
    }

    /// Applies an action which takes one argument and returns a boolean.
    ///
    /// The boolean is threaded into the chain as the previous result, and is
    /// also returned inline so the call can sit directly inside a
    /// conditional expression. The inline return is `false` whenever the
    /// chain holds an error after the call, including when the action was
    /// skipped because of an earlier failure, so a failed chain never takes
    /// a `true` branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{ActionArg, Chain, InjectionPolicy};
    ///
    /// let mut chain: Chain<&str> = Chain::new();
    /// if chain.apply_bool(|_| Ok(true), ActionArg::previous()) {
    ///     chain.apply_nullary_void(|| Ok(()), InjectionPolicy::UsePreviousResult);
    /// }
    /// assert!(chain.last_error.is_none());
    /// ```
    pub fn apply_bool<F>(&mut self, action: F, arg: ActionArg) -> bool
    where
        F: FnOnce(Option<ChainValue>) -> Result<bool, E>,
    {
        self.apply(
            |value| action(value).map(|flag| Some(Box::new(flag) as ChainValue)),
            arg,
        );
        if self.last_error.is_some() {
            return false;
        }
        self.last_result
            .as_ref()
            .and_then(|value| value.downcast_ref::<bool>())
            .copied()
            .unwrap_or(false)
    }

    /// Applies an action which takes no arguments and returns a boolean.
    ///
    /// Identical to [`apply_bool`](Chain::apply_bool) except that the
    /// injected value is ignored.
    #[inline]
    pub fn apply_nullary_bool<F>(&mut self, action: F, policy: InjectionPolicy) -> bool
    where
        F: FnOnce() -> Result<bool, E>,
    {
        self.apply_bool(|_| action(), ActionArg::from(policy))
    }

    /// Returns the chain's final result and error, and resets the context
    /// back to its empty state so it can be reused for a fresh chain.
    ///
    /// Both fields are taken together; this is the only place a recorded
    /// error becomes observable.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{chain_value, ActionArg, Chain, ChainValueExt};
    ///
    /// let mut chain: Chain<&str> = Chain::new();
    /// chain.apply(|_| Ok(chain_value(3_i32)), ActionArg::previous());
    ///
    /// let (result, error) = chain.flush();
    /// assert_eq!(result.downcast_value::<i32>(), Some(3));
    /// assert!(error.is_none());
    /// assert!(chain.last_result.is_none());
    /// ```
    #[inline]
    pub fn flush(&mut self) -> (Option<ChainValue>, Option<E>) {
        (self.last_result.take(), self.last_error.take())
    }

    /// Like [`flush`](Chain::flush), but folded into the idiomatic `Result`
    /// shape: the error wins if one was recorded, otherwise the final result
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{ActionArg, Chain};
    ///
    /// let mut chain: Chain<&str> = Chain::new();
    /// chain.apply_void(|_| Err("boom"), ActionArg::previous());
    /// assert_eq!(chain.flush_result().unwrap_err(), "boom");
    /// ```
    #[inline]
    pub fn flush_result(&mut self) -> Result<Option<ChainValue>, E> {
        match self.flush() {
            (_, Some(error)) => Err(error),
            (result, None) => Ok(result),
        }
    }
}

impl<E> Default for Chain<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for Chain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("last_error", &self.last_error)
            .field("last_result", &self.last_result.as_ref().map(|_| "<value>"))
            .finish()
    }
}
