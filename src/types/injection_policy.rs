#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Instructs the chain on which value to feed into the next action.
///
/// When left unspecified, [`InjectionPolicy::UsePreviousResult`] is assumed.
///
/// # Examples
///
/// ```
/// use defer_chain::InjectionPolicy;
///
/// assert_eq!(InjectionPolicy::default(), InjectionPolicy::UsePreviousResult);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InjectionPolicy {
    /// Inject the result produced by the previous action in the chain.
    ///
    /// If no previous action has run, `None` is injected. Any value supplied
    /// in the argument to the chain entry point is ignored.
    #[default]
    UsePreviousResult,

    /// Inject the value supplied in the argument to the chain entry point.
    ///
    /// Any result held over from a previous action is ignored.
    UseSuppliedValue,
}
