use core::any::Any;
use core::fmt;

use crate::types::alloc_type::Box;
use crate::types::{ChainValue, InjectionPolicy};

/// Per-call descriptor for a chained action: an optional override value and
/// the [`InjectionPolicy`] selecting what the action receives.
///
/// # Examples
///
/// ```
/// use defer_chain::{ActionArg, InjectionPolicy};
///
/// let arg = ActionArg::supplied(42_i32);
/// assert_eq!(arg.policy, InjectionPolicy::UseSuppliedValue);
///
/// let arg = ActionArg::previous();
/// assert_eq!(arg.policy, InjectionPolicy::UsePreviousResult);
/// assert!(arg.value.is_none());
/// ```
#[derive(Default)]
pub struct ActionArg {
    /// The override value, injected when `policy` is
    /// [`InjectionPolicy::UseSuppliedValue`].
    pub value: Option<ChainValue>,
    /// Which value the action receives.
    pub policy: InjectionPolicy,
}

impl ActionArg {
    /// Creates a descriptor that injects `value` into the action, ignoring any
    /// previous result held by the chain.
    #[inline]
    pub fn supplied<T: Any>(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
            policy: InjectionPolicy::UseSuppliedValue,
        }
    }

    /// Creates a descriptor that injects the chain's previous result.
    ///
    /// Equivalent to `ActionArg::default()`.
    #[inline]
    pub fn previous() -> Self {
        Self::default()
    }
}

impl From<InjectionPolicy> for ActionArg {
    #[inline]
    fn from(policy: InjectionPolicy) -> Self {
        Self { value: None, policy }
    }
}

impl fmt::Debug for ActionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionArg")
            .field("value", &self.value.as_ref().map(|_| "<value>"))
            .field("policy", &self.policy)
            .finish()
    }
}
