//! Conversion helpers between plain values, `Result`, and [`Chain`].
//!
//! These adapters cover the boundaries of a chain: boxing a concrete value
//! into the type-erased shape actions return, and seeding a fresh context
//! from an existing `Result`.
//!
//! # Examples
//!
//! ```
//! use defer_chain::{chain_value, Chain, ChainValueExt};
//!
//! // Box a concrete value into the shape an action returns.
//! let value = chain_value(42_i32);
//! assert_eq!(value.downcast_value_ref::<i32>(), Some(&42));
//!
//! // Seed a chain from a prior fallible step.
//! let upstream: Result<i32, &str> = Err("upstream failed");
//! let chain: Chain<&str> = upstream.into();
//! assert!(chain.last_error.is_some());
//! ```

use core::any::Any;

use crate::types::alloc_type::Box;
use crate::types::{Chain, ChainValue};

/// Boxes a concrete value into the `Option<ChainValue>` shape actions
/// return and chains thread.
///
/// # Arguments
///
/// * `value` - Any value to erase; downcast it back with
///   [`ChainValueExt`](crate::traits::ChainValueExt).
///
/// # Examples
///
/// ```
/// use defer_chain::{chain_value, ActionArg, Chain};
///
/// let mut chain: Chain<&str> = Chain::new();
/// chain.apply(|_| Ok(chain_value("seeded")), ActionArg::previous());
/// assert!(chain.last_result.is_some());
/// ```
#[inline]
pub fn chain_value<T: Any>(value: T) -> Option<ChainValue> {
    Some(Box::new(value))
}

/// Seeds a fresh context from an existing `Result`: `Ok` becomes the
/// previous result the first action receives, `Err` becomes a synthetic
/// starting error that short-circuits the whole chain.
impl<T: Any, E> From<Result<T, E>> for Chain<E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self {
                last_error: None,
                last_result: chain_value(value),
            },
            Err(error) => Self {
                last_error: Some(error),
                last_result: None,
            },
        }
    }
}
