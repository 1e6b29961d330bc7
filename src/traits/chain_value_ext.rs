//! Extension trait for recovering concrete types from chained values.
//!
//! Values move between actions as `Option<ChainValue>`, erased behind
//! `dyn Any`. [`ChainValueExt`] adds the downcast helpers action authors
//! reach for at the top of nearly every unary action.
//!
//! # Examples
//!
//! ```
//! use defer_chain::{chain_value, ChainValueExt};
//!
//! let value = chain_value(21_i32);
//! assert_eq!(value.downcast_value_ref::<i32>(), Some(&21));
//! assert_eq!(value.downcast_value::<i32>(), Some(21));
//! ```

use core::any::Any;

use crate::types::ChainValue;

/// Downcast helpers for `Option<ChainValue>`.
///
/// A `None` value, or a value of a different concrete type, downcasts to
/// `None`; the action decides how to treat that (a default, or its own
/// error).
pub trait ChainValueExt {
    /// Takes the value out and downcasts it to `T` by value.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{chain_value, ChainValueExt};
    ///
    /// let value = chain_value("hello");
    /// assert_eq!(value.downcast_value::<&str>(), Some("hello"));
    ///
    /// let value = chain_value(1_u8);
    /// assert_eq!(value.downcast_value::<i64>(), None);
    /// ```
    fn downcast_value<T: Any>(self) -> Option<T>;

    /// Downcasts to a shared reference without consuming the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use defer_chain::{chain_value, ChainValueExt};
    ///
    /// let value = chain_value(3.5_f64);
    /// assert_eq!(value.downcast_value_ref::<f64>(), Some(&3.5));
    /// assert!(value.is_some());
    /// ```
    fn downcast_value_ref<T: Any>(&self) -> Option<&T>;
}

impl ChainValueExt for Option<ChainValue> {
    #[inline]
    fn downcast_value<T: Any>(self) -> Option<T> {
        self.and_then(|value| value.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    #[inline]
    fn downcast_value_ref<T: Any>(&self) -> Option<&T> {
        self.as_ref().and_then(|value| value.downcast_ref::<T>())
    }
}
