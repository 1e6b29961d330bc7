//! Ergonomic macro sugar over the [`Chain`](crate::Chain) entry points.
//!
//! - [`macro@crate::chain`] - Applies a sequence of unary actions to a
//!   context with default descriptors, optionally seeding the first action
//!   with a supplied value.
//!
//! # Examples
//!
//! ```
//! use defer_chain::{chain, chain_value, Chain, ChainValueExt};
//!
//! let mut ctx: Chain<&str> = Chain::new();
//! chain!(ctx, seed 1_i32 =>
//!     |v: Option<defer_chain::ChainValue>| Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) + 1)),
//!     |v: Option<defer_chain::ChainValue>| Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) * 6)),
//! );
//!
//! let (result, error) = ctx.flush();
//! assert!(error.is_none());
//! assert_eq!(result.downcast_value::<i32>(), Some(12));
//! ```

/// Applies a sequence of unary actions to a chain context.
///
/// Each action is applied with [`ActionArg::previous`](crate::ActionArg::previous),
/// so every action receives the result of the one before it. The `seed` form
/// injects a supplied value into the first action instead. This is pure
/// sugar: each element expands to one [`Chain::apply`](crate::Chain::apply)
/// call, with the usual short-circuiting on failure.
///
/// # Syntax
///
/// - `chain!(ctx => a, b, c)` - Thread the previous result through `a`, `b`, `c`.
/// - `chain!(ctx, seed value => a, b, c)` - Same, but `a` receives `value`.
///
/// # Examples
///
/// ```
/// use defer_chain::{chain, chain_value, Chain, ChainValue, ChainValueExt};
///
/// fn double(v: Option<ChainValue>) -> Result<Option<ChainValue>, &'static str> {
///     Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) * 2))
/// }
///
/// let mut ctx: Chain<&str> = Chain::new();
/// chain!(ctx, seed 3_i32 => double, double);
/// assert_eq!(ctx.flush_result().unwrap().downcast_value::<i32>(), Some(12));
/// ```
#[macro_export]
macro_rules! chain {
    ($ctx:expr, seed $value:expr => $first:expr $(, $rest:expr)* $(,)?) => {{
        $ctx.apply($first, $crate::ActionArg::supplied($value));
        $($ctx.apply($rest, $crate::ActionArg::previous());)*
    }};
    ($ctx:expr => $($action:expr),+ $(,)?) => {{
        $($ctx.apply($action, $crate::ActionArg::previous());)*
    }};
}
