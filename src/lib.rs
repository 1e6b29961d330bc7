//! Deferred error handling for linear chains of fallible actions.
//!
//! `defer-chain` lets a caller execute a sequence of fallible operations
//! without checking an error after each step: once any action fails, every
//! subsequent action is skipped automatically, and the first error together
//! with the last successfully produced value is retrieved at the end with a
//! single [`Chain::flush`] call.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `defer_chain::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Threading values through a chain
//!
//! ```
//! use defer_chain::{chain_value, ActionArg, Chain, ChainValue, ChainValueExt};
//!
//! fn add_one(v: Option<ChainValue>) -> Result<Option<ChainValue>, &'static str> {
//!     Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) + 1))
//! }
//!
//! fn times_six(v: Option<ChainValue>) -> Result<Option<ChainValue>, &'static str> {
//!     Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) * 6))
//! }
//!
//! let mut chain: Chain<&str> = Chain::new();
//! chain.apply(add_one, ActionArg::supplied(1_i32));
//! chain.apply(times_six, ActionArg::previous());
//!
//! let (result, error) = chain.flush();
//! assert!(error.is_none());
//! assert_eq!(result.downcast_value::<i32>(), Some(12));
//! ```
//!
//! ## Short-circuiting on failure
//!
//! ```
//! use defer_chain::{Chain, InjectionPolicy};
//!
//! let mut chain: Chain<&str> = Chain::new();
//! chain.apply_nullary_void(|| Err("step one failed"), InjectionPolicy::UsePreviousResult);
//!
//! // Never runs: the chain already holds an error.
//! chain.apply_nullary_void(|| unreachable!(), InjectionPolicy::UsePreviousResult);
//!
//! assert_eq!(chain.flush_result().unwrap_err(), "step one failed");
//! ```
//!
//! ## Boolean actions inline in conditionals
//!
//! ```
//! use defer_chain::{Chain, InjectionPolicy};
//!
//! let mut chain: Chain<&str> = Chain::new();
//! if chain.apply_nullary_bool(|| Ok(true), InjectionPolicy::UsePreviousResult) {
//!     chain.apply_nullary_void(|| Ok(()), InjectionPolicy::UsePreviousResult);
//! }
//! let (_, error) = chain.flush();
//! assert!(error.is_none());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between plain values, `Result`, and `Chain`
pub mod convert;
/// Macro sugar for applying action sequences
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for working with chained values
pub mod traits;
/// The chain context, action descriptors, and injection policies
pub mod types;

// Re-export the common surface at the root; the prelude bundles the same
// items for glob imports.
pub use convert::*;
pub use traits::*;
pub use types::{ActionArg, Chain, ChainValue, InjectionPolicy};
