//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use defer_chain::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`]
//! - **Types**: [`Chain`], [`ActionArg`], [`InjectionPolicy`], [`ChainValue`]
//! - **Traits**: [`ChainValueExt`]
//! - **Helpers**: [`chain_value`]
//!
//! # Examples
//!
//! ```
//! use defer_chain::prelude::*;
//!
//! let mut ctx: Chain<&str> = Chain::new();
//! chain!(ctx, seed 20_i32 =>
//!     |v: Option<ChainValue>| Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) + 1)),
//! );
//! assert_eq!(ctx.flush_result().unwrap().downcast_value::<i32>(), Some(21));
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::types::{ActionArg, Chain, ChainValue, InjectionPolicy};

// Traits
pub use crate::traits::ChainValueExt;

// Helpers
pub use crate::convert::chain_value;
