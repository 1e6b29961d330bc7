//! Core types for deferred error handling.
//!
//! The stateful entity is [`Chain`], which threads type-erased values and a
//! sticky error through a linear sequence of actions. [`ActionArg`] and
//! [`InjectionPolicy`] describe, per call, which value an action receives.
//!
//! # Examples
//!
//! ```
//! use defer_chain::{chain_value, ActionArg, Chain, ChainValueExt};
//!
//! let mut chain: Chain<&str> = Chain::new();
//! chain.apply(|_| Ok(chain_value(10_i32)), ActionArg::previous());
//!
//! let (result, error) = chain.flush();
//! assert_eq!(result.downcast_value::<i32>(), Some(10));
//! assert!(error.is_none());
//! ```
use core::any::Any;

pub mod action_arg;
pub mod alloc_type;
pub mod chain;
pub mod injection_policy;

pub use action_arg::*;
pub use chain::*;
pub use injection_policy::*;

use crate::types::alloc_type::Box;

/// Type-erased value threaded between actions in a chain.
///
/// Actions may return heterogeneous types across a single chain, so results
/// are stored behind `dyn Any`; downcasting back to a concrete type is
/// deferred to the action author (see
/// [`ChainValueExt`](crate::traits::ChainValueExt)).
pub type ChainValue = Box<dyn Any>;
