//! Traits for working with chained values.
//!
//! - [`ChainValueExt`]: downcast helpers for the type-erased values a
//!   [`Chain`](crate::Chain) threads between actions.

pub mod chain_value_ext;

pub use chain_value_ext::ChainValueExt;
