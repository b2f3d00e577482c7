//! Content validation
//!
//! Every payload is validated before any template is selected or any element
//! is built. A failure aborts the whole payload.

use crate::error::Result;

/// Check that content is complete enough to serialize
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<()> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Validate::validate)
    }
}
