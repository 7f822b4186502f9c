//! Lifecycle participation for beans held by a scope.

use std::error::Error;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// Shareable error returned from user lifecycle callbacks.
pub type ErrorPtr = Arc<dyn Error + Send + Sync>;

/// Implemented (usually by generated adapters) for beans that take part in
/// scope lifecycle. `post_construct` fires on [start](crate::scope::BeanScope::start),
/// `pre_destroy` on the first [close](crate::scope::BeanScope::close); both
/// run in lifecycle registration order.
#[cfg_attr(test, automock)]
pub trait BeanLifecycle: Send + Sync {
    fn post_construct(&self) -> Result<(), ErrorPtr> {
        Ok(())
    }

    fn pre_destroy(&self) -> Result<(), ErrorPtr> {
        Ok(())
    }
}
