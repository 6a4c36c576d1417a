//! Unified error handling with Sentry integration.
//!
//! Provides the `CartError` type returned by fallible cart operations and the
//! helpers that report swallowed failures to Sentry.

use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type for the storefront.
#[derive(Debug, Error)]
pub enum CartError {
    /// The slot store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The cart snapshot could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A previous holder of the shared cart panicked mid-update.
    #[error("Cart lock poisoned")]
    LockPoisoned,
}

/// Report a persistence failure that is not propagated to the caller.
///
/// The in-memory cart stays authoritative; the failure is captured to Sentry
/// and logged so that it shows up next to the user's breadcrumbs.
pub fn report_persist_failure(err: &CartError) {
    let event_id = sentry::capture_error(err);
    tracing::error!(
        error = %err,
        sentry_event_id = %event_id,
        "Failed to persist cart"
    );
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added item to cart", Some(&[("product_id", "Oak Dresser")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        let err = CartError::LockPoisoned;
        assert_eq!(err.to_string(), "Cart lock poisoned");

        let err = CartError::from(StorageError::Unavailable("quota exceeded".to_string()));
        assert_eq!(
            err.to_string(),
            "Storage error: Storage unavailable: quota exceeded"
        );
    }

    #[test]
    fn test_report_without_sentry_client_is_noop() {
        // No client is bound in tests; capturing must not panic.
        report_persist_failure(&CartError::LockPoisoned);
        add_breadcrumb("cart", "test", Some(&[("product_id", "A")]));
    }
}
