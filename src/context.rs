//! Scoped values that must be provided before they are read.
//!
//! [`create_safe_context`] returns a reader and a provider sharing one
//! holder. Reading with nothing provided is an error, never a default.
//! Providing pushes onto a stack and returns a guard. Dropping the guard
//! ends its scope and every scope opened after it, so an out-of-order drop
//! can never bring back a value whose provider is gone.
//!
//! ```
//! use propinfer::context::{create_safe_context, ContextError};
//!
//! let (theme, provider) = create_safe_context::<String>();
//! assert_eq!(theme.get(), Err(ContextError::OutsideProvider));
//!
//! provider.scope("dark".to_string(), || {
//!     assert_eq!(theme.get().as_deref(), Ok("dark"));
//! });
//! assert!(!theme.is_provided());
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("safe context used outside of its provider")]
    OutsideProvider,
}

/// Provided values, innermost last.
type Holder<T> = Rc<RefCell<Vec<T>>>;

pub fn create_safe_context<T>() -> (SafeContext<T>, ContextProvider<T>) {
    let holder: Holder<T> = Rc::new(RefCell::new(Vec::new()));
    (
        SafeContext {
            holder: Rc::clone(&holder),
        },
        ContextProvider { holder },
    )
}

/// Read side of a safe context.
pub struct SafeContext<T> {
    holder: Holder<T>,
}

impl<T> SafeContext<T> {
    /// Run `f` against the provided value.
    ///
    /// The value stays borrowed while `f` runs; providing a new value to
    /// the same context from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, ContextError> {
        let stack = self.holder.borrow();
        stack.last().map(f).ok_or(ContextError::OutsideProvider)
    }

    pub fn is_provided(&self) -> bool {
        !self.holder.borrow().is_empty()
    }
}

impl<T: Clone> SafeContext<T> {
    pub fn get(&self) -> Result<T, ContextError> {
        self.with(T::clone)
    }
}

impl<T> Clone for SafeContext<T> {
    fn clone(&self) -> Self {
        Self {
            holder: Rc::clone(&self.holder),
        }
    }
}

/// Write side of a safe context.
pub struct ContextProvider<T> {
    holder: Holder<T>,
}

impl<T> ContextProvider<T> {
    /// Provide `value` until the returned guard is dropped.
    #[must_use]
    pub fn provide(&self, value: T) -> ProvideGuard<T> {
        let mut stack = self.holder.borrow_mut();
        let depth = stack.len();
        stack.push(value);
        ProvideGuard {
            holder: Rc::clone(&self.holder),
            depth,
        }
    }

    /// Run `f` with `value` provided.
    pub fn scope<R>(&self, value: T, f: impl FnOnce() -> R) -> R {
        let _guard = self.provide(value);
        f()
    }
}

/// RAII guard that ends its scope, and any scope nested in it, on drop.
pub struct ProvideGuard<T> {
    holder: Holder<T>,
    /// Stack length before this guard's value was pushed
    depth: usize,
}

impl<T> Drop for ProvideGuard<T> {
    fn drop(&mut self) {
        self.holder.borrow_mut().truncate(self.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
    }

    #[test]
    fn test_read_before_provide_fails() {
        let (use_user, _provider) = create_safe_context::<User>();
        assert_eq!(use_user.get(), Err(ContextError::OutsideProvider));
        assert_eq!(
            use_user.with(|u| u.name.len()),
            Err(ContextError::OutsideProvider)
        );
    }

    #[test]
    fn test_read_inside_scope_returns_value() {
        let (use_user, provider) = create_safe_context::<User>();
        let jane = User {
            name: "Jane".to_string(),
        };

        let seen = provider.scope(jane.clone(), || use_user.get());
        assert_eq!(seen, Ok(jane));
        assert_eq!(use_user.get(), Err(ContextError::OutsideProvider));
    }

    #[test]
    fn test_nested_scopes_restore_outer_value() {
        let (use_level, provider) = create_safe_context::<u32>();

        let outer = provider.provide(1);
        {
            let _inner = provider.provide(2);
            assert_eq!(use_level.get(), Ok(2));
        }
        assert_eq!(use_level.get(), Ok(1));
        drop(outer);
        assert!(!use_level.is_provided());
    }

    #[test]
    fn test_outer_guard_dropped_first_ends_inner_scope() {
        let (use_level, provider) = create_safe_context::<u32>();

        let outer = provider.provide(1);
        let inner = provider.provide(2);
        drop(outer);
        assert_eq!(use_level.get(), Err(ContextError::OutsideProvider));
        drop(inner);
        assert_eq!(use_level.get(), Err(ContextError::OutsideProvider));
    }

    #[test]
    fn test_cloned_reader_shares_holder() {
        let (reader, provider) = create_safe_context::<&'static str>();
        let other = reader.clone();
        let _guard = provider.provide("shared");
        assert_eq!(other.get(), Ok("shared"));
    }
}
