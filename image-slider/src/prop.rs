//! Callback and render-delegate handles for slider configuration.
//!
//! ## Usage
//!
//! Wrap caller closures so [`ImageSliderArgs`](crate::ImageSliderArgs) stays
//! `Clone` and comparable by identity.

use std::sync::Arc;

/// Stable, comparable slot for a shared callable trait object.
///
/// `Slot` compares by identity (`Arc::ptr_eq`) so args containing closures can
/// still be compared without deep closure comparisons.
struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    fn shared(&self) -> &F {
        &self.inner
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Used for `on_position_changed` and `on_press`.
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.slot.shared())(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

/// Stable, comparable render delegate for `Fn(T) -> R`.
///
/// Semantically distinct from [`CallbackWith`]: it is called synchronously
/// while building the view tree and must not have side effects.
pub struct RenderSlotWith<T, R> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> RenderSlotWith<T, R> {
    /// Create a render slot from a closure.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(render)),
        }
    }

    /// Execute the render closure with an input value.
    pub fn render(&self, value: T) -> R {
        (self.slot.shared())(value)
    }
}

impl<T, R, F> From<F> for RenderSlotWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl<T, R> Clone for RenderSlotWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for RenderSlotWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> std::fmt::Debug for RenderSlotWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RenderSlotWith(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_compare_by_identity() {
        let a = CallbackWith::<usize>::new(|_| {});
        let b = a.clone();
        let c = CallbackWith::<usize>::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn render_slot_returns_value() {
        let slot = RenderSlotWith::new(|n: usize| n * 2);
        assert_eq!(slot.render(21), 42);
    }
}
