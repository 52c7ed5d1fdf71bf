//! Callback types and event handler conversion traits.
//!
//! This module provides the type-safe [`Callback`] wrapper used for component
//! callbacks (such as the customer form's submit callback) and the
//! [`IntoEventHandler`] trait for converting closures to
//! [`PageEventHandler`]s attached to page elements.

use std::sync::Arc;

use crate::component::PageEventHandler;

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable while
/// providing a stable reference that won't change between renders.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives
/// - `Ret`: The return type of the callback (defaults to `()`)
///
/// ## Example
///
/// ```ignore
/// use clientele_pages::{Callback, CustomerProps};
///
/// let on_submit = Callback::new(|values: CustomerProps| {
///     info_log!("captured: {:?}", values);
/// });
/// ```
// Callback struct with conditional Send + Sync bounds for non-WASM targets
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cloneable callback wrapper (server-side version).
///
/// See the WASM version for full documentation. This version requires
/// `Send + Sync` bounds for thread-safe server-side usage.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

// WASM implementation without Send + Sync bounds
#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

// Non-WASM implementation with Send + Sync bounds
#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Trait for converting various handler types to [`PageEventHandler`].
///
/// This trait is implemented for closures that take an event argument and for
/// [`PageEventHandler`] itself (identity conversion), so element builders can
/// accept both inline closures and pre-built handlers.
pub trait IntoEventHandler {
	/// Converts self into a [`PageEventHandler`].
	fn into_event_handler(self) -> PageEventHandler;
}

/// Blanket implementation for closures that match the event handler signature.
///
/// # WASM Build
/// Accepts `Fn(web_sys::Event) + 'static`
///
/// # Non-WASM Build
/// Accepts `Fn() + Send + Sync + 'static`
#[cfg(target_arch = "wasm32")]
impl<F> IntoEventHandler for F
where
	F: Fn(web_sys::Event) + 'static,
{
	fn into_event_handler(self) -> PageEventHandler {
		Arc::new(self)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<F> IntoEventHandler for F
where
	F: Fn() + Send + Sync + 'static,
{
	fn into_event_handler(self) -> PageEventHandler {
		Arc::new(self)
	}
}

/// Identity implementation for PageEventHandler.
impl IntoEventHandler for PageEventHandler {
	fn into_event_handler(self) -> PageEventHandler {
		self
	}
}

/// Event handler helper with concrete argument type for better inference.
///
/// Unlike going through [`IntoEventHandler`] directly, this function has a
/// concrete argument type, allowing Rust to infer the closure parameter type.
#[cfg(target_arch = "wasm32")]
pub fn event_handler(f: impl Fn(web_sys::Event) + 'static) -> PageEventHandler {
	Arc::new(f)
}

/// Event handler helper with concrete argument type (server-side version).
///
/// See WASM version for documentation.
#[cfg(not(target_arch = "wasm32"))]
pub fn event_handler(f: impl Fn() + Send + Sync + 'static) -> PageEventHandler {
	Arc::new(f)
}
