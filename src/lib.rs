//! Clientele Pages - WASM-based Customer Form Frontend
//!
//! A small Django-inspired frontend crate for the Clientele customer
//! management app. Components render to an abstract [`Page`] tree that can be
//! serialized to HTML on any target and mounted into the real DOM on
//! `wasm32`.
//!
//! ## Architecture
//!
//! - [`component`]: Page tree, `IntoPage` conversions, `Component` and `Props` traits
//! - [`dom`]: DOM event types and document access
//! - [`html`]: HTML element constructor functions
//! - [`callback`](mod@callback): Cloneable callback wrappers for event handlers
//! - [`customer`]: The customer capture form
//! - [`testing`]: Mount helper for browser tests (WASM only)
//!
//! ## Example
//!
//! ```ignore
//! use clientele_pages::{Callback, CustomerForm, CustomerProps};
//!
//! let form = CustomerForm::new(CustomerProps {
//!     first_name: "Ashley".into(),
//!     ..Default::default()
//! })
//! .on_submit(Callback::new(|values| {
//!     info_log!("captured customer: {:?}", values);
//! }));
//!
//! let html = form.render().render_to_string();
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod component;
pub mod customer;
pub mod dom;
pub mod html;
pub mod logging;

// Testing utilities mount into a live document and are WASM-only.
#[cfg(target_arch = "wasm32")]
pub mod testing;

pub use callback::Callback;
pub use component::{Component, IntoPage, Page, PageElement, PageEventHandler, Props};
pub use customer::{CUSTOMER_FIELDS, CUSTOMER_FORM_ID, CustomerForm, CustomerProps};
pub use dom::{EventType, MountError};
pub use html::{button, div, form, input, label, p, span};
#[cfg(target_arch = "wasm32")]
pub use testing::{TestContainer, create_container};

// Logging macros are exported from the crate root via #[macro_export]:
// clientele_pages::debug_log!, info_log!, warn_log!, error_log!
