//! Component system.
//!
//! Components render to a [`Page`] tree: an abstract representation of DOM
//! elements, text, and fragments that can be serialized to HTML on any target
//! and mounted into the real DOM on `wasm32`.

mod page;
mod props;
mod r#trait;

pub use page::{IntoPage, Page, PageElement, PageEventHandler};
pub use props::{Props, deserialize_props, serialize_props};
pub use r#trait::Component;
