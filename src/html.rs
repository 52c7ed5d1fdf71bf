//! HTML element constructor functions.
//!
//! Each function creates a [`PageElement`] for the matching tag, ready for
//! fluent construction:
//!
//! ```ignore
//! use clientele_pages::html::{form, input, label};
//!
//! let page = form()
//!     .attr("id", "customer")
//!     .child(label().attr("for", "firstName").child("First name"))
//!     .child(input().attr("type", "text").attr("id", "firstName"))
//!     .into_page();
//! ```

use crate::component::PageElement;

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> PageElement {
			PageElement::new($tag)
		}
	};
}

define_element!(
	/// Create a `<div>` element
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<form>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let page = form()
	///     .attr("id", "customer")
	///     .on(EventType::Submit, handler)
	///     .into_page();
	/// ```
	form, "form"
);

define_element!(
	/// Create a `<label>` element
	///
	/// Represents a caption for an item in a user interface.
	label, "label"
);

define_element!(
	/// Create an `<input>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let text_input = input()
	///     .attr("type", "text")
	///     .attr("name", "firstName");
	/// ```
	input, "input"
);

define_element!(
	/// Create a `<button>` element
	button, "button"
);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::IntoPage;

	#[test]
	fn test_constructors_use_matching_tags() {
		assert_eq!(div().tag_name(), "div");
		assert_eq!(span().tag_name(), "span");
		assert_eq!(p().tag_name(), "p");
		assert_eq!(form().tag_name(), "form");
		assert_eq!(label().tag_name(), "label");
		assert_eq!(input().tag_name(), "input");
		assert_eq!(button().tag_name(), "button");
	}

	#[test]
	fn test_input_is_void() {
		assert!(input().is_void());
		assert!(!form().is_void());
	}

	#[test]
	fn test_fluent_construction() {
		let page = form()
			.attr("id", "customer")
			.child(label().attr("for", "firstName").child("First name"))
			.child(input().attr("type", "text").attr("id", "firstName"))
			.into_page();

		let html = page.render_to_string();
		assert!(html.starts_with("<form id=\"customer\">"));
		assert!(html.contains("<label for=\"firstName\">First name</label>"));
		assert!(html.ends_with("</form>"));
	}
}
