//! Component trait definition.

use super::page::Page;

/// Trait for reusable UI components.
///
/// Components are the building blocks of the UI. They encapsulate their props
/// and rendering logic into reusable units.
///
/// # Example
///
/// ```ignore
/// use clientele_pages::{Component, Page, PageElement, IntoPage};
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> Page {
///         PageElement::new("div")
///             .child(format!("Hello, {}!", self.name))
///             .into_page()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::page::{IntoPage, PageElement};

	struct TestComponent {
		message: String,
	}

	impl Component for TestComponent {
		fn render(&self) -> Page {
			PageElement::new("div")
				.child(self.message.clone())
				.into_page()
		}

		fn name() -> &'static str {
			"TestComponent"
		}
	}

	#[test]
	fn test_component_render() {
		let comp = TestComponent {
			message: "Hello".to_string(),
		};
		assert_eq!(comp.render().render_to_string(), "<div>Hello</div>");
	}

	#[test]
	fn test_component_name() {
		assert_eq!(TestComponent::name(), "TestComponent");
	}
}
