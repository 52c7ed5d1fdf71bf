//! Page tree: the unified representation of renderable content.

use std::borrow::Cow;
use std::sync::Arc;

use crate::dom::EventType;
#[cfg(target_arch = "wasm32")]
use crate::dom::MountError;

/// Type alias for event handler functions.
#[cfg(target_arch = "wasm32")]
pub type PageEventHandler = Arc<dyn Fn(web_sys::Event) + 'static>;

/// Type alias for event handler functions (non-WASM placeholder).
#[cfg(not(target_arch = "wasm32"))]
pub type PageEventHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// A unified representation of renderable content.
///
/// `Page` is the core abstraction of the component system. It can represent
/// DOM elements, text nodes, fragments, or nothing at all.
#[derive(Debug)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple pages (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty page (renders nothing).
	Empty,
}

/// Represents a DOM element in the page tree.
pub struct PageElement {
	/// The tag name (e.g., "form", "input").
	tag: Cow<'static, str>,
	/// HTML attributes in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child pages.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
	/// Event handlers attached to this element.
	event_handlers: Vec<(EventType, PageEventHandler)>,
}

impl std::fmt::Debug for PageElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageElement")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child page.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child pages.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Adds an event handler.
	pub fn on(
		mut self,
		event_type: EventType,
		handler: impl crate::callback::IntoEventHandler,
	) -> Self {
		self.event_handlers
			.push((event_type, handler.into_event_handler()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the named attribute, if set.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child pages.
	pub fn child_pages(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, PageEventHandler)] {
		&self.event_handlers
	}

	/// Renders this element to an HTML string.
	pub fn to_html(&self) -> String {
		let mut output = String::new();
		self.render_html(&mut output);
		output
	}

	fn render_html(&self, output: &mut String) {
		output.push('<');
		output.push_str(self.tag_name());

		for (name, value) in self.attrs() {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}

		if self.is_void() {
			output.push_str(" />");
		} else {
			output.push('>');
			for child in self.child_pages() {
				child.render_to_string_inner(output);
			}
			output.push_str("</");
			output.push_str(self.tag_name());
			output.push('>');
		}
	}
}

impl Page {
	/// Creates an element page.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text page.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment page.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty page.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Renders the page to an HTML string.
	///
	/// This is the target-neutral render path; it is what native tests assert
	/// against.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => el.render_html(output),
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}

	/// Mounts the page into a DOM element (client-side only).
	///
	/// Event handlers registered on page elements are attached with
	/// `addEventListener`; the wrapping closures are leaked via
	/// `Closure::forget` so they outlive the mount call, matching the
	/// lifetime of the mounted nodes.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		self.mount_inner(parent)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(self, parent: &web_sys::Element) -> Result<(), MountError> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		use crate::dom::document;

		match self {
			Page::Element(el) => {
				let doc = document()?;
				let element = doc
					.create_element(&el.tag)
					.map_err(|_| MountError::CreateElementFailed)?;

				for (name, value) in el.attrs {
					element
						.set_attribute(&name, &value)
						.map_err(|_| MountError::SetAttributeFailed)?;
				}

				for (event_type, handler) in el.event_handlers {
					let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
						handler(event);
					}) as Box<dyn FnMut(web_sys::Event)>);
					element
						.add_event_listener_with_callback(
							event_type.as_str(),
							closure.as_ref().unchecked_ref(),
						)
						.map_err(|_| MountError::AddListenerFailed)?;
					closure.forget(); // listener lives as long as the node
				}

				for child in el.children {
					child.mount_inner(&element)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			Page::Text(text) => {
				let doc = document()?;
				let text_node = doc.create_text_node(&text);
				parent
					.append_child(&text_node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			Page::Fragment(children) => {
				for child in children {
					child.mount_inner(parent)?;
				}
			}
			Page::Empty => {}
		}

		Ok(())
	}
}

/// Trait for types that can be converted into a [`Page`].
///
/// This is the primary abstraction for renderable content. Implementing this
/// trait allows any type to be used in the page tree.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

// Core implementations

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

// Tuple implementations for fragments

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
