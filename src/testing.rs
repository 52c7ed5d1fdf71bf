//! Testing utilities for mounting pages into a live document.
//!
//! [`create_container`] is the browser-test mount helper: it attaches a fresh
//! `<div>` to `document.body` so descendant-selector queries and synthetic
//! event dispatch behave as they would on a real page, and
//! [`TestContainer::render`] (re)renders a page tree into that same node.
//!
//! ```ignore
//! use clientele_pages::testing::create_container;
//!
//! let container = create_container()?;
//! container.render(CustomerForm::new(props).render())?;
//! let form = container.query("form[id=\"customer\"]").unwrap();
//! ```

use crate::component::Page;
use crate::dom::{MountError, document};

/// A DOM attachment point for browser tests.
///
/// Each test case owns its container exclusively; the helper performs no
/// teardown beyond what [`TestContainer::remove`] offers, leaving isolation
/// to the test runner.
pub struct TestContainer {
	container: web_sys::Element,
}

/// Creates a container `<div>` attached to the live document body.
pub fn create_container() -> Result<TestContainer, MountError> {
	let doc = document()?;
	let container = doc
		.create_element("div")
		.map_err(|_| MountError::CreateElementFailed)?;
	doc.body()
		.ok_or(MountError::NoDocument)?
		.append_child(&container)
		.map_err(|_| MountError::AppendChildFailed)?;
	Ok(TestContainer { container })
}

impl TestContainer {
	/// Renders the given page into the container.
	///
	/// The container is cleared first, so repeated calls re-render in place
	/// without accumulating elements.
	pub fn render(&self, page: Page) -> Result<(), MountError> {
		self.container.set_inner_html("");
		page.mount(&self.container)
	}

	/// Returns the container element for direct DOM queries.
	pub fn container(&self) -> &web_sys::Element {
		&self.container
	}

	/// Queries the container for the first descendant matching `selector`.
	pub fn query(&self, selector: &str) -> Option<web_sys::Element> {
		self.container.query_selector(selector).ok().flatten()
	}

	/// Detaches the container from the document.
	pub fn remove(&self) {
		self.container.remove();
	}
}

/// Dispatches a synthetic bubbling, cancelable event at the target.
///
/// Returns `false` if a handler called `prevent_default`, mirroring
/// `EventTarget::dispatchEvent`.
pub fn dispatch(target: &web_sys::EventTarget, event_type: crate::dom::EventType) -> bool {
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = web_sys::Event::new_with_event_init_dict(event_type.as_str(), &init)
		.expect("failed to construct synthetic event");
	target.dispatch_event(&event).unwrap_or(false)
}
