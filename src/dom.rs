//! DOM abstraction layer.
//!
//! This module defines the event vocabulary shared by the page tree and the
//! mount errors surfaced when a tree is attached to a live document. Actual
//! DOM access only exists on `wasm32`; every other target renders pages to
//! strings instead.

use thiserror::Error;

/// DOM event types that can be attached to a [`PageElement`](crate::PageElement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// A pointer click.
	Click,
	/// An `input` event fired on every value edit.
	Input,
	/// A `change` event fired when an edit is committed.
	Change,
	/// A form submission.
	Submit,
	/// Focus gained.
	Focus,
	/// Focus lost.
	Blur,
}

impl EventType {
	/// Returns the DOM event name used with `addEventListener`.
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Click => "click",
			EventType::Input => "input",
			EventType::Change => "change",
			EventType::Submit => "submit",
			EventType::Focus => "focus",
			EventType::Blur => "blur",
		}
	}
}

impl std::fmt::Display for EventType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error type for mounting pages to the DOM.
#[derive(Debug, Clone, Error)]
pub enum MountError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("Failed to create element")]
	CreateElementFailed,
	/// Failed to set an attribute.
	#[error("Failed to set attribute")]
	SetAttributeFailed,
	/// Failed to append a child node.
	#[error("Failed to append child")]
	AppendChildFailed,
	/// Failed to attach an event listener.
	#[error("Failed to attach event listener")]
	AddListenerFailed,
}

/// Returns the global `Document`.
#[cfg(target_arch = "wasm32")]
pub fn document() -> Result<web_sys::Document, MountError> {
	web_sys::window()
		.ok_or(MountError::NoWindow)?
		.document()
		.ok_or(MountError::NoDocument)
}
