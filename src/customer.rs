//! Customer capture form.
//!
//! [`CustomerForm`] renders a `<form id="customer">` with a labeled text input
//! per customer field and a submit control. Field values are pre-populated
//! from [`CustomerProps`]; after that the browser's input widgets own them.
//! On submission the component reads the inputs' current values, assembles a
//! fresh `CustomerProps`, and invokes the caller-supplied callback exactly
//! once. There is no validation and no internal state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::component::{Component, IntoPage, Page, Props};
#[cfg(target_arch = "wasm32")]
use crate::dom::EventType;
use crate::html::{form, input, label};

/// The `id` attribute of the rendered form element.
pub const CUSTOMER_FORM_ID: &str = "customer";

/// Field identifiers and their fixed label text, in render order.
///
/// The identifier doubles as the input's `id` and `name` and as the label's
/// `for` target.
pub const CUSTOMER_FIELDS: [(&str, &str); 3] = [
	("firstName", "First name"),
	("lastName", "Last name"),
	("phoneNumber", "Phone number"),
];

/// Input configuration for [`CustomerForm`].
///
/// All fields default to the empty string; a missing field and an explicitly
/// empty one are equivalent. Serde renames match the DOM field identifiers,
/// so the serialized form is `{"firstName": ..., "lastName": ...,
/// "phoneNumber": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerProps {
	/// The customer's first name.
	pub first_name: String,
	/// The customer's last name.
	pub last_name: String,
	/// The customer's phone number.
	pub phone_number: String,
}

impl CustomerProps {
	/// Returns the value of the named field, or `""` for unknown names.
	pub fn field_value(&self, field: &str) -> &str {
		match field {
			"firstName" => &self.first_name,
			"lastName" => &self.last_name,
			"phoneNumber" => &self.phone_number,
			_ => "",
		}
	}

	/// Sets the named field; unknown names are ignored.
	pub fn set_field(&mut self, field: &str, value: impl Into<String>) {
		match field {
			"firstName" => self.first_name = value.into(),
			"lastName" => self.last_name = value.into(),
			"phoneNumber" => self.phone_number = value.into(),
			_ => {}
		}
	}
}

impl Props for CustomerProps {
	fn from_attrs(attrs: &HashMap<String, String>) -> Self {
		let mut props = Self::default();
		for (field, _) in CUSTOMER_FIELDS {
			if let Some(value) = attrs.get(field) {
				props.set_field(field, value.clone());
			}
		}
		props
	}
}

/// The customer capture form component.
///
/// ## Example
///
/// ```ignore
/// use clientele_pages::{Callback, Component, CustomerForm, CustomerProps};
///
/// let page = CustomerForm::new(CustomerProps {
///     first_name: "Ashley".into(),
///     ..Default::default()
/// })
/// .on_submit(Callback::new(|values| {
///     // persist the captured customer
/// }))
/// .render();
/// ```
#[derive(Clone)]
pub struct CustomerForm {
	props: CustomerProps,
	on_submit: Option<Callback<CustomerProps>>,
}

impl CustomerForm {
	/// Creates the form with the given initial field values.
	pub fn new(props: CustomerProps) -> Self {
		Self {
			props,
			on_submit: None,
		}
	}

	/// Sets the callback invoked with the current field values on submission.
	pub fn on_submit(mut self, callback: Callback<CustomerProps>) -> Self {
		self.on_submit = Some(callback);
		self
	}

	/// Returns the props the form was constructed with.
	pub fn props(&self) -> &CustomerProps {
		&self.props
	}

	/// Invokes the submit callback with the given current field values.
	///
	/// This is the rendering-engine-independent submission path: the DOM
	/// submit handler funnels through it, and tests may call it directly with
	/// a constructed snapshot. A missing callback is a silent no-op.
	pub fn submit(&self, values: CustomerProps) {
		if let Some(on_submit) = &self.on_submit {
			on_submit.call(values);
		}
	}

	/// Builds the DOM submit handler: prevent default navigation, read the
	/// inputs' current values off the submitted form, invoke the callback.
	#[cfg(target_arch = "wasm32")]
	fn submit_handler(&self) -> impl Fn(web_sys::Event) + 'static {
		let component = self.clone();
		move |event: web_sys::Event| {
			event.prevent_default();
			component.submit(current_values(&event));
		}
	}
}

impl Component for CustomerForm {
	fn render(&self) -> Page {
		let mut root = form().attr("id", CUSTOMER_FORM_ID);

		for (field, label_text) in CUSTOMER_FIELDS {
			root = root
				.child(label().attr("for", field).child(label_text))
				.child(
					input()
						.attr("type", "text")
						.attr("id", field)
						.attr("name", field)
						.attr("value", self.props.field_value(field).to_string()),
				);
		}

		let root = root.child(input().attr("type", "submit"));

		#[cfg(target_arch = "wasm32")]
		let root = root.on(EventType::Submit, self.submit_handler());

		root.into_page()
	}

	fn name() -> &'static str {
		"CustomerForm"
	}
}

/// Reads the current displayed values out of the submitted form element.
#[cfg(target_arch = "wasm32")]
fn current_values(event: &web_sys::Event) -> CustomerProps {
	use wasm_bindgen::JsCast;

	let mut values = CustomerProps::default();

	let Some(form) = event
		.target()
		.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
	else {
		crate::warn_log!("submit event had no form target");
		return values;
	};

	for (field, _) in CUSTOMER_FIELDS {
		let value = form
			.query_selector(&format!("input[name=\"{field}\"]"))
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
			.map(|input| input.value())
			.unwrap_or_default();
		values.set_field(field, value);
	}

	values
}
