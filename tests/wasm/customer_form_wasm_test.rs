//! Customer form browser tests.
//!
//! Mounts the form into a live document via the test container, queries the
//! real DOM, and drives submission with synthetic events.
//!
//! **Run with**: `wasm-pack test --chrome --headless`

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use clientele_pages::testing::{TestContainer, create_container, dispatch};
use clientele_pages::{
	CUSTOMER_FIELDS, CUSTOMER_FORM_ID, Callback, Component, CustomerForm, CustomerProps, EventType,
};

wasm_bindgen_test_configure!(run_in_browser);

fn render_into(container: &TestContainer, form: &CustomerForm) {
	container.render(form.render()).expect("mount failed");
}

fn form_element(container: &TestContainer) -> web_sys::Element {
	container
		.query(&format!("form[id=\"{CUSTOMER_FORM_ID}\"]"))
		.expect("customer form not mounted")
}

fn field(container: &TestContainer, name: &str) -> web_sys::HtmlInputElement {
	container
		.query(&format!("input[name=\"{name}\"]"))
		.unwrap_or_else(|| panic!("field {name} not found"))
		.dyn_into()
		.expect("field is not an input element")
}

fn props_with(field_name: &str, value: &str) -> CustomerProps {
	let mut props = CustomerProps::default();
	props.set_field(field_name, value);
	props
}

#[wasm_bindgen_test]
fn renders_a_form() {
	let container = create_container().unwrap();
	render_into(&container, &CustomerForm::new(CustomerProps::default()));

	assert_eq!(form_element(&container).tag_name(), "FORM");
}

#[wasm_bindgen_test]
fn has_a_submit_button() {
	let container = create_container().unwrap();
	render_into(&container, &CustomerForm::new(CustomerProps::default()));

	assert!(container.query("input[type=\"submit\"]").is_some());
}

#[wasm_bindgen_test]
fn renders_each_field_as_a_text_box() {
	let container = create_container().unwrap();
	render_into(&container, &CustomerForm::new(CustomerProps::default()));

	for (name, _) in CUSTOMER_FIELDS {
		let input = field(&container, name);
		assert_eq!(input.tag_name(), "INPUT");
		assert_eq!(input.type_(), "text");
		assert_eq!(input.value(), "");
	}
}

#[wasm_bindgen_test]
fn includes_the_existing_value() {
	for (name, _) in CUSTOMER_FIELDS {
		let container = create_container().unwrap();
		render_into(&container, &CustomerForm::new(props_with(name, "value")));

		assert_eq!(field(&container, name).value(), "value");
		container.remove();
	}
}

#[wasm_bindgen_test]
fn renders_a_label_for_each_field() {
	let container = create_container().unwrap();
	render_into(&container, &CustomerForm::new(CustomerProps::default()));

	for (name, label_text) in CUSTOMER_FIELDS {
		let label = container
			.query(&format!("label[for=\"{name}\"]"))
			.unwrap_or_else(|| panic!("label for {name} not found"));
		assert_eq!(label.text_content().unwrap_or_default(), label_text);
	}
}

#[wasm_bindgen_test]
fn assigns_an_id_that_matches_the_label_target() {
	let container = create_container().unwrap();
	render_into(&container, &CustomerForm::new(CustomerProps::default()));

	for (name, _) in CUSTOMER_FIELDS {
		assert_eq!(field(&container, name).id(), name);
	}
}

#[wasm_bindgen_test]
fn saves_existing_value_when_submitted() {
	for (name, _) in CUSTOMER_FIELDS {
		let captured = Rc::new(RefCell::new(None));
		let container = create_container().unwrap();
		let form = CustomerForm::new(props_with(name, "value")).on_submit(Callback::new({
			let captured = Rc::clone(&captured);
			move |values: CustomerProps| *captured.borrow_mut() = Some(values)
		}));
		render_into(&container, &form);

		let target = form_element(&container);
		let not_prevented = dispatch(target.as_ref(), EventType::Submit);

		assert!(!not_prevented, "submit default was not prevented");
		let captured = captured.borrow();
		let values = captured.as_ref().expect("onSubmit not invoked");
		assert_eq!(values.field_value(name), "value");
		container.remove();
	}
}

#[wasm_bindgen_test]
fn saves_new_value_when_submitted() {
	for (name, new_value) in [
		("firstName", "anotherFirstName"),
		("lastName", "anotherLastName"),
		("phoneNumber", "987456123"),
	] {
		let captured = Rc::new(RefCell::new(None));
		let container = create_container().unwrap();
		let form =
			CustomerForm::new(props_with(name, "existingValue")).on_submit(Callback::new({
				let captured = Rc::clone(&captured);
				move |values: CustomerProps| *captured.borrow_mut() = Some(values)
			}));
		render_into(&container, &form);

		// Simulate the user editing the field before submitting.
		field(&container, name).set_value(new_value);
		dispatch(form_element(&container).as_ref(), EventType::Submit);

		let captured = captured.borrow();
		let values = captured.as_ref().expect("onSubmit not invoked");
		assert_eq!(values.field_value(name), new_value);
		container.remove();
	}
}

#[wasm_bindgen_test]
fn submit_invokes_callback_exactly_once() {
	let count = Rc::new(RefCell::new(0));
	let container = create_container().unwrap();
	let form = CustomerForm::new(CustomerProps::default()).on_submit(Callback::new({
		let count = Rc::clone(&count);
		move |_: CustomerProps| *count.borrow_mut() += 1
	}));
	render_into(&container, &form);

	dispatch(form_element(&container).as_ref(), EventType::Submit);
	assert_eq!(*count.borrow(), 1);
}

#[wasm_bindgen_test]
fn submit_without_callback_is_tolerated() {
	let container = create_container().unwrap();
	render_into(&container, &CustomerForm::new(CustomerProps::default()));

	// Must not throw; default is still prevented.
	let not_prevented = dispatch(form_element(&container).as_ref(), EventType::Submit);
	assert!(!not_prevented);
}

#[wasm_bindgen_test]
fn rerendering_does_not_accumulate_elements() {
	let container = create_container().unwrap();
	let form = CustomerForm::new(props_with("firstName", "value"));

	render_into(&container, &form);
	render_into(&container, &form);

	for (name, _) in CUSTOMER_FIELDS {
		let matches = container
			.container()
			.query_selector_all(&format!("input[name=\"{name}\"]"))
			.expect("query failed");
		assert_eq!(matches.length(), 1, "duplicated input for {name}");
	}
	assert_eq!(field(&container, "firstName").value(), "value");
}

#[wasm_bindgen_test]
fn rerendering_with_new_props_updates_values() {
	let container = create_container().unwrap();
	render_into(
		&container,
		&CustomerForm::new(props_with("firstName", "first")),
	);
	assert_eq!(field(&container, "firstName").value(), "first");

	render_into(
		&container,
		&CustomerForm::new(props_with("firstName", "second")),
	);
	assert_eq!(field(&container, "firstName").value(), "second");
}
