//! Props system for component properties.

use std::collections::HashMap;

/// Trait for component properties.
///
/// Props are the input data for components. They can be constructed from HTML
/// attributes (for hydration-style round-trips) or directly in code. Missing
/// attributes fall back to the field defaults.
///
/// # Example
///
/// ```ignore
/// use clientele_pages::Props;
///
/// #[derive(Default)]
/// struct GreetingProps {
///     name: String,
/// }
///
/// impl Props for GreetingProps {
///     fn from_attrs(attrs: &HashMap<String, String>) -> Self {
///         Self {
///             name: attrs.get("name").cloned().unwrap_or_default(),
///         }
///     }
/// }
/// ```
pub trait Props: Default {
	/// Constructs props from HTML attributes.
	fn from_attrs(attrs: &HashMap<String, String>) -> Self;
}

/// Serializes props to HTML attributes.
///
/// Null fields are skipped; everything else is stringified.
pub fn serialize_props<P: serde::Serialize>(
	props: &P,
) -> Result<HashMap<String, String>, serde_json::Error> {
	let json = serde_json::to_value(props)?;

	let mut attrs = HashMap::new();
	if let serde_json::Value::Object(map) = json {
		for (key, value) in map {
			let str_value = match value {
				serde_json::Value::String(s) => s,
				serde_json::Value::Bool(b) => b.to_string(),
				serde_json::Value::Number(n) => n.to_string(),
				serde_json::Value::Null => continue,
				other => other.to_string(),
			};
			attrs.insert(key, str_value);
		}
	}

	Ok(attrs)
}

/// Deserializes props from HTML attributes.
pub fn deserialize_props<P: serde::de::DeserializeOwned>(
	attrs: &HashMap<String, String>,
) -> Result<P, serde_json::Error> {
	let json = serde_json::to_value(attrs)?;
	serde_json::from_value(json)
}
