//! Browser entry point for the folio page controller.
//!
//! On `wasm32` the module boots itself when loaded: it scans the page, wires
//! listeners and observers, and feeds everything through [`folio_core::Page`].
//! The exported helpers below also build natively so they can be tested.

pub mod attrs;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod geometry;
#[cfg(target_arch = "wasm32")]
mod host;

use folio_core::PageConfig;
use folio_core::features::form;
use folio_protocol::FormField;
use wasm_bindgen::prelude::*;

/// The built-in configuration as JSON, a starting point for a
/// `data-folio-config` override.
#[wasm_bindgen]
pub fn default_config() -> Result<String, JsError> {
    serde_json::to_string_pretty(&PageConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Validate one contact form value. Returns the message to show, or `None`
/// when the value is acceptable.
#[wasm_bindgen]
pub fn validate_field(field: &str, value: &str) -> Result<Option<String>, JsError> {
    let field =
        FormField::from_id(field).ok_or_else(|| JsError::new(&format!("unknown field: {field}")))?;
    Ok(form::validate(field, value).err().map(String::from))
}

#[cfg(target_arch = "wasm32")]
mod boot {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::host::{self, Host};

    thread_local! {
        static HOST: RefCell<Option<Rc<Host>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        crate::console::init();
        let host = host::boot()?;
        tracing::info!("folio ready");
        HOST.with(|slot| *slot.borrow_mut() = Some(host));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_json() {
        let json = default_config().unwrap_or_default();
        let parsed = PageConfig::from_json(&json);
        assert!(parsed.is_ok());
        assert_eq!(parsed.ok(), Some(PageConfig::default()));
    }

    #[test]
    fn field_validation_messages() {
        assert_eq!(validate_field("email", "a@b.co").ok(), Some(None));
        let bad = validate_field("email", "nope").ok().flatten();
        assert!(bad.is_some_and(|m| !m.is_empty()));
        assert_eq!(validate_field("name", "Jo").ok(), Some(None));
    }
}
