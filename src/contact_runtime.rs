use folio_core::{submit, ContactError, ContactForm, ContactSink, ContactSubmission};

/// Hands submissions to the browser console; no transport is wired up.
pub(crate) struct ConsoleSink;

impl ContactSink for ConsoleSink {
    fn deliver(&mut self, submission: ContactSubmission) {
        let payload = serde_json::to_string(&submission).unwrap_or_default();
        gloo::console::log!("Form submitted", payload);
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Validates and forwards the form. Failures are shown to the user
/// synchronously and nothing is forwarded.
pub(crate) fn handle_submit(form: &ContactForm) -> Result<(), ContactError> {
    let result = submit(form, &mut ConsoleSink);
    if let Err(err) = &result {
        alert(&err.to_string());
    }
    result
}
