//! Preview mode flag and the values collected while previewing.
//!
//! One `PreviewProvider` owns the state for a builder session and hands out a
//! `PreviewContext` handle to every component below it.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use std::collections::BTreeMap;

use super::field::{FieldId, FieldValue};
use crate::error::{BuilderError, BuilderResult};

/// Submitted values keyed by field id
pub type FormSubmission = BTreeMap<FieldId, FieldValue>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewState {
    pub is_preview: bool,
    pub form_data: FormSubmission,
}

impl PreviewState {
    /// Flip the mode. Collected values survive the toggle.
    pub fn toggle(&mut self) {
        self.is_preview = !self.is_preview;
    }

    pub fn update_form_data(&mut self, id: FieldId, value: FieldValue) {
        self.form_data.insert(id, value);
    }

    pub fn reset_form_data(&mut self) {
        self.form_data.clear();
    }

    pub fn value(&self, id: &FieldId) -> Option<&FieldValue> {
        self.form_data.get(id)
    }

    pub fn submission(&self) -> FormSubmission {
        self.form_data.clone()
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct PreviewContext {
    state: Signal<PreviewState>,
}

impl PreviewContext {
    pub fn is_preview(&self) -> bool {
        self.state.read().is_preview
    }

    pub fn form_data(&self) -> FormSubmission {
        self.state.read().submission()
    }

    pub fn value(&self, id: &FieldId) -> Option<FieldValue> {
        self.state.read().value(id).cloned()
    }

    pub fn toggle_preview(&self) {
        let mut state = self.state;
        state.write().toggle();
        info!(preview = state.read().is_preview, "preview toggled");
    }

    pub fn update_form_data(&self, id: FieldId, value: FieldValue) {
        debug!(%id, "form data updated");
        let mut state = self.state;
        state.write().update_form_data(id, value);
    }

    pub fn reset_form_data(&self) {
        let mut state = self.state;
        state.write().reset_form_data();
    }
}

#[component]
pub fn PreviewProvider(children: Element) -> Element {
    use_context_provider(|| PreviewContext {
        state: Signal::new(PreviewState::default()),
    });

    rsx! { {children} }
}

pub fn try_use_preview() -> BuilderResult<PreviewContext> {
    try_use_context::<PreviewContext>().ok_or(BuilderError::MissingPreviewProvider)
}

/// Panics when there is no `PreviewProvider` above the caller.
pub fn use_preview() -> PreviewContext {
    match try_use_preview() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}
