//! Reading picked and dropped files.
//!
//! On the web renderer the native `File` objects carry the browser's MIME type,
//! so they are read straight off the DOM event. Other renderers only expose a
//! `FileEngine`; there the MIME type is guessed from the extension.

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use std::path::Path;
use std::sync::Arc;
use wasm_bindgen::JsCast;

use crate::state::file_filter::guess_mime;
use crate::state::{FileMeta, DRAG_ITEM_TYPE};

fn collect(list: web_sys::FileList) -> Vec<FileMeta> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| FileMeta {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
        })
        .collect()
}

/// Files chosen through an `<input type="file">`, read from the DOM
pub fn native_input_files(evt: &FormEvent) -> Option<Vec<FileMeta>> {
    let data = evt.data();
    let event = data.downcast::<web_sys::Event>()?;
    let input = event.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files().map(collect)
}

/// Files dropped onto an element, read from the DOM
pub fn native_drop_files(evt: &DragEvent) -> Option<Vec<FileMeta>> {
    let data = evt.data();
    let event = data.downcast::<web_sys::DragEvent>()?;
    event.data_transfer()?.files().map(collect)
}

/// Elements whose clicks belong to the control rather than the field shell
pub fn is_interactive_tag(tag: &str) -> bool {
    ["input", "select", "option", "textarea", "button", "label"]
        .iter()
        .any(|interactive| tag.eq_ignore_ascii_case(interactive))
}

/// Whether a click landed on an input-like element or inside one
pub fn click_hits_control(evt: &MouseEvent) -> bool {
    let data = evt.data();
    let Some(event) = data.downcast::<web_sys::MouseEvent>() else {
        return false;
    };
    let mut node = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
    while let Some(element) = node {
        if is_interactive_tag(&element.tag_name()) {
            return true;
        }
        node = element.parent_element();
    }
    false
}

/// Mark a drag as ours. Some browsers refuse to start a drag without data.
pub fn tag_drag_payload(evt: &DragEvent) {
    let data = evt.data();
    if let Some(transfer) = data
        .downcast::<web_sys::DragEvent>()
        .and_then(|event| event.data_transfer())
    {
        let _ = transfer.set_data("text/plain", DRAG_ITEM_TYPE);
    }
}

pub async fn engine_files(engine: Arc<dyn FileEngine>) -> Vec<FileMeta> {
    let mut files = Vec::new();
    for path in engine.files() {
        let size = engine.file_size(&path).await.unwrap_or(0);
        let name = Path::new(&path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        let mime = guess_mime(&name).to_string();
        files.push(FileMeta { name, size, mime });
    }
    files
}

pub fn input_engine(evt: &FormEvent) -> Option<Arc<dyn FileEngine>> {
    evt.files()
}

pub fn drop_engine(evt: &DragEvent) -> Option<Arc<dyn FileEngine>> {
    evt.files()
}
