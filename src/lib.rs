//! # formcraft
//!
//! A drag-and-drop form builder for Dioxus. Authors pick fields from a
//! toolbox, reorder them by dragging, tweak each one in a property panel and
//! try the result in preview mode.
//!
//! The state behind the editor is plain Rust and lives in [`state`]; the
//! components in [`form_builder`] and [`form_fields`] only read it and turn
//! events into calls on [`state::FieldStore`].
//!
//! ```rust
//! use formcraft::state::{FieldKind, FieldStore};
//!
//! let mut store = FieldStore::new();
//! let text = store.add_field(FieldKind::Text);
//! let select = store.add_field(FieldKind::Select);
//! store.move_field(1, 0).unwrap();
//!
//! assert_eq!(store.fields()[0].id, select.id);
//! assert_eq!(store.fields()[1].id, text.id);
//! ```

pub mod error;
pub mod form_builder;
pub mod form_fields;
pub mod mocks;
pub mod state;

pub use error::{BuilderError, BuilderResult};
pub use form_builder::FormBuilder;
pub use state::{DndProvider, Field, FieldId, FieldKind, FieldStore, FormSubmission, PreviewProvider};
