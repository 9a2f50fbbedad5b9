pub mod drag;
pub mod field;
pub mod file_filter;
pub mod preview;
pub mod registry;
pub mod store;

pub use drag::{try_use_drag, use_drag, DndProvider, DragController, DragItem, ShellFlags, DRAG_ITEM_TYPE};
pub use field::{
    ChoiceProperties, Field, FieldId, FieldKind, FieldProperties, FieldUpdate, FieldValue, FileMeta,
    FileProperties, NumberProperties, PropertyChange, TextAreaProperties, TextProperties,
};
pub use file_filter::FileFilter;
pub use preview::{use_preview, try_use_preview, FormSubmission, PreviewContext, PreviewProvider, PreviewState};
pub use store::FieldStore;
