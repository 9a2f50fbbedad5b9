pub mod actions;
pub mod builder;
pub mod canvas;
pub mod preview_mode;
pub mod property_panel;
pub mod toolbox;

pub use actions::BuilderActions;
pub use builder::FormBuilder;
pub use canvas::Canvas;
pub use preview_mode::PreviewMode;
pub use property_panel::PropertyPanel;
pub use toolbox::Toolbox;
