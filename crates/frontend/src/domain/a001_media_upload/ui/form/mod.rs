//! Media Upload Form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (multipart upload to the media host)
//! - flow.rs: submission flow over an abstract transport
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod flow;
mod model;
mod view;
mod view_model;

pub use view::UploadForm;
pub use view_model::UploadFormViewModel;
