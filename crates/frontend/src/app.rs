use crate::domain::a001_media_upload::ui::form::UploadForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single-page application: the upload form is the whole UI.
    view! {
        <UploadForm />
    }
}
