use super::view_model::UploadFormViewModel;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// First file chosen in a file input `change` event, if any.
fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let vm = UploadFormViewModel::new();

    // Signals are Copy; pull them out once for the closures below.
    let title = vm.title;
    let description = vm.description;
    let thumbnail = vm.thumbnail;
    let video = vm.video;
    let status = vm.status;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    let handle_thumbnail_select = move |ev: web_sys::Event| {
        thumbnail.set(selected_file(&ev));
    };

    let handle_video_select = move |ev: web_sys::Event| {
        video.set(selected_file(&ev));
    };

    view! {
        <div class="upload-container">
            <div class="upload-box">
                <h1>"Upload Form"</h1>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="title">"Title (50 characters max)"</label>
                        <input
                            type="text"
                            id="title"
                            maxlength="50"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                            placeholder="Enter title"
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">"Description (200 characters max)"</label>
                        <textarea
                            id="description"
                            maxlength="200"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                            placeholder="Enter description"
                            rows="3"
                        />
                    </div>

                    <div class="form-group">
                        <label for="thumbnail">"Upload Thumbnail (JPG, PNG only)"</label>
                        <input
                            type="file"
                            id="thumbnail"
                            accept=".jpg, .png"
                            on:change=handle_thumbnail_select
                        />
                        {move || thumbnail.get().map(|file| view! {
                            <span class="file-name">{file.name()}</span>
                        })}
                    </div>

                    <div class="form-group">
                        <label for="video">"Upload Video (MPG, AVI, MP4 only)"</label>
                        <input
                            type="file"
                            id="video"
                            accept=".mpg, .avi, .mp4"
                            on:change=handle_video_select
                        />
                        {move || video.get().map(|file| view! {
                            <span class="file-name">{file.name()}</span>
                        })}
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || status.get().is_busy()
                    >
                        {move || if status.get().is_busy() { "Uploading..." } else { "Submit" }}
                    </button>

                    <Show when=move || status.get().is_busy()>
                        <Space gap=SpaceGap::Small>
                            <Spinner />
                            <span class="uploading-hint">"Uploading files..."</span>
                        </Space>
                    </Show>

                    {move || status.get().message().map(|message| view! {
                        <p class="status-message">{message}</p>
                    })}
                </form>
            </div>
        </div>
    }
}
