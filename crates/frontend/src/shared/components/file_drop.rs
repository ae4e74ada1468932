//! Drag-and-drop file picker
//!
//! Clicking the zone opens the native file dialog through a hidden input;
//! dropping files onto it does the same without the dialog. Filtering by
//! type is left to the caller, the `accept` attribute is only a hint to the
//! dialog.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// `dragleave` also fires when the pointer moves onto a child of the zone.
/// `related_inside` is whether the element being entered lies inside the
/// zone, `None` when the pointer left the window.
fn drag_left_zone(related_inside: Option<bool>) -> bool {
    !related_inside.unwrap_or(false)
}

fn file_list_to_vec(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn FileDropZone(
    /// Value for the input `accept` attribute
    accept: String,
    /// Ignore clicks and drops
    #[prop(into)]
    disabled: Signal<bool>,
    /// Extra CSS modifier (status of the owner widget)
    #[prop(into)]
    state_class: Signal<&'static str>,
    /// Set while files are dragged over the zone
    drag_active: RwSignal<bool>,
    on_files: Callback<Vec<web_sys::File>>,
    children: Children,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let zone_ref = NodeRef::<leptos::html::Div>::new();

    let open_picker = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            drag_active.set(true);
        }
    };

    let on_drag_leave = move |ev: web_sys::DragEvent| {
        let related_inside = ev
            .related_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .and_then(|node| {
                zone_ref
                    .get_untracked()
                    .map(|zone| zone.contains(Some(&node)))
            });
        if drag_left_zone(related_inside) {
            drag_active.set(false);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        if disabled.get_untracked() {
            return;
        }
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| file_list_to_vec(&list))
            .unwrap_or_default();
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            let files = input
                .files()
                .map(|list| file_list_to_vec(&list))
                .unwrap_or_default();
            // allow picking the same file again
            input.set_value("");
            if !files.is_empty() {
                on_files.run(files);
            }
        }
    };

    let class = move || {
        let mut class = format!("dropzone {}", state_class.get());
        if drag_active.get() {
            class.push_str(" drag-active");
        }
        if disabled.get() {
            class.push_str(" dropzone--disabled");
        }
        class
    };

    view! {
        <div
            node_ref=zone_ref
            class=class
            role="button"
            tabindex="0"
            on:click=open_picker
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                type="file"
                multiple=true
                accept=accept
                class="hidden"
                prop:disabled=move || disabled.get()
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_onto_child_keeps_drag_active() {
        assert!(!drag_left_zone(Some(true)));
    }

    #[test]
    fn test_leaving_zone_clears_drag() {
        assert!(drag_left_zone(Some(false)));
        assert!(drag_left_zone(None));
    }
}
