//! Generic modal overlay, agnostic of its content.

use leptos::*;

/// Centered overlay container. Renders `children` only while `is_show` is
/// true. `on_close` fires for the primitive-level dismissal gestures
/// (backdrop click, Escape); whatever closing UI lives inside the panel is
/// the content's own business.
#[component]
pub fn Modal(
    /// Whether the modal is visible. Owned by the caller.
    #[prop(into)]
    is_show: Signal<bool>,
    /// Called on backdrop click or Escape.
    on_close: Callback<()>,
    /// Extra classes appended to the panel's own.
    #[prop(optional, into)]
    class: String,
    children: ChildrenFn,
) -> impl IntoView {
    const PANEL_CLASS: &str = "modal-panel bg-white rounded-2xl shadow-xl w-[480px] max-w-full mx-4";
    let panel_class = if class.is_empty() {
        PANEL_CLASS.to_string()
    } else {
        format!("{PANEL_CLASS} {class}")
    };

    let escape_handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && is_show.get_untracked() {
            on_close.call(());
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <Show when=move || is_show.get()>
            <div
                class="modal-overlay fixed inset-0 z-[100] bg-black/50 flex items-center justify-center"
                on:click=move |_| on_close.call(())
            >
                <div class=panel_class.clone() on:click=|e| e.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
