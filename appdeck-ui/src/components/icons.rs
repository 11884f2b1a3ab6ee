// appdeck-ui/src/components/icons.rs
use leptos::*;

/// Close ("X") line glyph.
#[component]
pub fn XClose() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4 text-gray-500"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M18 6L6 18M6 6l12 12"/>
        </svg>
    }
}

/// Solid alert circle used by the danger confirm variant.
#[component]
pub fn AlertCircle() -> impl IntoView {
    view! {
        <svg class="w-6 h-6 text-[#D92D20]" viewBox="0 0 24 24" fill="currentColor">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 5a1 1 0 0 1 1 1v4a1 1 0 1 1-2 0V8a1 1 0 0 1 1-1zm0 10a1.25 1.25 0 1 0 0-2.5 1.25 1.25 0 0 0 0 2.5z"
            />
        </svg>
    }
}
