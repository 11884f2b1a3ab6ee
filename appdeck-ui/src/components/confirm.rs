//! Confirmation dialog for destructive (and other categorized) actions.
//!
//! Stateless: visibility and both outcome callbacks are owned by the
//! caller; this component is a pure projection of its props. Icon and
//! confirm-button label are derived from a variant registry keyed by
//! `confirm_type`.

use appdeck_core::i18n::t;
use leptos::*;

use super::button::{Button, ButtonVariant};
use super::icons::{AlertCircle, XClose};
use super::modal::Modal;

/// Icon shown in a confirm variant's badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    AlertCircle,
}

fn icon_view(kind: IconKind) -> View {
    match kind {
        IconKind::AlertCircle => view! { <AlertCircle/> }.into_view(),
    }
}

/// Per-`confirm_type` configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmVariant {
    /// Discriminator value selecting this variant.
    pub id: &'static str,
    /// Badge icon.
    pub icon: IconKind,
    /// Catalog key for the confirm-button label.
    pub confirm_text_key: &'static str,
}

/// Registry of confirm dialog variants.
///
/// Adding a variant means registering an icon and a localized
/// confirm-text key here; call sites relying on the default are
/// untouched.
pub static CONFIRM_VARIANTS: &[ConfirmVariant] = &[ConfirmVariant {
    id: "danger",
    icon: IconKind::AlertCircle,
    confirm_text_key: "common.operation.remove",
}];

/// The default variant when no `confirm_type` is given.
pub const DEFAULT_CONFIRM_TYPE: &str = "danger";

/// Look up a confirm variant by discriminator.
pub fn get_variant(id: &str) -> Option<&'static ConfirmVariant> {
    CONFIRM_VARIANTS.iter().find(|v| v.id == id)
}

/// Variant for `id`, panicking on an unregistered discriminator. An
/// unknown id is a caller/config bug, not a condition to recover from.
fn resolve_variant(id: &str) -> &'static ConfirmVariant {
    get_variant(id).unwrap_or_else(|| panic!("unknown confirm dialog type: {id:?}"))
}

#[component]
pub fn Confirm(
    /// Discriminator selecting icon and confirm-button label.
    #[prop(default = DEFAULT_CONFIRM_TYPE)]
    confirm_type: &'static str,
    /// Whether the dialog is visible. Owned and mutated exclusively by
    /// the caller; the dialog only requests transitions through the two
    /// callbacks.
    #[prop(into)]
    is_show: Signal<bool>,
    /// Dialog title, rendered verbatim.
    #[prop(into)]
    title: String,
    /// Optional description under the title. Empty means absent.
    #[prop(optional, into)]
    desc: Option<String>,
    /// Called for the close icon and the cancel button.
    on_cancel: Callback<()>,
    /// Called for the confirm button.
    on_confirm: Callback<()>,
) -> impl IntoView {
    let variant = resolve_variant(confirm_type);
    let desc = desc.filter(|d| !d.is_empty());

    view! {
        // The modal's own dismissal gestures (backdrop click, Escape) are
        // deliberately inert here: this dialog closes only through the
        // close icon or the cancel button.
        <Modal is_show=is_show on_close=Callback::new(|_| {})>
            <div class="confirm-wrapper relative p-8">
                <div
                    class="confirm-close flex items-center justify-center absolute top-4 right-4 w-8 h-8 cursor-pointer"
                    on:click=move |_| on_cancel.call(())
                >
                    <XClose/>
                </div>
                <div class="flex items-center justify-center mb-3 w-12 h-12 bg-white shadow-xl rounded-xl">
                    {icon_view(variant.icon)}
                </div>
                <div class="text-xl font-semibold text-gray-900">{title.clone()}</div>
                {desc.clone().map(|d| view! {
                    <div class="confirm-desc mt-1 text-sm text-gray-500">{d}</div>
                })}
                <div class="flex items-center justify-end mt-10">
                    <Button class="mr-2" on_click=on_cancel>
                        {t("common.operation.cancel")}
                    </Button>
                    <Button variant=ButtonVariant::Primary on_click=on_confirm>
                        {t(variant.confirm_text_key)}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_variant_is_registered() {
        let variant = get_variant("danger").unwrap();
        assert_eq!(variant.icon, IconKind::AlertCircle);
        assert_eq!(variant.confirm_text_key, "common.operation.remove");
    }

    #[test]
    fn default_type_resolves_to_danger() {
        let variant = resolve_variant(DEFAULT_CONFIRM_TYPE);
        assert_eq!(variant.id, "danger");
    }

    #[test]
    fn unknown_type_is_not_found() {
        assert!(get_variant("warning").is_none());
    }

    #[test]
    #[should_panic(expected = "unknown confirm dialog type")]
    fn resolving_unknown_type_panics() {
        resolve_variant("warning");
    }

    #[test]
    fn confirm_label_key_resolves_in_catalog() {
        let variant = get_variant("danger").unwrap();
        assert_eq!(
            appdeck_core::i18n::lookup(appdeck_core::i18n::Locale::En, variant.confirm_text_key),
            Some("Remove")
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Counters {
        cancels: Rc<Cell<u32>>,
        confirms: Rc<Cell<u32>>,
    }

    fn mount_confirm(host: &web_sys::HtmlElement, is_show: bool, desc: Option<&str>) -> Counters {
        let cancels = Rc::new(Cell::new(0u32));
        let confirms = Rc::new(Cell::new(0u32));
        let cancels_in = Rc::clone(&cancels);
        let confirms_in = Rc::clone(&confirms);
        let desc = desc.map(str::to_owned);

        mount_to(host.clone(), move || {
            let (is_show, _) = create_signal(is_show);
            let on_cancel = Callback::new(move |_| cancels_in.set(cancels_in.get() + 1));
            let on_confirm = Callback::new(move |_| confirms_in.set(confirms_in.get() + 1));
            view! {
                <Confirm
                    is_show=is_show
                    title="Delete item?"
                    desc=desc
                    on_cancel=on_cancel
                    on_confirm=on_confirm
                />
            }
        });

        Counters { cancels, confirms }
    }

    fn mount_host() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn click_button_labeled(host: &web_sys::HtmlElement, label: &str) {
        let buttons = host.query_selector_all("button").unwrap();
        for i in 0..buttons.length() {
            let button = buttons
                .get(i)
                .unwrap()
                .unchecked_into::<web_sys::HtmlElement>();
            if button.text_content().unwrap_or_default().trim() == label {
                button.click();
                return;
            }
        }
        panic!("no button labeled {label:?}");
    }

    fn click(host: &web_sys::HtmlElement, selector: &str) {
        host.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    fn press_escape() {
        let window = web_sys::window().unwrap();
        let init = web_sys::KeyboardEventInit::new();
        init.set_key("Escape");
        let event =
            web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn hidden_when_not_shown() {
        let host = mount_host();
        let counters = mount_confirm(&host, false, Some("This cannot be undone."));

        assert!(host.query_selector(".confirm-wrapper").unwrap().is_none());
        assert!(!host
            .text_content()
            .unwrap_or_default()
            .contains("Delete item?"));
        assert_eq!(counters.cancels.get(), 0);
        assert_eq!(counters.confirms.get(), 0);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn renders_title_desc_and_localized_labels() {
        let host = mount_host();
        mount_confirm(&host, true, Some("This cannot be undone."));

        let text = host.text_content().unwrap_or_default();
        assert!(text.contains("Delete item?"));
        assert!(text.contains("This cannot be undone."));
        assert!(text.contains("Cancel"));
        assert!(text.contains("Remove"));
        assert!(host.query_selector(".confirm-desc").unwrap().is_some());

        host.remove();
    }

    #[wasm_bindgen_test]
    fn omitted_desc_renders_no_description_node() {
        let host = mount_host();
        mount_confirm(&host, true, None);

        assert!(host.query_selector(".confirm-wrapper").unwrap().is_some());
        assert!(host.query_selector(".confirm-desc").unwrap().is_none());

        host.remove();
    }

    #[wasm_bindgen_test]
    fn empty_desc_renders_no_description_node() {
        let host = mount_host();
        mount_confirm(&host, true, Some(""));

        assert!(host.query_selector(".confirm-desc").unwrap().is_none());

        host.remove();
    }

    #[wasm_bindgen_test]
    fn cancel_button_invokes_on_cancel_once() {
        let host = mount_host();
        let counters = mount_confirm(&host, true, None);

        click_button_labeled(&host, "Cancel");
        assert_eq!(counters.cancels.get(), 1);
        assert_eq!(counters.confirms.get(), 0);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn close_icon_invokes_on_cancel_once() {
        let host = mount_host();
        let counters = mount_confirm(&host, true, None);

        click(&host, ".confirm-close");
        assert_eq!(counters.cancels.get(), 1);
        assert_eq!(counters.confirms.get(), 0);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn confirm_button_invokes_on_confirm_once() {
        let host = mount_host();
        let counters = mount_confirm(&host, true, None);

        click_button_labeled(&host, "Remove");
        assert_eq!(counters.confirms.get(), 1);
        assert_eq!(counters.cancels.get(), 0);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn backdrop_dismissal_is_inert() {
        let host = mount_host();
        let counters = mount_confirm(&host, true, None);

        // The modal's generic dismissal path is wired to a no-op
        click(&host, ".modal-overlay");
        assert_eq!(counters.cancels.get(), 0);
        assert_eq!(counters.confirms.get(), 0);

        host.remove();
    }

    #[wasm_bindgen_test]
    fn escape_dismissal_is_inert() {
        let host = mount_host();
        let counters = mount_confirm(&host, true, None);

        // Same no-op wiring as the backdrop: Escape must not close
        press_escape();
        assert_eq!(counters.cancels.get(), 0);
        assert_eq!(counters.confirms.get(), 0);

        host.remove();
    }
}
