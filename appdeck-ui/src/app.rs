//! Root component: the app overview screen fragment.

use appdeck_core::i18n::t;
use leptos::*;

use crate::components::{Button, ButtonVariant, Confirm};

#[component]
pub fn App() -> impl IntoView {
    // The confirm dialog owns no state; visibility and both outcome
    // callbacks live here.
    let (show_regenerate_confirm, set_show_regenerate_confirm) = create_signal(false);

    // Flipping is_show synchronously inside the callback also guards
    // against double activation of the triggering control.
    let on_cancel = Callback::new(move |_| set_show_regenerate_confirm.set(false));
    let on_confirm = Callback::new(move |_| {
        set_show_regenerate_confirm.set(false);
        log::info!("public URL regenerated");
    });

    view! {
        <div class="min-h-screen bg-gray-100 p-8">
            <h1 class="text-2xl font-semibold text-gray-900">
                {t("appOverview.overview.title")}
            </h1>

            <div class="mt-6 p-6 bg-white rounded-2xl shadow-sm max-w-xl">
                <div class="text-base font-medium text-gray-900">
                    {t("appOverview.overview.appInfo.explanation")}
                </div>
                <div class="mt-1 text-sm text-green-600">
                    {t("appOverview.overview.status.running")}
                </div>
                <div class="mt-4 text-xs font-medium uppercase text-gray-500">
                    {t("appOverview.overview.appInfo.accessibleAddress")}
                </div>
                <div class="mt-1 text-sm text-gray-700">"https://app.example.com/s/2fV9qT"</div>
                <div class="flex items-center justify-end mt-6">
                    <Button class="mr-2" on_click=Callback::new(|_| {})>
                        {t("appOverview.overview.appInfo.preview")}
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| set_show_regenerate_confirm.set(true))
                    >
                        {t("appOverview.overview.appInfo.share.regenerate")}
                    </Button>
                </div>
            </div>

            <Confirm
                is_show=show_regenerate_confirm
                title=t("appOverview.overview.appInfo.share.regenerate")
                desc=t("appOverview.overview.appInfo.share.explanation")
                on_cancel=on_cancel
                on_confirm=on_confirm
            />
        </div>
    }
}
