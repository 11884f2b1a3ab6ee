//! Styled button primitive.

use leptos::*;

/// Visual style for [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Bordered, light background. The neutral choice.
    #[default]
    Default,
    /// Filled accent background for the main action.
    Primary,
}

impl ButtonVariant {
    /// Style classes for this variant.
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => {
                "px-4 py-2 rounded-lg border border-gray-200 bg-white \
                 text-sm font-medium text-gray-700 hover:bg-gray-50 transition-colors"
            }
            ButtonVariant::Primary => {
                "px-4 py-2 rounded-lg bg-blue-600 \
                 text-sm font-medium text-white hover:bg-blue-700 transition-colors"
            }
        }
    }
}

#[component]
pub fn Button(
    /// Visual variant (defaults to the bordered style).
    #[prop(optional)]
    variant: ButtonVariant,
    /// Extra classes appended to the variant's own.
    #[prop(optional, into)]
    class: String,
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };

    view! {
        <button class=full_class on:click=move |_| on_click.call(())>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_bordered() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert!(ButtonVariant::Default.class().contains("border"));
    }

    #[test]
    fn primary_variant_is_filled() {
        let class = ButtonVariant::Primary.class();
        assert!(class.contains("bg-blue-600"));
        assert!(!class.contains("border"));
    }
}
