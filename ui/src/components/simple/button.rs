use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Text-only, used inside cards.
    Link,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "px-8 py-3 bg-purple-600 text-white rounded-full font-semibold hover:bg-purple-700 transition-all duration-300",
            ButtonVariant::Link => "text-purple-400 hover:text-purple-300 text-sm font-medium",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(optional, default)]
    variant: ButtonVariant,
    /// Set for the button that submits its form. Other buttons are inert
    /// unless wrapped by something that listens for clicks.
    #[props(optional, default)]
    submit: bool,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let additional_classes = props.class;
    let button_type = if props.submit { "submit" } else { "button" };

    rsx! {
        button {
            r#type: button_type,
            class: "{variant_classes} {additional_classes}",
            {props.children}
        }
    }
}
