// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod converter;
pub mod hooks;
mod screens;

use components::pico::Container;
use screens::converter::ConverterScreen;

const PICO_CSS_HREF: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    body {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
    }

    main.container {
        max-width: 480px;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS_HREF}",
        }
        style {
            "{app_css}"
        }
        Container {
            ConverterScreen {}
        }
    }
}
