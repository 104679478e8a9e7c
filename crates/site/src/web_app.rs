use desktop_runtime::{DesktopProvider, DesktopShell, ShellConfig};
use leptos::*;
use leptos_meta::*;

const SHELL_CONFIG_JSON: &str = include_str!("../desktop.config.json");

/// Shell configuration bundled with the site; falls back to defaults if it does not parse.
pub fn shell_config() -> ShellConfig {
    ShellConfig::load_or_default(SHELL_CONFIG_JSON)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Web Desktop" />
        <Meta name="description" content="A desktop windowing environment running in a browser tab." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider config=shell_config()>
            <DesktopShell />
        </DesktopProvider>
    }
}
