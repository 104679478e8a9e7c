//! Static application catalog: kind -> display metadata, geometry defaults and content module.

use desktop_app_browser::BrowserApp;
use desktop_app_calculator::CalculatorApp;
use desktop_app_chat::ChatApp;
use desktop_app_contract::{AppKind, AppModule, AppMountContext};
use desktop_app_notepad::NotepadApp;
use leptos::*;
use thiserror::Error;

use crate::model::Size;

/// Read-only catalog entry describing one launchable application.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationDefinition {
    pub kind: &'static str,
    pub display_name: &'static str,
    pub icon_id: &'static str,
    pub module: AppModule,
    pub default_size: Size,
    pub min_size: Size,
}

impl ApplicationDefinition {
    pub fn app_kind(&self) -> AppKind {
        AppKind::from_static(self.kind)
    }
}

const APPLICATIONS: [ApplicationDefinition; 4] = [
    ApplicationDefinition {
        kind: "notepad",
        display_name: "Notepad",
        icon_id: "notepad",
        module: AppModule::new(mount_notepad),
        default_size: Size::new(500, 400),
        min_size: Size::new(250, 200),
    },
    ApplicationDefinition {
        kind: "calculator",
        display_name: "Calculator",
        icon_id: "calculator",
        module: AppModule::new(mount_calculator),
        default_size: Size::new(300, 450),
        min_size: Size::new(250, 350),
    },
    ApplicationDefinition {
        kind: "browser",
        display_name: "Browser",
        icon_id: "browser",
        module: AppModule::new(mount_browser),
        default_size: Size::new(800, 600),
        min_size: Size::new(400, 300),
    },
    ApplicationDefinition {
        kind: "gemini",
        display_name: "Gemini Chat",
        icon_id: "gemini",
        module: AppModule::new(mount_chat),
        default_size: Size::new(600, 700),
        min_size: Size::new(350, 400),
    },
];

pub fn catalog() -> &'static [ApplicationDefinition] {
    &APPLICATIONS
}

pub fn find_definition<'a>(
    catalog: &'a [ApplicationDefinition],
    kind: &str,
) -> Option<&'a ApplicationDefinition> {
    catalog.iter().find(|entry| entry.kind == kind)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("application kind `{0}` is registered more than once")]
    DuplicateKind(&'static str),
    #[error("application `{kind}` default size {default:?} is below its minimum {min:?}")]
    DefaultBelowMinimum {
        kind: &'static str,
        default: Size,
        min: Size,
    },
}

/// Checks that kinds are unique and that default sizes respect minimum sizes.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found.
pub fn validate_catalog(catalog: &[ApplicationDefinition]) -> Result<(), CatalogError> {
    for (idx, entry) in catalog.iter().enumerate() {
        if catalog[..idx].iter().any(|other| other.kind == entry.kind) {
            return Err(CatalogError::DuplicateKind(entry.kind));
        }
        if !entry.default_size.covers(entry.min_size) {
            return Err(CatalogError::DefaultBelowMinimum {
                kind: entry.kind,
                default: entry.default_size,
                min: entry.min_size,
            });
        }
    }
    Ok(())
}

fn mount_notepad(_: AppMountContext) -> View {
    view! { <NotepadApp /> }.into_view()
}

fn mount_calculator(_: AppMountContext) -> View {
    view! { <CalculatorApp /> }.into_view()
}

fn mount_browser(context: AppMountContext) -> View {
    view! { <BrowserApp window_id=context.window_id /> }.into_view()
}

fn mount_chat(context: AppMountContext) -> View {
    let AppMountContext {
        window_id,
        launch_params,
        ..
    } = context;
    view! { <ChatApp window_id=window_id launch_params=launch_params /> }.into_view()
}
