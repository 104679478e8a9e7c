//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived window manager, the reactive desktop state and the reducer
//! dispatch callback. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    apps::{self, ApplicationDefinition},
    config::ShellConfig,
    host,
    model::{DesktopState, InteractionState, Viewport},
    reducer::{reduce_desktop, DesktopAction},
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Window manager holding the catalog, shell configuration and placement jitter.
    pub manager: StoredValue<WindowManager>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer gesture state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Last measured browser viewport.
    pub viewport: RwSignal<Viewport>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    pub fn with_config<T>(&self, f: impl FnOnce(&ShellConfig) -> T) -> T {
        self.manager.with_value(|wm| f(wm.config()))
    }

    pub fn catalog(&self) -> &'static [ApplicationDefinition] {
        self.manager.with_value(|wm| wm.catalog())
    }

    /// Re-reads the browser viewport into [`Self::viewport`] and returns it.
    pub fn refresh_viewport(&self) -> Viewport {
        let measured = host::current_viewport(self.with_config(|config| config.fallback_viewport));
        if self.viewport.get_untracked() != measured {
            self.viewport.set(measured);
        }
        measured
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Shell configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    if let Err(err) = apps::validate_catalog(apps::catalog()) {
        logging::warn!("application catalog is inconsistent: {err}");
    }

    let fallback_viewport = config.fallback_viewport;
    let wm = WindowManager::new(apps::catalog(), config);
    let state = create_rw_signal(wm.initial_state());
    let manager = store_value(wm);
    let interaction = create_rw_signal(InteractionState::default());
    let viewport = create_rw_signal(host::current_viewport(fallback_viewport));

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let mut changed = false;
        manager.update_value(|wm| {
            changed = reduce_desktop(wm, &mut desktop, &mut ui, action);
        });
        if !changed {
            return;
        }
        if desktop != state.get_untracked() {
            state.set(desktop);
        }
        if ui != interaction.get_untracked() {
            interaction.set(ui);
        }
    });

    let runtime = DesktopRuntimeContext {
        manager,
        state,
        interaction,
        viewport,
        dispatch,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
