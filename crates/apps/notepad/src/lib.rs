//! Notepad app panel: a single untitled plain-text buffer per window.

use leptos::*;

const PLACEHOLDER: &str = "Start typing...";

/// Line and character totals shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct TextStats {
    lines: usize,
    chars: usize,
}

impl TextStats {
    fn of(text: &str) -> Self {
        Self {
            lines: text.lines().count().max(1),
            chars: text.chars().count(),
        }
    }
}

#[component]
pub fn NotepadApp() -> impl IntoView {
    let text = create_rw_signal(String::new());
    let stats = Signal::derive(move || text.with(|t| TextStats::of(t)));

    view! {
        <div class="app-shell app-notepad-shell">
            <textarea
                class="notepad-page"
                placeholder=PLACEHOLDER
                spellcheck="false"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <div class="app-statusbar">
                <span>{move || format!("Lines: {}", stats.get().lines)}</span>
                <span>{move || format!("Chars: {}", stats.get().chars)}</span>
            </div>
        </div>
    }
}
