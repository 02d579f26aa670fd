//! Theme context of the select cell.
//!
//! The cell never reaches for a global style registry: the class bundle and
//! the palette arrive either as an explicit prop or through the context set
//! up by [`SelectCellThemeProvider`].

use contracts::shared::select_cell::SelectCellClasses;
use leptos::prelude::*;
use std::sync::Arc;

/// Available palettes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Forest,
}

impl Theme {
    /// Returns the theme name as a string (used for the data-theme attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Forest => "forest",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Тёмная",
            Theme::Light => "Светлая",
            Theme::Forest => "Лесная",
        }
    }

    /// Background of "paper" surfaces; sticky header cells are filled with it
    /// so scrolled rows do not show through.
    pub fn paper_background(&self) -> &'static str {
        match self {
            Theme::Dark => "#1e1e1e",
            Theme::Light => "#ffffff",
            Theme::Forest => "#1f2b22",
        }
    }

    /// Returns all available themes.
    pub fn all() -> [Theme; 3] {
        [Theme::Dark, Theme::Light, Theme::Forest]
    }
}

/// Style context passed to select cells.
#[derive(Clone)]
pub struct SelectCellTheme {
    /// Current palette.
    pub theme: RwSignal<Theme>,
    /// Class names of the cell and its controls.
    pub classes: Arc<SelectCellClasses>,
}

impl SelectCellTheme {
    pub fn new(theme: Theme, classes: SelectCellClasses) -> Self {
        Self {
            theme: RwSignal::new(theme),
            classes: Arc::new(classes),
        }
    }

    /// CSS for the current palette.
    pub fn stylesheet(&self) -> String {
        self.classes.stylesheet(self.theme.get().paper_background())
    }
}

impl Default for SelectCellTheme {
    fn default() -> Self {
        Self::new(Theme::default(), SelectCellClasses::default())
    }
}

/// Explicit theme first, then the context, then the defaults.
pub fn resolve_select_cell_theme(explicit: Option<SelectCellTheme>) -> SelectCellTheme {
    explicit
        .or_else(use_context::<SelectCellTheme>)
        .unwrap_or_default()
}

/// Provides the select cell theme to children and injects its stylesheet.
#[component]
pub fn SelectCellThemeProvider(
    /// Initial palette
    #[prop(optional)]
    theme: Theme,
    /// Class names; defaults to the built-in BEM names
    #[prop(optional)]
    classes: Option<SelectCellClasses>,
    children: Children,
) -> impl IntoView {
    let context = SelectCellTheme::new(theme, classes.unwrap_or_default());
    provide_context(context.clone());

    view! {
        <style>{move || context.stylesheet()}</style>
        {children()}
    }
}

/// Palette switcher.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = resolve_select_cell_theme(None);
    let current = ctx.theme;

    view! {
        <div class="theme-selector" data-theme=move || current.get().as_str()>
            {Theme::all().into_iter().map(|theme| {
                view! {
                    <button
                        class=move || if current.get() == theme { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                        on:click=move |_| current.set(theme)
                    >
                        {theme.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_background_per_theme() {
        for theme in Theme::all() {
            assert!(theme.paper_background().starts_with('#'));
        }
        assert_eq!(Theme::Light.paper_background(), "#ffffff");
    }
}
