//! Skin management for the dashboard.
//!
//! Two skins share the same markup and behaviour and differ only in their
//! stylesheet. The initial skin comes from the `?skin=` query parameter;
//! runtime switches are not persisted.

use leptos::prelude::*;
use web_sys::window;

/// Available skins.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Skin {
    #[default]
    Classic,
    Compact,
}

impl Skin {
    /// Returns the skin name (used for `data-skin`, CSS path and the query).
    pub fn as_str(&self) -> &'static str {
        match self {
            Skin::Classic => "classic",
            Skin::Compact => "compact",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Skin::Classic => "经典",
            Skin::Compact => "紧凑",
        }
    }

    /// Returns the CSS file path for this skin.
    pub fn css_path(&self) -> &'static str {
        match self {
            Skin::Classic => "/static/skins/classic.css",
            Skin::Compact => "/static/skins/compact.css",
        }
    }

    /// Parse skin from its name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim() {
            "classic" => Some(Skin::Classic),
            "compact" => Some(Skin::Compact),
            _ => None,
        }
    }

    /// Returns all available skins.
    pub fn all() -> [Skin; 2] {
        [Skin::Classic, Skin::Compact]
    }
}

/// Swap the skin stylesheet and tag the body.
fn apply_skin_css(skin: Skin) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    if let Ok(Some(existing)) = document.query_selector("#skin-stylesheet") {
        existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "skin-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", skin.css_path());
        let _ = head.append_child(&link);
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-skin", skin.as_str());
    }
}

/// Skin context type.
#[derive(Clone, Copy)]
pub struct SkinContext {
    /// Current skin signal.
    pub skin: RwSignal<Skin>,
}

impl SkinContext {
    pub fn set_skin(&self, skin: Skin) {
        if self.skin.get_untracked() == skin {
            return;
        }
        log::info!("skin switched to {}", skin.as_str());
        self.skin.set(skin);
        apply_skin_css(skin);
    }
}

/// Provides skin context to children components.
#[component]
pub fn SkinProvider(initial: Skin, children: Children) -> impl IntoView {
    apply_skin_css(initial);
    provide_context(SkinContext {
        skin: RwSignal::new(initial),
    });

    children()
}

/// Hook to use the skin context.
pub fn use_skin() -> SkinContext {
    use_context::<SkinContext>().expect("SkinContext not found. Wrap your app with SkinProvider.")
}

/// Skin switcher: one toggle button per skin.
#[component]
pub fn SkinSelector() -> impl IntoView {
    let ctx = use_skin();

    view! {
        <div class="skin-selector" title="界面风格">
            {crate::shared::icons::icon("palette")}
            {Skin::all().into_iter().map(|skin| {
                let is_active = move || ctx.skin.get() == skin;
                view! {
                    <button
                        class=move || if is_active() { "skin-selector__item skin-selector__item--active" } else { "skin-selector__item" }
                        on:click=move |_| ctx.set_skin(skin)
                    >
                        {skin.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
