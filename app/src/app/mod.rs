//! Main application structure.

mod keyboard;
mod rendering;
mod update;

use crate::drop::DropCoordinator;
use crate::graph::CanvasEditor;
use crate::menu::MenuController;
use crate::probe::ProbeClient;
use crate::state::AppStateChannels;
use crate::themes;

// Cross-platform task spawning
#[cfg(target_arch = "wasm32")]
pub fn spawn_task<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_task<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

/// Theme preference for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    /// Standard egui dark theme
    #[default]
    EguiDark,
    /// Standard egui light theme
    EguiLight,
    /// Nord Dark theme (arctic-inspired)
    NordDark,
    /// Nord Light theme (arctic-inspired)
    NordLight,
    /// Tokyo Night theme
    TokyoNight,
}

impl ThemePreference {
    fn label(&self) -> &'static str {
        match self {
            ThemePreference::EguiDark => "Dark",
            ThemePreference::EguiLight => "Light",
            ThemePreference::NordDark => "Nord Dark",
            ThemePreference::NordLight => "Nord Light",
            ThemePreference::TokyoNight => "Tokyo Night",
        }
    }

    fn all() -> [ThemePreference; 5] {
        [
            ThemePreference::EguiDark,
            ThemePreference::EguiLight,
            ThemePreference::NordDark,
            ThemePreference::NordLight,
            ThemePreference::TokyoNight,
        ]
    }
}

/// The main Tavla application.
pub struct TavlaApp {
    /// The canvas: node/edge graph plus view state
    canvas: CanvasEditor,
    /// Context menu state (pane-level and node-level)
    menu: MenuController,
    /// Drop/paste orchestration
    drops: DropCoordinator,
    /// Channel-based state management for async drop resolutions
    channels: AppStateChannels,
    /// Active theme (not persisted)
    theme: ThemePreference,
    /// Status message
    status: String,
    /// Toolbar input buffer for new text nodes
    text_input: String,
    /// Whether the shortcuts window is open
    show_shortcuts: bool,
}

impl TavlaApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Install image loaders for egui (required for Image::from_uri)
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let channels = AppStateChannels::new();
        let drops = DropCoordinator::new(ProbeClient::new(), channels.sender());

        let app = Self {
            canvas: CanvasEditor::new(),
            menu: MenuController::new(),
            drops,
            channels,
            theme: ThemePreference::default(),
            status: "Drop images, videos or links anywhere".to_string(),
            text_input: String::new(),
            show_shortcuts: false,
        };
        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Apply the current theme preference to the egui context.
    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.theme {
            ThemePreference::EguiDark => egui::Visuals::dark(),
            ThemePreference::EguiLight => egui::Visuals::light(),
            ThemePreference::NordDark => themes::nord_dark(),
            ThemePreference::NordLight => themes::nord_light(),
            ThemePreference::TokyoNight => themes::tokyo_night(),
        };
        ctx.set_visuals(visuals);
    }
}
