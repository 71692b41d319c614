use bevy::color::palettes::tailwind::SLATE_950;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_tweening::TweeningPlugin;
use std::path::{Path, PathBuf};

use crate::config::{RayConfig, ScrollConfig, SiteContent, SparkleConfig};
use crate::hud;
use crate::lifecycle::Lifecycle;
use crate::rays::RayLayerPlugin;
use crate::scene::ScenePlugin;
use crate::sparkles::SparklePlugin;

#[derive(Debug, Clone, Resource)]
pub struct GlowfolioSettings {
    pub rays: RayConfig,
    pub sparkles: SparkleConfig,
    pub scroll: ScrollConfig,
    /// Optional JSON content override; the built-in site is used when the
    /// file is absent.
    pub content_path: Option<PathBuf>,
}

impl Default for GlowfolioSettings {
    fn default() -> Self {
        Self {
            rays: RayConfig::default(),
            sparkles: SparkleConfig::default(),
            scroll: ScrollConfig::default(),
            content_path: Some(PathBuf::from("assets/site.json")),
        }
    }
}

/// Content the scene systems draw from, resolved once at startup.
#[derive(Resource)]
pub struct SiteData {
    pub content: SiteContent,
}

/// Tracks the one-way readiness flip for this view instance.
#[derive(Resource, Default)]
pub struct ViewState {
    pub lifecycle: Lifecycle,
}

/// Fired exactly once, on the frame the view is confirmed interactive.
/// Every decorative spawner keys off this.
#[derive(Event)]
pub struct ViewReady;

/// Fired each time the profile card should turn over.
#[derive(Event)]
pub struct FlipCue;

/// Camera moved by the attract-mode scroll program.
#[derive(Component)]
pub struct MainCamera;

pub struct GlowfolioPlugin;

impl Plugin for GlowfolioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlowfolioSettings>()
            .init_resource::<ViewState>()
            .insert_resource(ClearColor(Color::from(SLATE_950)))
            .add_event::<ViewReady>()
            .add_event::<FlipCue>()
            .add_plugins(TweeningPlugin)
            .add_plugins((RayLayerPlugin, SparklePlugin, ScenePlugin))
            .add_plugins(hud::systems())
            .add_systems(Startup, (init_content, setup))
            .add_systems(Update, confirm_interactive);
    }
}

/// Resolves site content from the configured override, falling back to the
/// built-in data. When the host app already inserted [`SiteData`] (the
/// shipped binary does, for the window title) this is a no-op.
pub fn resolve_content(settings: &GlowfolioSettings) -> SiteContent {
    let Some(path) = settings.content_path.as_deref() else {
        return SiteContent::default();
    };
    if !path.exists() {
        return SiteContent::default();
    }
    match SiteContent::load(path) {
        Some(content) => content,
        None => {
            warn!("ignoring unreadable content override at {}", path.display());
            SiteContent::default()
        }
    }
}

fn init_content(
    mut commands: Commands,
    settings: Res<GlowfolioSettings>,
    existing: Option<Res<SiteData>>,
) {
    if existing.is_some() {
        return;
    }
    commands.insert_resource(SiteData { content: resolve_content(&settings) });
}

/// Handles the display and body font slots, falling back to Bevy's default
/// when the files are not shipped.
#[derive(Resource)]
pub struct FontHandles {
    pub display: Handle<Font>,
    pub body: Handle<Font>,
}

fn setup(mut commands: Commands, assets: Res<AssetServer>) {
    commands.spawn((Camera2dBundle::default(), MainCamera));
    let display = load_if_exists(&assets, "fonts/SpaceGrotesk-Bold.ttf").unwrap_or_default();
    let body = load_if_exists(&assets, "fonts/Inter-Regular.ttf").unwrap_or_default();
    commands.insert_resource(FontHandles { display, body });
}

/// Loads an asset only when the file is actually present, so missing media
/// degrades to placeholders instead of asset-server errors.
pub(crate) fn load_if_exists<A: Asset>(assets: &AssetServer, rel: &str) -> Option<Handle<A>> {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    if base.join(rel).exists() {
        Some(assets.load::<A>(rel.to_string()))
    } else {
        None
    }
}

/// Flips the lifecycle once a primary window exists. Until that frame the
/// view counts as non-interactive and no effect layer may spawn.
fn confirm_interactive(
    mut view: ResMut<ViewState>,
    mut ready_tx: EventWriter<ViewReady>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if view.lifecycle.is_ready() {
        return;
    }
    if windows.get_single().is_ok() && view.lifecycle.confirm() {
        ready_tx.send(ViewReady);
        info!("view interactive; decorative layers enabled");
    }
}
