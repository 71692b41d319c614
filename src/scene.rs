//! World-space rendition of the portfolio page: hero column, flip card,
//! hackathon banner, project cards, contact block and footer, laid out
//! top to bottom and toured by the attract-mode camera.

use bevy::color::palettes::tailwind::{
    AMBER_200, EMERALD_100, EMERALD_200, EMERALD_400, EMERALD_500, EMERALD_900, SLATE_900, TEAL_900,
};
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::text::Text2dBounds;
use bevy::window::PrimaryWindow;

use crate::config::{Project, SiteContent};
use crate::lifecycle::{ScrollTimeline, Spring};
use crate::plugin::{load_if_exists, FlipCue, FontHandles, GlowfolioSettings, MainCamera, SiteData};
use crate::textures::{grid_tile, radial_glow};

const GRID_Z: f32 = -9.0;
const GLOW_Z: f32 = -8.0;
const PANEL_Z: f32 = 0.0;
const TEXT_Z: f32 = 1.0;

const MARGIN_X: f32 = 64.0;
const CARD_GAP: f32 = 32.0;
const GRID_CELL_PX: u32 = 24;

const REVEAL_RISE: f32 = 24.0;
const REVEAL_MARGIN: f32 = 80.0;
const SECTION_REVEAL_SECS: f32 = 0.6;
const CARD_REVEAL_SECS: f32 = 0.45;
const CARD_STAGGER_SECS: f32 = 0.05;

const FLIP_SECS: f32 = 0.9;
const FLIP_HOLD_SECS: f32 = 7.0;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FlipTimer(Timer::from_seconds(FLIP_HOLD_SECS, TimerMode::Repeating)))
            .add_systems(PostStartup, setup_scene)
            .add_systems(
                Update,
                (advance_scroll, trigger_reveals, play_reveals, cue_flips, animate_flips),
            );
    }
}

/// Page extents, fixed at startup for the configured window.
#[derive(Resource)]
pub struct PageGeometry {
    pub view_w: f32,
    pub view_h: f32,
    pub page_h: f32,
    pub max_scroll: f32,
}

/// Attract-mode scroll driver; `progress` is what the HUD bar shows.
#[derive(Resource)]
pub struct ScrollState {
    pub timeline: ScrollTimeline,
    pub spring: Spring,
    pub elapsed: f32,
    pub progress: f32,
}

/// Below-the-fold block that slides up and fades in when scrolled into
/// view, once per instance.
#[derive(Component)]
struct Reveal {
    rest_y: f32,
    height: f32,
    delay: f32,
    secs: f32,
    started: bool,
}

#[derive(Component)]
struct RevealPlay {
    elapsed: f32,
}

/// Target alpha for a drawable inside a reveal subtree.
#[derive(Component)]
struct Fadeable {
    base: f32,
}

#[derive(Component)]
struct ProfileCard {
    front: Entity,
    back: Entity,
}

#[derive(Component, Default)]
struct FlipState {
    showing_back: bool,
    progress: Option<f32>,
}

#[derive(Resource)]
struct FlipTimer(Timer);

fn style(font: &Handle<Font>, font_size: f32, color: Color) -> TextStyle {
    TextStyle { font: font.clone(), font_size, color }
}

fn panel(color: Color, size: Vec2, pos: Vec3) -> SpriteBundle {
    SpriteBundle {
        sprite: Sprite { color, custom_size: Some(size), ..default() },
        transform: Transform::from_translation(pos),
        ..default()
    }
}

fn text2d(value: &str, style: TextStyle, anchor: Anchor, pos: Vec3) -> Text2dBundle {
    Text2dBundle {
        text: Text::from_section(value, style).with_justify(JustifyText::Left),
        text_anchor: anchor,
        transform: Transform::from_translation(pos),
        ..default()
    }
}

fn wrapped(mut bundle: Text2dBundle, bounds: Vec2) -> Text2dBundle {
    bundle.text_2d_bounds = Text2dBounds { size: bounds };
    bundle
}

/// Rough line width for a label, good enough to size chips around text.
fn est_width(label: &str, font_size: f32) -> f32 {
    label.chars().count() as f32 * font_size * 0.52
}

fn white(alpha: f32) -> Color {
    Color::srgba(1.0, 1.0, 1.0, alpha)
}

/// Spawns a pill-shaped label. Returns the chip width so rows can be laid
/// out left to right.
fn chip(
    parent: &mut ChildBuilder,
    label: &str,
    font: &Handle<Font>,
    font_size: f32,
    center: Vec2,
    fade: Option<f32>,
) -> f32 {
    let width = est_width(label, font_size) + 24.0;
    let height = font_size + 14.0;
    let bg_alpha = 0.1;
    let mut bg = parent.spawn(panel(
        Color::from(EMERALD_500).with_alpha(if fade.is_some() { 0.0 } else { bg_alpha }),
        Vec2::new(width, height),
        center.extend(PANEL_Z),
    ));
    if fade.is_some() {
        bg.insert(Fadeable { base: bg_alpha });
    }
    let text_color = Color::from(EMERALD_200);
    let mut text = parent.spawn(text2d(
        label,
        style(font, font_size, if fade.is_some() { text_color.with_alpha(0.0) } else { text_color }),
        Anchor::Center,
        center.extend(TEXT_Z),
    ));
    if fade.is_some() {
        text.insert(Fadeable { base: 1.0 });
    }
    width
}

fn setup_scene(
    mut commands: Commands,
    site: Res<SiteData>,
    fonts: Res<FontHandles>,
    settings: Res<GlowfolioSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut images: ResMut<Assets<Image>>,
    assets: Res<AssetServer>,
) {
    // Headless hosts get the shipped window's dimensions.
    let (view_w, view_h) = windows
        .get_single()
        .map(|window| (window.width(), window.height()))
        .unwrap_or((1280.0, 800.0));
    let content = &site.content;

    // Section heights, top to bottom. The hero band is exactly one view.
    let banner_h = view_h * 0.38;
    let heading_h = view_h * 0.16;
    let card_w = (view_w - 2.0 * MARGIN_X - CARD_GAP) / 2.0;
    let card_h = view_h * 0.62;
    let projects_h = heading_h + 2.0 * card_h + CARD_GAP + 60.0;
    let contact_h = view_h * 0.5;
    let footer_h = view_h * 0.22;
    let page_h = view_h + banner_h + projects_h + contact_h + footer_h;
    let max_scroll = (page_h - view_h).max(0.0);

    spawn_backdrop(&mut commands, &mut images, view_w, view_h, page_h);
    spawn_hero(&mut commands, content, &fonts, &assets, view_w, view_h);

    // Everything below the hero stacks off a running cursor.
    let mut cursor = -view_h / 2.0;

    spawn_banner(&mut commands, content, &fonts, view_w, banner_h, cursor - banner_h / 2.0);
    cursor -= banner_h;

    spawn_projects_heading(&mut commands, &fonts, view_w, heading_h, cursor - heading_h / 2.0);
    cursor -= heading_h;

    for (index, project) in content.projects.iter().take(4).enumerate() {
        let col = index % 2;
        let row = index / 2;
        let x = (card_w + CARD_GAP) / 2.0 * if col == 0 { -1.0 } else { 1.0 };
        let y = cursor - card_h / 2.0 - (card_h + CARD_GAP) * row as f32;
        spawn_project_card(
            &mut commands,
            project,
            &fonts,
            &assets,
            Vec2::new(card_w, card_h),
            Vec2::new(x, y),
            index as f32 * CARD_STAGGER_SECS,
        );
    }
    cursor -= 2.0 * card_h + CARD_GAP + 60.0;

    spawn_contact(&mut commands, content, &fonts, view_w, contact_h, cursor - contact_h / 2.0);
    cursor -= contact_h;

    spawn_footer(&mut commands, content, &fonts, view_w, footer_h, cursor - footer_h / 2.0);

    commands.insert_resource(PageGeometry { view_w, view_h, page_h, max_scroll });
    let mut spring =
        Spring::new(settings.scroll.spring_stiffness, settings.scroll.spring_damping);
    spring.settle_at(0.0);
    commands.insert_resource(ScrollState {
        timeline: ScrollTimeline {
            glide_secs: settings.scroll.glide_secs,
            dwell_secs: settings.scroll.dwell_secs,
        },
        spring,
        elapsed: 0.0,
        progress: 0.0,
    });
    info!(
        "scene built: {} projects, page height {:.0}px, scroll span {:.0}px",
        content.projects.len().min(4),
        page_h,
        max_scroll
    );
}

/// Faint grid over the whole page plus the hero's blurred color washes.
fn spawn_backdrop(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    view_w: f32,
    view_h: f32,
    page_h: f32,
) {
    let grid = images.add(grid_tile(GRID_CELL_PX));
    commands.spawn((
        SpriteBundle {
            texture: grid,
            sprite: Sprite {
                color: Color::WHITE,
                custom_size: Some(Vec2::new(view_w, page_h)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, view_h / 2.0 - page_h / 2.0, GRID_Z),
            ..default()
        },
        ImageScaleMode::Tiled { tile_x: true, tile_y: true, stretch_value: 1.0 },
    ));

    let glow = images.add(radial_glow(512));
    let washes = [
        (Vec2::new(view_w * 0.45, view_h * 0.35), view_h * 0.9, Color::from(AMBER_200).with_alpha(0.05)),
        (Vec2::new(-view_w * 0.3, -view_h * 0.3), view_h * 1.4, Color::from(TEAL_900).with_alpha(0.1)),
        (Vec2::new(view_w * 0.2, -view_h * 0.45), view_h * 1.0, Color::from(EMERALD_900).with_alpha(0.05)),
    ];
    for (pos, size, color) in washes {
        commands.spawn(SpriteBundle {
            texture: glow.clone(),
            sprite: Sprite { color, custom_size: Some(Vec2::splat(size)), ..default() },
            transform: Transform::from_xyz(pos.x, pos.y, GLOW_Z),
            ..default()
        });
    }
}

fn spawn_hero(
    commands: &mut Commands,
    content: &SiteContent,
    fonts: &FontHandles,
    assets: &AssetServer,
    view_w: f32,
    view_h: f32,
) {
    let left = -view_w / 2.0 + MARGIN_X;
    let top = view_h / 2.0;
    let column_w = view_w * 0.55;

    commands
        .spawn(SpatialBundle::default())
        .with_children(|hero| {
            // Availability pill.
            let pill_w = est_width(&content.profile.availability, 12.0) + 40.0;
            hero.spawn(panel(
                Color::from(EMERALD_500).with_alpha(0.1),
                Vec2::new(pill_w, 26.0),
                Vec3::new(left + pill_w / 2.0, top - 110.0, PANEL_Z),
            ));
            hero.spawn(panel(
                Color::from(EMERALD_400),
                Vec2::splat(8.0),
                Vec3::new(left + 16.0, top - 110.0, TEXT_Z),
            ));
            hero.spawn(text2d(
                &content.profile.availability,
                style(&fonts.body, 12.0, EMERALD_200.into()),
                Anchor::CenterLeft,
                Vec3::new(left + 28.0, top - 110.0, TEXT_Z),
            ));

            // Name, wrapped onto two display lines.
            hero.spawn(wrapped(
                text2d(
                    &content.profile.name,
                    style(&fonts.display, 64.0, white(1.0)),
                    Anchor::TopLeft,
                    Vec3::new(left, top - 140.0, TEXT_Z),
                ),
                Vec2::new(column_w * 0.8, 180.0),
            ));

            // Organization badges.
            let mut badge_x = left;
            for org in &content.organizations {
                let label = format!("{} {}", org.membership, org.name);
                let w = chip(
                    hero,
                    &label,
                    &fonts.body,
                    14.0,
                    Vec2::new(badge_x + est_width(&label, 14.0) / 2.0 + 12.0, top - 330.0),
                    None,
                );
                badge_x += w + 12.0;
            }

            hero.spawn(text2d(
                &content.profile.role_line,
                style(&fonts.body, 24.0, white(0.95)),
                Anchor::CenterLeft,
                Vec3::new(left, top - 378.0, TEXT_Z),
            ));

            // Mission block and second organization line.
            if let Some(org) = content.organizations.first() {
                let mission = format!("{} — {}", org.name, content.hero_mission);
                hero.spawn(wrapped(
                    text2d(
                        &mission,
                        style(&fonts.body, 16.0, white(0.9)),
                        Anchor::TopLeft,
                        Vec3::new(left, top - 408.0, TEXT_Z),
                    ),
                    Vec2::new(column_w, 130.0),
                ));
            }
            if let Some(org) = content.organizations.get(1) {
                let line = format!("{} {} — {}", org.membership, org.name, org.tagline);
                hero.spawn(wrapped(
                    text2d(
                        &line,
                        style(&fonts.body, 15.0, white(0.8)),
                        Anchor::TopLeft,
                        Vec3::new(left, top - 540.0, TEXT_Z),
                    ),
                    Vec2::new(column_w, 90.0),
                ));
            }

            // Call-to-action row: one solid button, two ghosts.
            let cta_y = top - 660.0;
            let talk_w = est_width("Let’s talk", 15.0) + 36.0;
            hero.spawn(panel(
                EMERALD_500.into(),
                Vec2::new(talk_w, 38.0),
                Vec3::new(left + talk_w / 2.0, cta_y, PANEL_Z),
            ));
            hero.spawn(text2d(
                "Let’s talk",
                style(&fonts.body, 15.0, SLATE_900.into()),
                Anchor::Center,
                Vec3::new(left + talk_w / 2.0, cta_y, TEXT_Z),
            ));
            let mut cta_x = left + talk_w + 14.0;
            for label in ["GitHub", "LinkedIn"] {
                let w = est_width(label, 15.0) + 36.0;
                hero.spawn(panel(
                    Color::from(EMERALD_400).with_alpha(0.12),
                    Vec2::new(w, 38.0),
                    Vec3::new(cta_x + w / 2.0, cta_y, PANEL_Z),
                ));
                hero.spawn(text2d(
                    label,
                    style(&fonts.body, 15.0, EMERALD_400.into()),
                    Anchor::Center,
                    Vec3::new(cta_x + w / 2.0, cta_y, TEXT_Z),
                ));
                cta_x += w + 14.0;
            }

            // Skill chips.
            let mut chip_x = left;
            for skill in &content.skill_chips {
                let w = chip(
                    hero,
                    skill,
                    &fonts.body,
                    14.0,
                    Vec2::new(chip_x + est_width(skill, 14.0) / 2.0 + 12.0, top - 720.0),
                    None,
                );
                chip_x += w + 10.0;
            }
        });

    spawn_flip_card(commands, content, fonts, assets, view_w, view_h);
}

fn spawn_flip_card(
    commands: &mut Commands,
    content: &SiteContent,
    fonts: &FontHandles,
    assets: &AssetServer,
    view_w: f32,
    view_h: f32,
) {
    let card_w = view_w * 0.26;
    let card_h = view_h * 0.56;
    let center = Vec3::new(view_w / 2.0 - MARGIN_X - card_w / 2.0, view_h * 0.06, PANEL_Z);
    let portrait = load_if_exists::<Image>(assets, &content.profile.portrait);

    let mut front = Entity::PLACEHOLDER;
    let mut back = Entity::PLACEHOLDER;
    let root = commands
        .spawn((SpatialBundle::from_transform(Transform::from_translation(center)), FlipState::default()))
        .with_children(|card| {
            // Emerald ring, drawn as a slightly larger backing plate.
            card.spawn(panel(
                Color::from(EMERALD_400).with_alpha(0.25),
                Vec2::new(card_w + 8.0, card_h + 8.0),
                Vec3::new(0.0, 0.0, -0.1),
            ));

            front = card
                .spawn(SpatialBundle::default())
                .with_children(|face| {
                    match &portrait {
                        Some(texture) => {
                            face.spawn(SpriteBundle {
                                texture: texture.clone(),
                                sprite: Sprite {
                                    custom_size: Some(Vec2::new(card_w, card_h)),
                                    ..default()
                                },
                                ..default()
                            });
                        }
                        None => {
                            face.spawn(panel(
                                Color::from(SLATE_900),
                                Vec2::new(card_w, card_h),
                                Vec3::ZERO,
                            ));
                        }
                    }
                    // Name plate along the bottom edge.
                    face.spawn(panel(
                        Color::srgba(0.0, 0.0, 0.0, 0.55),
                        Vec2::new(card_w, 54.0),
                        Vec3::new(0.0, -card_h / 2.0 + 27.0, TEXT_Z),
                    ));
                    face.spawn(text2d(
                        &content.profile.name,
                        style(&fonts.display, 17.0, white(1.0)),
                        Anchor::Center,
                        Vec3::new(0.0, -card_h / 2.0 + 27.0, TEXT_Z + 0.5),
                    ));
                })
                .id();

            back = card
                .spawn(SpatialBundle { visibility: Visibility::Hidden, ..default() })
                .with_children(|face| {
                    face.spawn(panel(
                        Color::from(SLATE_900).with_alpha(0.97),
                        Vec2::new(card_w, card_h),
                        Vec3::ZERO,
                    ));
                    face.spawn(text2d(
                        "About me",
                        style(&fonts.display, 18.0, EMERALD_200.into()),
                        Anchor::TopLeft,
                        Vec3::new(-card_w / 2.0 + 20.0, card_h / 2.0 - 18.0, TEXT_Z),
                    ));
                    face.spawn(wrapped(
                        text2d(
                            &content.profile.long_about.join("\n\n"),
                            style(&fonts.body, 12.5, white(0.85)),
                            Anchor::TopLeft,
                            Vec3::new(-card_w / 2.0 + 20.0, card_h / 2.0 - 52.0, TEXT_Z),
                        ),
                        Vec2::new(card_w - 40.0, card_h - 72.0),
                    ));
                })
                .id();
        })
        .id();

    commands.entity(root).insert(ProfileCard { front, back });
}

fn spawn_banner(
    commands: &mut Commands,
    content: &SiteContent,
    fonts: &FontHandles,
    view_w: f32,
    banner_h: f32,
    center_y: f32,
) {
    let panel_w = view_w - 2.0 * MARGIN_X;
    let panel_h = banner_h - 48.0;
    let left = -panel_w / 2.0 + 36.0;
    let hackathon = &content.hackathon;

    commands
        .spawn(SpatialBundle::from_transform(Transform::from_xyz(0.0, center_y, 0.0)))
        .with_children(|banner| {
            banner.spawn(panel(
                Color::from(EMERALD_400).with_alpha(0.3),
                Vec2::new(panel_w + 2.0, panel_h + 2.0),
                Vec3::new(0.0, 0.0, PANEL_Z),
            ));
            banner.spawn(panel(
                Color::from(EMERALD_500).with_alpha(0.1),
                Vec2::new(panel_w, panel_h),
                Vec3::new(0.0, 0.0, PANEL_Z + 0.1),
            ));
            banner.spawn(panel(
                Color::from(EMERALD_400),
                Vec2::splat(8.0),
                Vec3::new(left, panel_h / 2.0 - 34.0, TEXT_Z),
            ));
            banner.spawn(text2d(
                &hackathon.scope.to_uppercase(),
                style(&fonts.body, 12.0, EMERALD_200.into()),
                Anchor::CenterLeft,
                Vec3::new(left + 14.0, panel_h / 2.0 - 34.0, TEXT_Z),
            ));
            banner.spawn(text2d(
                &hackathon.name,
                style(&fonts.display, 26.0, white(1.0)),
                Anchor::CenterLeft,
                Vec3::new(left, panel_h / 2.0 - 72.0, TEXT_Z),
            ));
            banner.spawn(text2d(
                &format!("{} · Prize: {}", hackathon.deadline, hackathon.prize),
                style(&fonts.body, 15.0, Color::from(EMERALD_100).with_alpha(0.9)),
                Anchor::CenterLeft,
                Vec3::new(left, panel_h / 2.0 - 108.0, TEXT_Z),
            ));

            // Registration button on the right edge.
            let button_w = est_width(&hackathon.name, 15.0) + 40.0;
            banner.spawn(panel(
                Color::from(EMERALD_500).with_alpha(0.2),
                Vec2::new(button_w, 40.0),
                Vec3::new(panel_w / 2.0 - 36.0 - button_w / 2.0, 0.0, TEXT_Z),
            ));
            banner.spawn(text2d(
                &hackathon.name,
                style(&fonts.body, 15.0, Color::from(EMERALD_100)),
                Anchor::Center,
                Vec3::new(panel_w / 2.0 - 36.0 - button_w / 2.0, 0.0, TEXT_Z + 0.5),
            ));
        });
}

fn spawn_projects_heading(
    commands: &mut Commands,
    fonts: &FontHandles,
    view_w: f32,
    heading_h: f32,
    center_y: f32,
) {
    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(
                0.0,
                center_y - REVEAL_RISE,
                0.0,
            )),
            Reveal {
                rest_y: center_y,
                height: heading_h,
                delay: 0.0,
                secs: SECTION_REVEAL_SECS,
                started: false,
            },
        ))
        .with_children(|heading| {
            heading.spawn((
                text2d(
                    "Featured projects",
                    style(&fonts.display, 30.0, white(0.0)),
                    Anchor::CenterLeft,
                    Vec3::new(-view_w / 2.0 + MARGIN_X, 0.0, TEXT_Z),
                ),
                Fadeable { base: 1.0 },
            ));
        });
}

fn spawn_project_card(
    commands: &mut Commands,
    project: &Project,
    fonts: &FontHandles,
    assets: &AssetServer,
    size: Vec2,
    center: Vec2,
    delay: f32,
) {
    let (card_w, card_h) = (size.x, size.y);
    let media_h = card_h * 0.42;
    let left = -card_w / 2.0 + 24.0;
    let poster = project.poster.as_deref().and_then(|rel| load_if_exists::<Image>(assets, rel));

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(
                center.x,
                center.y - REVEAL_RISE,
                0.0,
            )),
            Reveal {
                rest_y: center.y,
                height: card_h,
                delay,
                secs: CARD_REVEAL_SECS,
                started: false,
            },
        ))
        .with_children(|card| {
            card.spawn((
                panel(white(0.0), Vec2::new(card_w, card_h), Vec3::new(0.0, 0.0, PANEL_Z)),
                Fadeable { base: 0.05 },
            ));

            // Media slot with poster or placeholder.
            let media_y = card_h / 2.0 - media_h / 2.0;
            card.spawn((
                panel(
                    Color::from(SLATE_900).with_alpha(0.0),
                    Vec2::new(card_w, media_h),
                    Vec3::new(0.0, media_y, PANEL_Z + 0.1),
                ),
                Fadeable { base: 0.4 },
            ));
            match &poster {
                Some(texture) => {
                    card.spawn((
                        SpriteBundle {
                            texture: texture.clone(),
                            sprite: Sprite {
                                color: white(0.0),
                                custom_size: Some(Vec2::new(card_w - 24.0, media_h - 16.0)),
                                ..default()
                            },
                            transform: Transform::from_xyz(0.0, media_y, PANEL_Z + 0.2),
                            ..default()
                        },
                        Fadeable { base: 1.0 },
                    ));
                }
                None => {
                    card.spawn((
                        text2d(
                            "No media available",
                            style(&fonts.body, 14.0, white(0.0)),
                            Anchor::Center,
                            Vec3::new(0.0, media_y, TEXT_Z),
                        ),
                        Fadeable { base: 0.5 },
                    ));
                }
            }

            let mut text_y = card_h / 2.0 - media_h - 34.0;
            card.spawn((
                text2d(
                    &project.title,
                    style(&fonts.display, 18.0, white(0.0)),
                    Anchor::CenterLeft,
                    Vec3::new(left, text_y, TEXT_Z),
                ),
                Fadeable { base: 1.0 },
            ));
            text_y -= 24.0;
            card.spawn((
                wrapped(
                    text2d(
                        &project.blurb,
                        style(&fonts.body, 14.0, white(0.0)),
                        Anchor::TopLeft,
                        Vec3::new(left, text_y, TEXT_Z),
                    ),
                    Vec2::new(card_w - 48.0, 70.0),
                ),
                Fadeable { base: 0.9 },
            ));
            text_y -= 84.0;

            let mut tag_x = left;
            for tag in &project.tags {
                let w = chip(
                    card,
                    tag,
                    &fonts.body,
                    12.0,
                    Vec2::new(tag_x + est_width(tag, 12.0) / 2.0 + 12.0, text_y),
                    Some(1.0),
                );
                tag_x += w + 8.0;
            }
            text_y -= 34.0;

            let mut link_x = left;
            let code_label = project
                .links
                .code_label
                .as_deref()
                .unwrap_or("Code");
            let links = [
                project.links.demo.as_deref().map(|_| "Demo ↗"),
                project.links.code.as_deref().map(|_| code_label),
            ];
            for label in links.into_iter().flatten() {
                card.spawn((
                    text2d(
                        label,
                        style(&fonts.body, 13.0, white(0.0)),
                        Anchor::CenterLeft,
                        Vec3::new(link_x, text_y, TEXT_Z),
                    ),
                    Fadeable { base: 0.9 },
                ));
                link_x += est_width(label, 13.0) + 28.0;
            }
        });
}

fn spawn_contact(
    commands: &mut Commands,
    content: &SiteContent,
    fonts: &FontHandles,
    view_w: f32,
    contact_h: f32,
    center_y: f32,
) {
    let panel_w = view_w - 2.0 * MARGIN_X;
    let panel_h = contact_h - 64.0;
    let left = -panel_w / 2.0 + 44.0;

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(
                0.0,
                center_y - REVEAL_RISE,
                0.0,
            )),
            Reveal {
                rest_y: center_y,
                height: contact_h,
                delay: 0.0,
                secs: SECTION_REVEAL_SECS,
                started: false,
            },
        ))
        .with_children(|contact| {
            contact.spawn((
                panel(white(0.0), Vec2::new(panel_w + 2.0, panel_h + 2.0), Vec3::new(0.0, 0.0, PANEL_Z)),
                Fadeable { base: 0.1 },
            ));
            contact.spawn((
                panel(
                    Color::from(SLATE_900).with_alpha(0.0),
                    Vec2::new(panel_w, panel_h),
                    Vec3::new(0.0, 0.0, PANEL_Z + 0.1),
                ),
                Fadeable { base: 0.9 },
            ));
            contact.spawn((
                text2d(
                    &content.contact_heading,
                    style(&fonts.display, 30.0, white(0.0)),
                    Anchor::CenterLeft,
                    Vec3::new(left, 28.0, TEXT_Z),
                ),
                Fadeable { base: 1.0 },
            ));
            contact.spawn((
                wrapped(
                    text2d(
                        &content.contact_blurb,
                        style(&fonts.body, 15.0, white(0.0)),
                        Anchor::TopLeft,
                        Vec3::new(left, 0.0, TEXT_Z),
                    ),
                    Vec2::new(panel_w * 0.5, 60.0),
                ),
                Fadeable { base: 0.7 },
            ));

            // Social squares on the right edge.
            let mut social_x = panel_w / 2.0 - 44.0 - 4.0 * 52.0;
            for glyph in ["@", "in", "ig", "wa"] {
                contact.spawn((
                    panel(
                        white(0.0),
                        Vec2::splat(40.0),
                        Vec3::new(social_x + 20.0, 0.0, TEXT_Z),
                    ),
                    Fadeable { base: 0.05 },
                ));
                contact.spawn((
                    text2d(
                        glyph,
                        style(&fonts.body, 14.0, Color::from(EMERALD_400).with_alpha(0.0)),
                        Anchor::Center,
                        Vec3::new(social_x + 20.0, 0.0, TEXT_Z + 0.5),
                    ),
                    Fadeable { base: 0.9 },
                ));
                social_x += 52.0;
            }
        });
}

fn spawn_footer(
    commands: &mut Commands,
    content: &SiteContent,
    fonts: &FontHandles,
    view_w: f32,
    footer_h: f32,
    center_y: f32,
) {
    commands
        .spawn(SpatialBundle::from_transform(Transform::from_xyz(0.0, center_y, 0.0)))
        .with_children(|footer| {
            footer.spawn(panel(
                white(0.1),
                Vec2::new(view_w, 1.0),
                Vec3::new(0.0, footer_h / 2.0, PANEL_Z),
            ));
            footer.spawn(text2d(
                &content.meta.footer_note,
                style(&fonts.body, 13.0, white(0.6)),
                Anchor::CenterLeft,
                Vec3::new(-view_w / 2.0 + MARGIN_X, 0.0, TEXT_Z),
            ));
            if let Some(org) = content.organizations.first() {
                footer.spawn(text2d(
                    &org.name,
                    style(&fonts.body, 13.0, white(0.7)),
                    Anchor::CenterRight,
                    Vec3::new(view_w / 2.0 - MARGIN_X, 0.0, TEXT_Z),
                ));
            }
        });
}

/// Drives the camera down the page along the scroll timeline, smoothed by
/// the spring.
fn advance_scroll(
    time: Res<Time>,
    geometry: Res<PageGeometry>,
    mut scroll: ResMut<ScrollState>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let dt = time.delta_seconds();
    scroll.elapsed += dt;
    let target = scroll.timeline.target(scroll.elapsed);
    let progress = scroll.spring.step(target, dt).clamp(0.0, 1.0);
    scroll.progress = progress;
    if let Ok(mut transform) = camera.get_single_mut() {
        transform.translation.y = -progress * geometry.max_scroll;
    }
}

/// Arms a reveal once its block scrolls into view, with the original
/// page's 80px margin before it counts as visible.
fn trigger_reveals(
    mut commands: Commands,
    geometry: Res<PageGeometry>,
    camera: Query<&Transform, With<MainCamera>>,
    mut reveals: Query<(Entity, &Transform, &mut Reveal), Without<MainCamera>>,
) {
    let Ok(camera) = camera.get_single() else { return };
    let view_bottom = camera.translation.y - geometry.view_h / 2.0;
    for (entity, transform, mut reveal) in reveals.iter_mut() {
        if reveal.started {
            continue;
        }
        let block_top = transform.translation.y + reveal.height / 2.0;
        if block_top > view_bottom + REVEAL_MARGIN {
            reveal.started = true;
            commands.entity(entity).insert(RevealPlay { elapsed: -reveal.delay });
        }
    }
}

/// Slides an armed block up to its rest position while fading its subtree
/// from transparent to each drawable's target alpha.
fn play_reveals(
    mut commands: Commands,
    time: Res<Time>,
    mut playing: Query<(Entity, &Reveal, &mut RevealPlay, &mut Transform)>,
    children_query: Query<&Children>,
    mut sprites: Query<(&Fadeable, &mut Sprite)>,
    mut texts: Query<(&Fadeable, &mut Text)>,
) {
    for (entity, reveal, mut play, mut transform) in playing.iter_mut() {
        play.elapsed += time.delta_seconds();
        if play.elapsed < 0.0 {
            continue;
        }
        let t = (play.elapsed / reveal.secs).clamp(0.0, 1.0);
        let f = 1.0 - (1.0 - t).powi(3);
        transform.translation.y = reveal.rest_y - REVEAL_RISE * (1.0 - f);
        set_subtree_alpha(entity, f, &children_query, &mut sprites, &mut texts);
        if t >= 1.0 {
            commands.entity(entity).remove::<RevealPlay>();
        }
    }
}

fn set_subtree_alpha(
    root: Entity,
    factor: f32,
    children_query: &Query<&Children>,
    sprites: &mut Query<(&Fadeable, &mut Sprite)>,
    texts: &mut Query<(&Fadeable, &mut Text)>,
) {
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if let Ok((fade, mut sprite)) = sprites.get_mut(entity) {
            sprite.color = sprite.color.with_alpha(fade.base * factor);
        }
        if let Ok((fade, mut text)) = texts.get_mut(entity) {
            for section in text.sections.iter_mut() {
                section.style.color = section.style.color.with_alpha(fade.base * factor);
            }
        }
        if let Ok(children) = children_query.get(entity) {
            stack.extend(children.iter().copied());
        }
    }
}

fn cue_flips(time: Res<Time>, mut timer: ResMut<FlipTimer>, mut flip_tx: EventWriter<FlipCue>) {
    if timer.0.tick(time.delta()).just_finished() {
        flip_tx.send(FlipCue);
    }
}

/// Turns the profile card over on each cue: the root squashes through
/// zero width and the faces swap at the hidden midpoint.
fn animate_flips(
    time: Res<Time>,
    mut cues: EventReader<FlipCue>,
    mut cards: Query<(&ProfileCard, &mut FlipState, &mut Transform)>,
    mut faces: Query<&mut Visibility>,
) {
    let cued = !cues.is_empty();
    cues.clear();
    for (card, mut state, mut transform) in cards.iter_mut() {
        if cued && state.progress.is_none() {
            state.progress = Some(0.0);
        }
        let Some(previous) = state.progress else { continue };
        let t = (previous + time.delta_seconds() / FLIP_SECS).min(1.0);
        if previous < 0.5 && t >= 0.5 {
            state.showing_back = !state.showing_back;
            let (shown, hidden) =
                if state.showing_back { (card.back, card.front) } else { (card.front, card.back) };
            if let Ok(mut visibility) = faces.get_mut(shown) {
                *visibility = Visibility::Inherited;
            }
            if let Ok(mut visibility) = faces.get_mut(hidden) {
                *visibility = Visibility::Hidden;
            }
        }
        transform.scale.x = (t * std::f32::consts::PI).cos().abs();
        state.progress = if t >= 1.0 {
            transform.scale.x = 1.0;
            None
        } else {
            Some(t)
        };
    }
}
