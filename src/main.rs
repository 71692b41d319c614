use bevy::prelude::*;
use std::path::Path;

use bevy_glowfolio::{
    load_snapshot, resolve_content, write_snapshot, GlowfolioPlugin, GlowfolioSettings,
    LayoutSnapshot, RayConfig, SiteData,
};

fn main() {
    // Simple CLI: --dump-layout [side count duration]
    //             --snapshot <path> [side count duration]
    //             --verify <path>
    let mut args = std::env::args().skip(1);
    if let Some(cmd) = args.next() {
        match cmd.as_str() {
            "--dump-layout" => {
                let config = ray_config_from(&mut args);
                println!("{}", LayoutSnapshot::capture(config).to_json());
                return;
            }
            "--snapshot" => {
                if let Some(path) = args.next() {
                    let config = ray_config_from(&mut args);
                    let snapshot = LayoutSnapshot::capture(config);
                    match write_snapshot(Path::new(&path), &snapshot) {
                        Ok(()) => println!(
                            "Snapshot of {} rays written to {}",
                            snapshot.rays.len(),
                            path
                        ),
                        Err(err) => eprintln!("Failed to write {}: {}", path, err),
                    }
                    return;
                }
            }
            "--verify" => {
                if let Some(path) = args.next() {
                    match load_snapshot(Path::new(&path)) {
                        Some(snapshot) => match snapshot.verify() {
                            Ok(()) => println!(
                                "Layout OK: {} rays ({}) replay identically",
                                snapshot.rays.len(),
                                snapshot.config.side
                            ),
                            Err(err) => println!("Layout MISMATCH: {:?}", err),
                        },
                        None => eprintln!("Failed to load snapshot: {}", path),
                    }
                    return;
                }
            }
            _ => {}
        }
    }

    let settings = GlowfolioSettings::default();
    let content = resolve_content(&settings);
    let title = content.meta.title.clone();

    App::new()
        .insert_resource(settings)
        .insert_resource(SiteData { content })
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title,
                    resolution: (1280., 800.).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            GlowfolioPlugin,
        ))
        .run();
}

/// Optional trailing layout arguments; anything missing or unparsable
/// keeps the default.
fn ray_config_from(args: &mut impl Iterator<Item = String>) -> RayConfig {
    let mut config = RayConfig::default();
    if let Some(side) = args.next() {
        if let Ok(side) = side.parse() {
            config.side = side;
        }
    }
    if let Some(count) = args.next() {
        if let Ok(count) = count.parse() {
            config.ray_count = count;
        }
    }
    if let Some(duration) = args.next() {
        if let Ok(duration) = duration.parse() {
            config.base_duration = duration;
        }
    }
    config
}
