use bevy::prelude::*;
use bevy_glowfolio::*;

fn main() {
    App::new()
        .insert_resource(Msaa::Off)
        .insert_resource(GlowfolioSettings::default())
        .add_plugins((
            DefaultPlugins.set(WindowPlugin { primary_window: Some(Window { title: "glowfolio".into(), resolution: (1280.0, 800.0).into(), resizable: false, ..default() }), ..default() }),
            GlowfolioPlugin,
        ))
        .add_systems(Update, (on_ready, on_flip))
        .run();
}

fn on_ready(mut ev: EventReader<ViewReady>) {
    for _ in ev.read() {
        info!("READY");
    }
}

fn on_flip(mut ev: EventReader<FlipCue>) {
    for _ in ev.read() { info!("FLIP"); }
}
