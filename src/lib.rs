mod config;
mod layout;
mod lifecycle;
mod rng;
mod snapshot;
mod types;

#[cfg(feature = "bevy")]
mod hud;
#[cfg(feature = "bevy")]
mod plugin;
#[cfg(feature = "bevy")]
mod rays;
#[cfg(feature = "bevy")]
mod scene;
#[cfg(feature = "bevy")]
mod sparkles;
#[cfg(feature = "bevy")]
mod textures;

pub use config::*;
pub use layout::*;
pub use lifecycle::*;
pub use rng::*;
pub use snapshot::*;
pub use types::*;

#[cfg(feature = "bevy")]
pub use plugin::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn generator_matches_reference_sequence() {
        // seed 1234: 96011, 51768, 53545, 18542
        let mut rng = SequenceRng::new(1234);
        assert_eq!(rng.next_state(), 96011);
        assert_eq!(rng.next_state(), 51768);
        assert_eq!(rng.next_state(), 53545);
        assert_eq!(rng.next_state(), 18542);
    }

    #[test]
    fn seed_reduction_is_congruent() {
        let mut reduced = SequenceRng::new(1234 + 233280);
        let mut raw = SequenceRng::new(1234);
        for _ in 0..16 {
            assert_eq!(reduced.next_state(), raw.next_state());
        }
    }

    #[test]
    fn generator_output_stays_in_unit_interval() {
        let mut rng = SequenceRng::new(u32::MAX);
        for _ in 0..1000 {
            let value = rng.next_f32();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn layout_replays_identically() {
        let first = build_ray_layout(SideMode::Both, 10, 45.0);
        let second = build_ray_layout(SideMode::Both, 10, 45.0);
        assert_eq!(first, second);
    }

    #[test]
    fn both_sides_alternate_and_double() {
        let rays = build_ray_layout(SideMode::Both, 5, 45.0);
        assert_eq!(rays.len(), 10);
        for (index, ray) in rays.iter().enumerate() {
            assert_eq!(ray.id, index);
            let expected = if index % 2 == 0 { Side::Left } else { Side::Right };
            assert_eq!(ray.side, expected);
        }
    }

    #[test]
    fn single_side_reuses_the_draw_sequence() {
        // A left-only layer consumes the same generator stream as the
        // first half of a both-sides layer; only the side differs.
        let left = build_ray_layout(SideMode::Left, 6, 45.0);
        let both = build_ray_layout(SideMode::Both, 6, 45.0);
        assert_eq!(left.len(), 6);
        for (only, paired) in left.iter().zip(&both) {
            assert_eq!(only.side, Side::Left);
            assert_eq!(only.width, paired.width);
            assert_eq!(only.offset, paired.offset);
            assert_eq!(only.duration, paired.duration);
            assert_eq!(only.delay, paired.delay);
        }
        assert_eq!(both[1].side, Side::Right);
    }

    #[test]
    fn zero_count_builds_empty_layout() {
        assert!(build_ray_layout(SideMode::Both, 0, 45.0).is_empty());
        assert!(build_ray_layout(SideMode::Right, 0, 45.0).is_empty());
    }

    #[test]
    fn ray_fields_stay_in_range() {
        for ray in build_ray_layout(SideMode::Both, 50, 45.0) {
            assert!((0.5..1.5).contains(&ray.width));
            assert!((0.0..95.0).contains(&ray.offset));
            assert!((37.5..52.5).contains(&ray.duration));
            assert!(ray.delay <= 0.0 && ray.delay > -45.0);
        }
    }

    #[test]
    fn first_rays_match_hand_computed_values() {
        let rays = build_ray_layout(SideMode::Both, 2, 45.0);
        assert_eq!(rays.len(), 4);
        // First four draws from seed 1234, mapped in declaration order.
        assert!(close(rays[0].width, 96011.0 / 233280.0 + 0.5));
        assert!(close(rays[0].offset, 51768.0 / 233280.0 * 95.0));
        assert!(close(rays[0].duration, 45.0 + 53545.0 / 233280.0 * 15.0 - 7.5));
        assert!(close(rays[0].delay, -(18542.0 / 233280.0 * 45.0)));
        assert_eq!(rays[0].side, Side::Left);
        assert_eq!(rays[1].side, Side::Right);
        assert_eq!(rays[3].side, Side::Right);
    }

    #[test]
    fn lifecycle_confirms_once_and_never_reverts() {
        let mut lifecycle = Lifecycle::default();
        assert!(!lifecycle.is_ready());
        assert!(lifecycle.confirm());
        assert!(lifecycle.is_ready());
        assert!(!lifecycle.confirm());
        assert!(lifecycle.is_ready());
    }

    #[test]
    fn flicker_track_passes_through_keyframes() {
        assert!(close(keyframe_track(&RAY_FLICKER, 0.0), 0.1));
        assert!(close(keyframe_track(&RAY_FLICKER, 0.25), 0.2));
        assert!(close(keyframe_track(&RAY_FLICKER, 0.5), 0.08));
        assert!(close(keyframe_track(&RAY_FLICKER, 0.75), 0.15));
        assert!(close(keyframe_track(&RAY_FLICKER, 1.0), 0.1));
        // Linear midpoint of the first segment.
        assert!(close(keyframe_track(&RAY_FLICKER, 0.125), 0.15));
    }

    #[test]
    fn keyframe_track_edge_cases() {
        assert_eq!(keyframe_track(&[], 0.5), 0.0);
        assert_eq!(keyframe_track(&[0.7], 0.3), 0.7);
        assert!(close(keyframe_track(&RAY_FLICKER, -1.0), 0.1));
        assert!(close(keyframe_track(&RAY_FLICKER, 2.0), 0.1));
        assert!(close(keyframe_track(&RAY_FLICKER, f32::NAN), 0.1));
    }

    #[test]
    fn eased_track_shares_anchors_but_leans_in() {
        for (index, frame) in SPARKLE_OPACITY.iter().enumerate() {
            let phase = index as f32 / (SPARKLE_OPACITY.len() - 1) as f32;
            assert!(close(keyframe_track_eased(&SPARKLE_OPACITY, phase), *frame));
        }
        // Smoothstep starts slower than the straight line.
        let quarter = 0.0625;
        let eased = keyframe_track_eased(&SPARKLE_OPACITY, quarter);
        let linear = keyframe_track(&SPARKLE_OPACITY, quarter);
        assert!(eased < linear);
    }

    #[test]
    fn cycle_phase_folds_offsets_into_one_cycle() {
        assert!(close(cycle_phase(-3.5, 40.0), 3.5));
        assert!(close(cycle_phase(-50.0, 40.0), 10.0));
        assert!(close(cycle_phase(0.0, 40.0), 0.0));
        assert_eq!(cycle_phase(f32::NAN, 40.0), 0.0);
        assert_eq!(cycle_phase(-5.0, 0.0), 0.0);
        assert_eq!(cycle_phase(-5.0, f32::NAN), 0.0);
    }

    #[test]
    fn safe_cycle_secs_guards_degenerate_durations() {
        assert_eq!(safe_cycle_secs(40.0), 40.0);
        assert_eq!(safe_cycle_secs(0.0), 1.0);
        assert_eq!(safe_cycle_secs(-2.0), 1.0);
        assert_eq!(safe_cycle_secs(f32::NAN), 1.0);
        assert_eq!(safe_cycle_secs(f32::INFINITY), 1.0);
    }

    #[test]
    fn spring_settles_on_its_target() {
        let mut spring = Spring::new(180.0, 24.0);
        for _ in 0..600 {
            spring.step(1.0, 1.0 / 60.0);
        }
        assert!((spring.value - 1.0).abs() < 0.01);
        assert!(spring.velocity.abs() < 0.05);
    }

    #[test]
    fn spring_clamps_runaway_timesteps() {
        let mut spring = Spring::new(180.0, 24.0);
        // A two-second hitch must not blow the integrator up.
        for _ in 0..50 {
            spring.step(1.0, 2.0);
        }
        assert!(spring.value.is_finite());
        assert!(spring.value > 0.5);
    }

    #[test]
    fn scroll_timeline_dwells_and_glides() {
        let timeline = ScrollTimeline { glide_secs: 40.0, dwell_secs: 6.0 };
        assert!(close(timeline.period(), 92.0));
        assert!(close(timeline.target(0.0), 0.0));
        assert!(close(timeline.target(3.0), 0.0));
        assert!(close(timeline.target(26.0), 0.5));
        assert!(close(timeline.target(46.0), 1.0));
        assert!(close(timeline.target(50.0), 1.0));
        assert!(close(timeline.target(72.0), 0.5));
        assert!(close(timeline.target(92.0), 0.0));
        assert!(close(timeline.target(95.0), timeline.target(3.0)));
    }

    #[test]
    fn snapshot_roundtrips_and_verifies() {
        let snapshot = LayoutSnapshot::capture(RayConfig::default());
        assert_eq!(snapshot.rays.len(), 20);
        let json = snapshot.to_json();
        let reloaded = LayoutSnapshot::from_json(&json).expect("snapshot json parses");
        assert_eq!(reloaded.rays, snapshot.rays);
        assert!(reloaded.verify().is_ok());
    }

    #[test]
    fn tampered_snapshot_fails_verification() {
        let mut snapshot = LayoutSnapshot::capture(RayConfig::default());
        snapshot.rays[3].width += 0.25;
        assert_eq!(snapshot.verify(), Err(VerifyError::RayMismatch { index: 3 }));

        let mut truncated = LayoutSnapshot::capture(RayConfig::default());
        truncated.rays.pop();
        assert_eq!(
            truncated.verify(),
            Err(VerifyError::CountMismatch { recorded: 19, rebuilt: 20 })
        );
    }

    #[test]
    fn snapshot_file_roundtrip() {
        let path = std::env::temp_dir().join("glowfolio_layout_snapshot.json");
        let snapshot = LayoutSnapshot::capture(RayConfig::default());
        write_snapshot(&path, &snapshot).expect("snapshot writes");
        let loaded = load_snapshot(&path).expect("snapshot reloads");
        assert_eq!(loaded.rays, snapshot.rays);
        assert!(loaded.verify().is_ok());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn sparkle_field_is_seeded_and_in_range() {
        let first = build_sparkle_field(30, SPARKLE_SEED);
        let second = build_sparkle_field(30, SPARKLE_SEED);
        assert_eq!(first, second);
        assert_eq!(first.len(), 30);
        for sparkle in &first {
            assert!((0.0..100.0).contains(&sparkle.x));
            assert!((0.0..100.0).contains(&sparkle.y));
            assert!((0.5..2.5).contains(&sparkle.size));
            assert!((4.0..12.0).contains(&sparkle.duration));
            assert!((0.0..5.0).contains(&sparkle.delay));
        }
        let other = build_sparkle_field(30, SPARKLE_SEED ^ 1);
        assert_ne!(first, other);
    }

    #[test]
    fn side_mode_parses_and_prints() {
        assert_eq!("left".parse::<SideMode>(), Ok(SideMode::Left));
        assert_eq!("right".parse::<SideMode>(), Ok(SideMode::Right));
        assert_eq!("both".parse::<SideMode>(), Ok(SideMode::Both));
        assert!("up".parse::<SideMode>().is_err());
        assert_eq!(SideMode::Both.to_string(), "both");
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn side_mode_ray_totals() {
        assert_eq!(SideMode::Both.total_rays(10), 20);
        assert_eq!(SideMode::Left.total_rays(10), 10);
        assert_eq!(SideMode::Right.total_rays(0), 0);
    }

    #[test]
    fn default_content_is_complete() {
        let content = SiteContent::default();
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.skill_chips.len(), 5);
        assert_eq!(content.organizations.len(), 2);
        assert!(!content.meta.title.is_empty());
        assert!(content.projects[1].links.demo.is_some());
        assert!(content.projects.iter().all(|p| !p.blurb.is_empty()));
    }

    #[test]
    fn content_load_falls_back_on_bad_files() {
        assert!(SiteContent::load(Path::new("/no/such/site.json")).is_none());

        let bad = std::env::temp_dir().join("glowfolio_bad_content.json");
        std::fs::write(&bad, "{ not json").expect("temp write");
        assert!(SiteContent::load(&bad).is_none());
        let _ = std::fs::remove_file(bad);
    }

    #[test]
    fn partial_content_override_keeps_defaults() {
        let partial = std::env::temp_dir().join("glowfolio_partial_content.json");
        std::fs::write(&partial, r#"{"meta": {"title": "Override"}}"#).expect("temp write");
        let content = SiteContent::load(&partial).expect("partial override parses");
        assert_eq!(content.meta.title, "Override");
        assert_eq!(content.profile.name, SiteContent::default().profile.name);
        assert_eq!(content.projects.len(), 4);
        let _ = std::fs::remove_file(partial);
    }

    #[cfg(feature = "bevy")]
    #[test]
    fn gradient_column_fades_top_to_bottom() {
        let pixels = crate::textures::vertical_fade_pixels(4);
        assert_eq!(pixels.len(), 16);
        assert_eq!(pixels[3], 255);
        assert_eq!(pixels[15], 0);
        let alphas: Vec<u8> = pixels.iter().skip(3).step_by(4).copied().collect();
        assert!(alphas.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[cfg(feature = "bevy")]
    #[test]
    fn grid_tile_draws_hairline_edges() {
        let cell = 4;
        let pixels = crate::textures::grid_tile_pixels(cell);
        let alpha_at = |x: u32, y: u32| pixels[((y * cell + x) * 4 + 3) as usize];
        assert_eq!(alpha_at(0, 0), 10);
        assert_eq!(alpha_at(2, 0), 10);
        assert_eq!(alpha_at(0, 2), 10);
        assert_eq!(alpha_at(2, 2), 0);
    }

    #[cfg(feature = "bevy")]
    #[test]
    fn radial_disc_peaks_at_center() {
        let size = 8;
        let pixels = crate::textures::radial_pixels(size, 2.0);
        let alpha_at = |x: u32, y: u32| pixels[((y * size + x) * 4 + 3) as usize];
        assert!(alpha_at(4, 4) > alpha_at(1, 1));
        assert_eq!(alpha_at(0, 0), 0);
    }
}
