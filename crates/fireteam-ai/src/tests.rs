#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use fireteam_core::config::Tuning;
    use fireteam_core::constants::*;
    use fireteam_core::enums::*;
    use fireteam_core::types::Enemy;

    use crate::callouts::{self, Speaker};
    use crate::cover::find_cover;
    use crate::formation::{offset_for, rotated_offset, slot_position};
    use crate::fsm::{can_fire, evaluate, turn_toward, MarineContext};
    use crate::morale;
    use crate::movement::{follow_anchor, retreat_point, step_toward};
    use crate::profiles::{get_profile, move_speed, AnchorRule};
    use crate::revive::{self, ReviveStep};
    use crate::targeting::{hit_chance, nearby_enemies, nearest_enemy, select_target};

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-4, "expected {b:?}, got {a:?}");
    }

    fn context(state: MarineState, health: f32, morale: f32) -> MarineContext {
        MarineContext {
            state,
            health,
            max_health: MARINE_MAX_HEALTH,
            morale,
            has_target: false,
            has_target_area: false,
            cover: None,
            at_slot: true,
        }
    }

    // ---- Formation ----

    #[test]
    fn test_diamond_offsets() {
        assert_vec_eq(offset_for(FormationKind::Diamond, 0), Vec3::new(0.0, 0.0, 3.0));
        assert_vec_eq(offset_for(FormationKind::Diamond, 1), Vec3::new(-2.5, 0.0, 0.0));
        assert_vec_eq(offset_for(FormationKind::Diamond, 2), Vec3::new(2.5, 0.0, 0.0));
        assert_vec_eq(offset_for(FormationKind::Diamond, 3), Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn test_line_offsets_abreast() {
        let xs: Vec<f32> = (0..4).map(|i| offset_for(FormationKind::Line, i).x).collect();
        assert_eq!(xs, vec![-4.0, -1.3, 1.3, 4.0]);
        for i in 0..4 {
            assert_eq!(offset_for(FormationKind::Line, i).z, 0.0);
        }
    }

    #[test]
    fn test_cover_offsets() {
        assert_vec_eq(offset_for(FormationKind::Cover, 0), Vec3::new(-5.0, 0.0, 2.0));
        assert_vec_eq(offset_for(FormationKind::Cover, 3), Vec3::new(3.0, 0.0, -3.0));
    }

    #[test]
    fn test_slot_wraps_around_squad_size() {
        assert_eq!(
            offset_for(FormationKind::Line, 5),
            offset_for(FormationKind::Line, 1)
        );
    }

    #[test]
    fn test_zero_heading_leaves_offsets_unrotated() {
        for slot in 0..SQUAD_SIZE {
            assert_vec_eq(
                rotated_offset(FormationKind::Cover, slot, 0.0),
                offset_for(FormationKind::Cover, slot),
            );
        }
    }

    #[test]
    fn test_heading_rotates_point_slot() {
        // Facing +x, the diamond's point moves from +z to +x.
        let point = rotated_offset(FormationKind::Diamond, 0, FRAC_PI_2);
        assert_vec_eq(point, Vec3::new(3.0, 0.0, 0.0));
        let anchor = Vec3::new(10.0, 0.0, -5.0);
        let pos = slot_position(anchor, PI, FormationKind::Diamond, 0);
        assert_vec_eq(pos, Vec3::new(10.0, 0.0, -8.0));
    }

    // ---- Targeting ----

    #[test]
    fn test_selector_prefers_high_threat() {
        let marine = Vec3::ZERO;
        let enemies = [
            Enemy::new(Vec3::new(0.0, 0.0, -10.0), ThreatLevel::Low, 40.0),
            Enemy::new(Vec3::new(0.0, 0.0, -5.0), ThreatLevel::High, 200.0),
            Enemy::new(Vec3::new(0.0, 0.0, -8.0), ThreatLevel::Medium, 30.0),
        ];
        let pick = select_target(marine, ATTACK_RANGE, &enemies).unwrap();
        assert_eq!(pick.index, 1);
        assert!((pick.score - 135.0).abs() < 1e-4);
        assert!((pick.distance - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_low_health_bonus() {
        let marine = Vec3::ZERO;
        let enemies = [
            Enemy::new(Vec3::new(0.0, 0.0, 10.0), ThreatLevel::Medium, 100.0),
            Enemy::new(Vec3::new(0.0, 0.0, 20.0), ThreatLevel::Medium, 10.0),
        ];
        // 90 + 20 = 110 vs 80 + 20 + 25 = 125
        let pick = select_target(marine, ATTACK_RANGE, &enemies).unwrap();
        assert_eq!(pick.index, 1);
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let marine = Vec3::ZERO;
        let enemies = [
            Enemy::new(Vec3::new(10.0, 0.0, 0.0), ThreatLevel::Low, 100.0),
            Enemy::new(Vec3::new(-10.0, 0.0, 0.0), ThreatLevel::Low, 100.0),
        ];
        assert_eq!(select_target(marine, ATTACK_RANGE, &enemies).unwrap().index, 0);
    }

    #[test]
    fn test_selector_ignores_out_of_range() {
        let marine = Vec3::ZERO;
        let enemies = [
            Enemy::new(Vec3::new(0.0, 0.0, 50.5), ThreatLevel::High, 5.0),
            Enemy::new(Vec3::new(0.0, 0.0, 70.0), ThreatLevel::High, 5.0),
        ];
        assert!(select_target(marine, ATTACK_RANGE, &enemies).is_none());
        assert!(select_target(marine, ATTACK_RANGE, &[]).is_none());

        let edge = [Enemy::new(Vec3::new(0.0, 0.0, 50.0), ThreatLevel::Low, 100.0)];
        assert!(select_target(marine, ATTACK_RANGE, &edge).is_some());
    }

    #[test]
    fn test_selector_skips_nan_positions() {
        let marine = Vec3::ZERO;
        let enemies = [
            Enemy::new(Vec3::new(f32::NAN, 0.0, 0.0), ThreatLevel::High, 5.0),
            Enemy::new(Vec3::new(0.0, 0.0, -12.0), ThreatLevel::Low, 100.0),
        ];
        let pick = select_target(marine, ATTACK_RANGE, &enemies).unwrap();
        assert_eq!(pick.index, 1);
        let (nearest, distance) = nearest_enemy(marine, &enemies).unwrap();
        assert_eq!(nearest.position, Vec3::new(0.0, 0.0, -12.0));
        assert!((distance - 12.0).abs() < 1e-4);
        assert!(select_target(marine, ATTACK_RANGE, &enemies[..1]).is_none());
    }

    #[test]
    fn test_selector_never_exceeds_attack_range() {
        let marine = Vec3::new(3.0, 0.0, 3.0);
        let enemies: Vec<Enemy> = (0..40)
            .map(|i| {
                let angle = i as f32 * 0.7;
                let dist = i as f32 * 2.5;
                Enemy::new(
                    marine + Vec3::new(angle.sin() * dist, 0.0, angle.cos() * dist),
                    ThreatLevel::High,
                    10.0,
                )
            })
            .collect();
        let pick = select_target(marine, ATTACK_RANGE, &enemies).unwrap();
        assert!(pick.distance <= ATTACK_RANGE);
        let far_only: Vec<Enemy> = enemies
            .iter()
            .filter(|e| e.position.distance(marine) > ATTACK_RANGE)
            .copied()
            .collect();
        assert!(select_target(marine, ATTACK_RANGE, &far_only).is_none());
    }

    #[test]
    fn test_nearby_prefilter_uses_one_and_a_half_range() {
        let enemies = [
            Enemy::new(Vec3::new(0.0, 0.0, 60.0), ThreatLevel::Low, 100.0),
            Enemy::new(Vec3::new(0.0, 0.0, 75.0), ThreatLevel::Low, 100.0),
            Enemy::new(Vec3::new(0.0, 0.0, 76.0), ThreatLevel::Low, 100.0),
        ];
        assert_eq!(nearby_enemies(Vec3::ZERO, ATTACK_RANGE, &enemies).len(), 2);
        let (nearest, dist) = nearest_enemy(Vec3::ZERO, &enemies).unwrap();
        assert_eq!(nearest.position.z, 60.0);
        assert!((dist - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_chance_formula() {
        // Point blank, full morale: 1.0 * 0.9
        assert!((hit_chance(0.0, ATTACK_RANGE, 1.0) - 0.9).abs() < 1e-5);
        // Max range, zero morale: 0.7 * 0.7
        assert!((hit_chance(50.0, ATTACK_RANGE, 0.0) - 0.49).abs() < 1e-5);
        // Half range, half morale: 0.85 * 0.8
        assert!((hit_chance(25.0, ATTACK_RANGE, 0.5) - 0.68).abs() < 1e-5);
    }

    // ---- Cover ----

    #[test]
    fn test_cover_picks_nearest_within_radius() {
        let candidates = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 6.0),
            Vec3::new(40.0, 0.0, 0.0),
        ];
        assert_eq!(
            find_cover(Vec3::ZERO, &candidates, COVER_SEEK_RADIUS),
            Some(Vec3::new(0.0, 0.0, 6.0))
        );
    }

    #[test]
    fn test_cover_none_when_all_beyond_radius() {
        let candidates = [Vec3::new(15.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -30.0)];
        assert_eq!(find_cover(Vec3::ZERO, &candidates, COVER_SEEK_RADIUS), None);
        assert_eq!(find_cover(Vec3::ZERO, &[], COVER_SEEK_RADIUS), None);
    }

    // ---- Morale ----

    #[test]
    fn test_morale_drop_and_floor() {
        assert!((morale::after_marine_downed(1.0, MORALE_LOSS_PER_DOWN) - 0.8).abs() < 1e-6);
        assert_eq!(morale::after_marine_downed(0.1, MORALE_LOSS_PER_DOWN), 0.0);
    }

    #[test]
    fn test_morale_recovery_caps_and_needs_survivors() {
        let recovered = morale::recover(0.5, MORALE_RECOVERY_RATE, 10.0, 2);
        assert!((recovered - 0.7).abs() < 1e-5);
        assert_eq!(morale::recover(0.99, MORALE_RECOVERY_RATE, 10.0, 4), 1.0);
        assert_eq!(morale::recover(0.4, MORALE_RECOVERY_RATE, 10.0, 0), 0.4);
    }

    // ---- Revive ----

    #[test]
    fn test_revive_crosses_threshold() {
        assert_eq!(revive::advance(2.9, 0.2, REVIVE_TIME), ReviveStep::Completed);
        match revive::advance(1.0, 0.5, REVIVE_TIME) {
            ReviveStep::InProgress { progress } => assert!((progress - 1.5).abs() < 1e-6),
            other => panic!("expected progress, got {other:?}"),
        }
    }

    #[test]
    fn test_revive_transitions() {
        assert_eq!(revive::begin(MarineState::Downed), Some(MarineState::Reviving));
        assert_eq!(revive::begin(MarineState::Reviving), Some(MarineState::Reviving));
        assert_eq!(revive::begin(MarineState::Combat), None);
        assert_eq!(revive::cancel(MarineState::Reviving), Some(MarineState::Downed));
        assert_eq!(revive::cancel(MarineState::Downed), None);
        assert_eq!(revive::revived_health(MARINE_MAX_HEALTH), 50.0);
    }

    #[test]
    fn test_revive_proximity() {
        let marine = Vec3::new(0.0, 0.0, 0.0);
        assert!(revive::is_revivable(
            MarineState::Downed,
            Vec3::new(4.0, 0.0, 0.0),
            marine,
            REVIVE_PROXIMITY
        ));
        assert!(!revive::is_revivable(
            MarineState::Downed,
            Vec3::new(4.1, 0.0, 0.0),
            marine,
            REVIVE_PROXIMITY
        ));
        assert!(!revive::is_revivable(
            MarineState::Idle,
            Vec3::new(1.0, 0.0, 0.0),
            marine,
            REVIVE_PROXIMITY
        ));
    }

    // ---- Callouts ----

    #[test]
    fn test_overwhelmed_beats_threat_high() {
        assert_eq!(
            callouts::priority_category(10, 0.3, ThreatLevel::High),
            CalloutCategory::Overwhelmed
        );
        assert_eq!(
            callouts::priority_category(10, 0.6, ThreatLevel::High),
            CalloutCategory::ThreatHigh
        );
        assert_eq!(
            callouts::priority_category(8, 0.3, ThreatLevel::Medium),
            CalloutCategory::Contact
        );
    }

    #[test]
    fn test_cooldown_gate() {
        assert!(callouts::cooldown_ready(8.0, 0.0, CALLOUT_COOLDOWN));
        assert!(!callouts::cooldown_ready(7.9, 0.0, CALLOUT_COOLDOWN));
        assert!(callouts::cooldown_ready(0.0, -CALLOUT_COOLDOWN, CALLOUT_COOLDOWN));
    }

    #[test]
    fn test_sender_envelopes() {
        assert_eq!(Speaker::Marine("Hicks").sender(), "Pvt. Hicks");
        assert_eq!(Speaker::Lead("BRAVO").sender(), "BRAVO Lead");
    }

    #[test]
    fn test_man_down_substitutes_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let callout = callouts::compose(
                &mut rng,
                CalloutCategory::ManDown,
                Speaker::Lead("ALPHA"),
                Some("Vasquez"),
            );
            assert!(callout.text.contains("Vasquez"), "got {}", callout.text);
            assert!(!callout.text.contains(callouts::NAME_PLACEHOLDER));
            assert_eq!(callout.sender, "ALPHA Lead");
        }
    }

    #[test]
    fn test_compose_draws_from_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let pool = callouts::lines(CalloutCategory::Contact);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let callout = callouts::compose(
                &mut rng,
                CalloutCategory::Contact,
                Speaker::Marine("Drake"),
                None,
            );
            assert!(pool.contains(&callout.text.as_str()));
            seen.insert(callout.text);
        }
        assert_eq!(seen.len(), pool.len(), "uniform draw should hit every line");
    }

    // ---- Marine FSM ----

    #[test]
    fn test_zero_health_downs_marine() {
        let update = evaluate(&context(MarineState::Combat, 0.0, 1.0));
        assert!(update.downed);
        assert!(update.state_changed);
        assert_eq!(update.new_state, MarineState::Downed);
    }

    #[test]
    fn test_downed_and_reviving_are_sticky() {
        for state in [MarineState::Downed, MarineState::Reviving] {
            let mut ctx = context(state, 0.0, 1.0);
            ctx.has_target = true;
            let update = evaluate(&ctx);
            assert_eq!(update.new_state, state);
            assert!(!update.downed);
            assert!(!update.state_changed);
        }
    }

    #[test]
    fn test_low_health_takes_cover_when_available() {
        let mut ctx = context(MarineState::Combat, 20.0, 0.5);
        ctx.has_target = true;
        ctx.cover = Some(Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(evaluate(&ctx).new_state, MarineState::TakingCover);

        // No cover in reach: keep fighting.
        ctx.cover = None;
        assert_eq!(evaluate(&ctx).new_state, MarineState::Combat);
    }

    #[test]
    fn test_confident_marine_suppresses() {
        let mut ctx = context(MarineState::Combat, 90.0, 0.9);
        ctx.has_target = true;
        ctx.has_target_area = true;
        assert_eq!(evaluate(&ctx).new_state, MarineState::Suppressing);

        // Shaken squad fights normally.
        ctx.morale = 0.6;
        assert_eq!(evaluate(&ctx).new_state, MarineState::Combat);
    }

    #[test]
    fn test_no_target_moves_or_idles() {
        let mut ctx = context(MarineState::Combat, 100.0, 1.0);
        ctx.at_slot = false;
        assert_eq!(evaluate(&ctx).new_state, MarineState::Moving);
        ctx.at_slot = true;
        assert_eq!(evaluate(&ctx).new_state, MarineState::Idle);
    }

    #[test]
    fn test_fire_gate() {
        assert!(can_fire(MarineState::Combat, 0.0, true));
        assert!(!can_fire(MarineState::Combat, 0.1, true));
        assert!(!can_fire(MarineState::Combat, 0.0, false));
        assert!(!can_fire(MarineState::Suppressing, 0.0, true));
    }

    #[test]
    fn test_turn_toward_is_gradual() {
        let yaw = turn_toward(0.0, 1.0, 0.1, ROTATION_SPEED);
        assert!((yaw - 0.6).abs() < 1e-5);
        // Large steps clamp to a full snap.
        assert!((turn_toward(0.0, 1.0, 1.0, ROTATION_SPEED) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_turn_toward_takes_short_way() {
        // From just below +PI to just above -PI: turn through PI, not through 0.
        let yaw = turn_toward(3.0, -3.0, 0.05, ROTATION_SPEED);
        assert!(yaw > 3.0 || yaw < -3.0, "got {yaw}");
    }

    // ---- Movement ----

    #[test]
    fn test_follow_anchor_staggers_squads() {
        let player = Vec3::new(0.0, 0.0, 0.0);
        assert_vec_eq(follow_anchor(player, 0, FOLLOW_DISTANCE), Vec3::new(0.0, 0.0, 8.0));
        assert_vec_eq(follow_anchor(player, 1, FOLLOW_DISTANCE), Vec3::new(8.0, 0.0, 11.0));
        let third = follow_anchor(player, 2, FOLLOW_DISTANCE);
        assert!(third.x.abs() < 1e-4);
        assert!((third.z - 14.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_toward_clamps_and_snaps() {
        let step = step_toward(Vec3::ZERO, Vec3::new(0.0, 0.0, -200.0), 9.0, 0.1, 1.0);
        assert_vec_eq(step.position, Vec3::new(0.0, 0.0, -0.9));
        assert!(!step.arrived);

        let near = step_toward(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.5), 90.0, 1.0, 1.0);
        assert_vec_eq(near.position, Vec3::new(0.0, 0.0, -1.5));

        let snap = step_toward(Vec3::ZERO, Vec3::new(0.3, 0.0, 0.0), 6.0, 0.1, 0.5);
        assert!(snap.arrived);
        assert_vec_eq(snap.position, Vec3::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn test_retreat_point_is_behind() {
        assert_vec_eq(
            retreat_point(Vec3::new(1.0, 0.0, -50.0)),
            Vec3::new(1.0, 0.0, -30.0),
        );
    }

    #[test]
    fn test_order_profiles() {
        let tuning = Tuning::default();
        let follow = get_profile(OrderKind::FollowPlayer, &tuning);
        assert_eq!(follow.anchor, AnchorRule::FollowPlayer);
        assert_eq!(follow.speed, 6.0);
        assert_eq!(get_profile(OrderKind::HoldPosition, &tuning).speed, 3.0);
        assert_eq!(get_profile(OrderKind::Advance, &tuning).speed, 9.0);
        let hold = get_profile(OrderKind::HoldPosition, &tuning);
        assert_eq!(move_speed(&hold, 10.0, &tuning), 3.0);
        assert_eq!(move_speed(&hold, 30.0, &tuning), 9.0);
    }
}
