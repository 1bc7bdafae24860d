//! Formation geometry: (formation, slot) to local offset from the squad anchor.
//!
//! Local space has +z pointing ahead of the squad. Offsets are rotated by the
//! squad heading before being added to the anchor.

use glam::{Quat, Vec3};

use fireteam_core::constants::SQUAD_SIZE;
use fireteam_core::enums::FormationKind;

const DIAMOND: [Vec3; SQUAD_SIZE] = [
    Vec3::new(0.0, 0.0, 3.0),  // point
    Vec3::new(-2.5, 0.0, 0.0), // left flank
    Vec3::new(2.5, 0.0, 0.0),  // right flank
    Vec3::new(0.0, 0.0, -3.0), // rear
];

const LINE: [Vec3; SQUAD_SIZE] = [
    Vec3::new(-4.0, 0.0, 0.0),
    Vec3::new(-1.3, 0.0, 0.0),
    Vec3::new(1.3, 0.0, 0.0),
    Vec3::new(4.0, 0.0, 0.0),
];

const COVER: [Vec3; SQUAD_SIZE] = [
    Vec3::new(-5.0, 0.0, 2.0),
    Vec3::new(5.0, 0.0, 2.0),
    Vec3::new(-3.0, 0.0, -3.0),
    Vec3::new(3.0, 0.0, -3.0),
];

/// Local offset for a slot. Slots wrap around the squad size.
pub fn offset_for(formation: FormationKind, slot: usize) -> Vec3 {
    let table = match formation {
        FormationKind::Diamond => &DIAMOND,
        FormationKind::Line => &LINE,
        FormationKind::Cover => &COVER,
    };
    table[slot % SQUAD_SIZE]
}

/// Offset rotated into world space by the squad heading (yaw, 0 = +z).
pub fn rotated_offset(formation: FormationKind, slot: usize, heading: f32) -> Vec3 {
    Quat::from_rotation_y(heading) * offset_for(formation, slot)
}

/// World position of a slot.
pub fn slot_position(anchor: Vec3, heading: f32, formation: FormationKind, slot: usize) -> Vec3 {
    anchor + rotated_offset(formation, slot, heading)
}
