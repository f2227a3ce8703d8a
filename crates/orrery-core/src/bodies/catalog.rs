//! Default solar-system catalogue.
//!
//! Physical radii, distances and periods are real; scene values are derived
//! from their ratios to Earth, which is pinned to a hand-tuned size, orbit
//! radius and angular speed. The sun's size and the moon's orbit radius are
//! tuned directly (true ratios would hide the moon inside Earth).

use crate::api::error::OrreryError;
use crate::api::types::BodyId;
use crate::bodies::table::{BodyParams, OrbitalParameterTable};

/// Body index constants (table order).
pub const SUN: BodyId = BodyId(0);
pub const EARTH: BodyId = BodyId(1);
pub const MOON: BodyId = BodyId(2);
pub const MERCURY: BodyId = BodyId(3);
pub const VENUS: BodyId = BodyId(4);
pub const MARS: BodyId = BodyId(5);
pub const JUPITER: BodyId = BodyId(6);
pub const SATURN: BodyId = BodyId(7);
pub const URANUS: BodyId = BodyId(8);
pub const NEPTUNE: BodyId = BodyId(9);
pub const BODY_COUNT: usize = 10;

// ── Earth (reference) ────────────────────────────────────────────────

pub const EARTH_RADIUS_KM: f32 = 6378.137;
pub const EARTH_ORBIT_KM: f32 = 150_196_428.0;
pub const EARTH_YEAR_DAYS: f32 = 365.0;
/// Scene-unit sphere scale for Earth.
pub const EARTH_SIZE: f32 = 10.0;
/// Scene-unit orbit radius for Earth (also the ring mesh radius).
pub const EARTH_DISTANCE: f32 = 500.0;
/// Earth's angular speed multiplier.
pub const EARTH_ANGULAR_SPEED: f32 = 0.3;

// ── Tuned values ─────────────────────────────────────────────────────

pub const SUN_SIZE: f32 = 100.0;
pub const MOON_DISTANCE: f32 = 15.0;

/// Self-rotation multiplier shared by every body.
pub const SPIN_SPEED: f32 = 1.0;

/// How a catalogue value is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Already in scene units.
    Scene(f32),
    /// Physical kilometres, scaled by the Earth ratio.
    Km(f32),
}

/// One catalogue row.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub parent: Option<&'static str>,
    pub size: Measure,
    pub distance: Measure,
    /// Orbital period in Earth days. `None` for roots.
    pub period_days: Option<f32>,
}

/// Rows in table order. Parents always precede their children.
pub const CATALOG: [CatalogEntry; BODY_COUNT] = [
    CatalogEntry { name: "sun",     parent: None,          size: Measure::Scene(SUN_SIZE),   distance: Measure::Scene(0.0),             period_days: None },
    CatalogEntry { name: "earth",   parent: Some("sun"),   size: Measure::Km(EARTH_RADIUS_KM), distance: Measure::Km(EARTH_ORBIT_KM),  period_days: Some(EARTH_YEAR_DAYS) },
    CatalogEntry { name: "moon",    parent: Some("earth"), size: Measure::Km(1738.1),     distance: Measure::Scene(MOON_DISTANCE),     period_days: Some(27.3) },
    CatalogEntry { name: "mercury", parent: Some("sun"),   size: Measure::Km(2439.137),   distance: Measure::Km(58_000_000.0),         period_days: Some(88.0) },
    CatalogEntry { name: "venus",   parent: Some("sun"),   size: Measure::Km(6051.137),   distance: Measure::Km(108_000_000.0),        period_days: Some(225.0) },
    CatalogEntry { name: "mars",    parent: Some("sun"),   size: Measure::Km(3396.2),     distance: Measure::Km(228_000_000.0),        period_days: Some(687.0) },
    CatalogEntry { name: "jupiter", parent: Some("sun"),   size: Measure::Km(69911.0),    distance: Measure::Km(778_000_000.0),        period_days: Some(4333.0) },
    CatalogEntry { name: "saturn",  parent: Some("sun"),   size: Measure::Km(60250.0),    distance: Measure::Km(1_400_000_000.0),      period_days: Some(10756.0) },
    CatalogEntry { name: "uranus",  parent: Some("sun"),   size: Measure::Km(25559.0),    distance: Measure::Km(2_900_000_000.0),      period_days: Some(30687.0) },
    CatalogEntry { name: "neptune", parent: Some("sun"),   size: Measure::Km(24764.0),    distance: Measure::Km(4_500_000_000.0),      period_days: Some(60190.0) },
];

fn scene_size(size: Measure) -> f32 {
    match size {
        Measure::Scene(v) => v,
        Measure::Km(km) => km * (EARTH_SIZE / EARTH_RADIUS_KM),
    }
}

fn scene_distance(distance: Measure) -> f32 {
    match distance {
        Measure::Scene(v) => v,
        Measure::Km(km) => km * (EARTH_DISTANCE / EARTH_ORBIT_KM),
    }
}

/// Angular speed from the period ratio to Earth; shorter years spin faster.
fn angular_speed(period_days: Option<f32>) -> f32 {
    match period_days {
        Some(days) => EARTH_ANGULAR_SPEED * (EARTH_YEAR_DAYS / days),
        None => 0.0,
    }
}

/// Convert catalogue rows into validated parameters, normalizing rings to `reference`.
pub fn build_table(entries: &[CatalogEntry], reference: &str) -> Result<OrbitalParameterTable, OrreryError> {
    let index_of = |name: &str| entries.iter().position(|e| e.name == name);

    let mut bodies = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut params = BodyParams::new(entry.name)
            .with_scale(scene_size(entry.size))
            .with_orbit(scene_distance(entry.distance), angular_speed(entry.period_days))
            .with_spin(SPIN_SPEED);
        if let Some(parent) = entry.parent {
            let index = index_of(parent).ok_or_else(|| OrreryError::UnknownParent(entry.name.to_string()))?;
            params = params.with_parent(BodyId(index as u32));
        }
        bodies.push(params);
    }

    let reference = index_of(reference).ok_or_else(|| OrreryError::UnknownName(reference.to_string()))?;
    OrbitalParameterTable::new(bodies, BodyId(reference as u32))
}

/// The default ten-body solar system.
pub fn solar_system() -> Result<OrbitalParameterTable, OrreryError> {
    build_table(&CATALOG, "earth")
}
