use crate::api::error::OrreryError;
use crate::api::types::BodyId;
use crate::core::rng::Rng;

/// Orbital and visual constants for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParams {
    /// Display / lookup name (e.g. "earth").
    pub name: String,
    /// Body this one orbits. `None` for a root (the sun).
    pub parent: Option<BodyId>,
    /// Uniform scale applied to the shared unit sphere.
    pub visual_scale: f32,
    /// Circular orbit radius around the parent, scene units.
    pub orbital_distance: f32,
    /// Multiplier on elapsed time giving the orbital angle.
    pub angular_speed: f32,
    /// Multiplier on elapsed time giving the self-rotation angle.
    pub spin_speed: f32,
}

impl BodyParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            visual_scale: 1.0,
            orbital_distance: 0.0,
            angular_speed: 0.0,
            spin_speed: 1.0,
        }
    }

    pub fn with_parent(mut self, parent: BodyId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_scale(mut self, visual_scale: f32) -> Self {
        self.visual_scale = visual_scale;
        self
    }

    pub fn with_orbit(mut self, distance: f32, angular_speed: f32) -> Self {
        self.orbital_distance = distance;
        self.angular_speed = angular_speed;
        self
    }

    pub fn with_spin(mut self, spin_speed: f32) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    fn validate(&self, id: BodyId) -> Result<(), OrreryError> {
        let fields = [
            ("visual scale", self.visual_scale),
            ("orbital distance", self.orbital_distance),
            ("angular speed", self.angular_speed),
            ("spin speed", self.spin_speed),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(OrreryError::NonFiniteParameter { name: self.name.clone(), field });
            }
        }
        if self.visual_scale < 0.0 {
            return Err(OrreryError::NegativeParameter {
                name: self.name.clone(),
                field: "visual scale",
            });
        }
        if self.orbital_distance < 0.0 {
            return Err(OrreryError::NegativeParameter {
                name: self.name.clone(),
                field: "orbital distance",
            });
        }
        if let Some(parent) = self.parent {
            // Parents must come first: keeps the hierarchy acyclic and the
            // default traversal order equal to table order.
            if parent >= id {
                return Err(OrreryError::ParentOutOfOrder { child: id, parent });
            }
        }
        Ok(())
    }
}

/// Immutable per-body parameter table.
///
/// Validated once at construction; every later lookup by a `BodyId` from
/// this table is infallible, and an out-of-range id is a caller bug (panics).
#[derive(Debug, Clone)]
pub struct OrbitalParameterTable {
    bodies: Vec<BodyParams>,
    reference: BodyId,
}

impl OrbitalParameterTable {
    /// Build and validate a table. `reference` names the body whose orbital
    /// distance normalizes ring scales.
    pub fn new(bodies: Vec<BodyParams>, reference: BodyId) -> Result<Self, OrreryError> {
        if bodies.is_empty() {
            return Err(OrreryError::EmptyTable);
        }
        for (index, body) in bodies.iter().enumerate() {
            body.validate(BodyId(index as u32))?;
        }
        let reference_distance = bodies
            .get(reference.index())
            .ok_or(OrreryError::UnknownReference(reference))?
            .orbital_distance;
        if !reference_distance.is_finite() || reference_distance <= 0.0 {
            return Err(OrreryError::InvalidReferenceDistance(reference_distance));
        }
        Ok(Self { bodies, reference })
    }

    /// Parameters for `id`. Panics on an id from outside this table.
    pub fn get(&self, id: BodyId) -> &BodyParams {
        assert!(
            id.index() < self.bodies.len(),
            "body {id:?} out of range (table has {} bodies)",
            self.bodies.len()
        );
        &self.bodies[id.index()]
    }

    /// Look a body up by name.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
            .map(|i| BodyId(i as u32))
    }

    pub fn reference(&self) -> BodyId {
        self.reference
    }

    /// Orbital distance of the reference body (always finite and > 0).
    pub fn reference_distance(&self) -> f32 {
        self.bodies[self.reference.index()].orbital_distance
    }

    /// Ring scale for `id`: its orbital distance over the reference distance.
    pub fn orbit_ratio(&self, id: BodyId) -> f32 {
        self.get(id).orbital_distance / self.reference_distance()
    }

    /// Iterate `(id, params)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &BodyParams)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyId(i as u32), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Per-body starting-angle offsets, generated once from a seed.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseOffsets {
    offsets: Vec<f32>,
}

impl PhaseOffsets {
    /// Draw one offset in `[0, max_phase)` per non-root body; roots get 0.
    pub fn generate(
        table: &OrbitalParameterTable,
        seed: u64,
        max_phase: f32,
    ) -> Result<Self, OrreryError> {
        if !max_phase.is_finite() || max_phase < 0.0 {
            return Err(OrreryError::InvalidPhaseBound(max_phase));
        }
        let mut rng = Rng::new(seed);
        let offsets = table
            .iter()
            .map(|(_, body)| if body.is_root() { 0.0 } else { rng.next_below(max_phase) })
            .collect();
        log::debug!("generated {} phase offsets from seed {seed:#x}", table.len());
        Ok(Self { offsets })
    }

    /// All-zero offsets (every body starts at angle 0).
    pub fn zeroed(table: &OrbitalParameterTable) -> Self {
        Self {
            offsets: vec![0.0; table.len()],
        }
    }

    /// Explicit offsets, one per body.
    pub fn from_vec(offsets: Vec<f32>) -> Self {
        Self { offsets }
    }

    /// Offset for `id`. Panics on an out-of-range id.
    pub fn get(&self, id: BodyId) -> f32 {
        self.offsets[id.index()]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> OrbitalParameterTable {
        OrbitalParameterTable::new(
            vec![
                BodyParams::new("sun").with_scale(100.0),
                BodyParams::new("earth").with_parent(BodyId(0)).with_scale(10.0).with_orbit(250.0, 0.3),
                BodyParams::new("moon").with_parent(BodyId(1)).with_scale(2.7).with_orbit(15.0, 4.0),
                BodyParams::new("far").with_parent(BodyId(0)).with_orbit(1250.0, 0.1),
            ],
            BodyId(1),
        )
        .unwrap()
    }

    #[test]
    fn lookup_by_id_and_name() {
        let table = small_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.get(BodyId(2)).name, "moon");
        assert_eq!(table.find("Earth"), Some(BodyId(1)));
        assert_eq!(table.find("pluto"), None);
    }

    #[test]
    fn orbit_ratio_uses_reference() {
        let table = small_table();
        assert_eq!(table.reference_distance(), 250.0);
        assert_eq!(table.orbit_ratio(BodyId(3)), 5.0);
        assert_eq!(table.orbit_ratio(BodyId(1)), 1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_id_panics() {
        small_table().get(BodyId(99));
    }

    #[test]
    fn rejects_zero_reference_distance() {
        let err = OrbitalParameterTable::new(
            vec![BodyParams::new("sun"), BodyParams::new("earth").with_parent(BodyId(0))],
            BodyId(1),
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::InvalidReferenceDistance(d) if d == 0.0));
    }

    #[test]
    fn rejects_root_as_reference() {
        // The sun has distance 0, so it cannot normalize ring scales.
        let err = OrbitalParameterTable::new(vec![BodyParams::new("sun")], BodyId(0)).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidReferenceDistance(_)));
    }

    #[test]
    fn rejects_unknown_reference() {
        let err = OrbitalParameterTable::new(vec![BodyParams::new("sun")], BodyId(5)).unwrap_err();
        assert!(matches!(err, OrreryError::UnknownReference(BodyId(5))));
    }

    #[test]
    fn rejects_empty_table() {
        let err = OrbitalParameterTable::new(Vec::new(), BodyId(0)).unwrap_err();
        assert!(matches!(err, OrreryError::EmptyTable));
    }

    #[test]
    fn rejects_non_finite_and_negative() {
        let err = OrbitalParameterTable::new(
            vec![
                BodyParams::new("sun"),
                BodyParams::new("bad").with_parent(BodyId(0)).with_orbit(f32::NAN, 1.0),
            ],
            BodyId(0),
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::NonFiniteParameter { field: "orbital distance", .. }));

        let err = OrbitalParameterTable::new(
            vec![
                BodyParams::new("sun"),
                BodyParams::new("bad").with_parent(BodyId(0)).with_scale(-1.0).with_orbit(10.0, 1.0),
            ],
            BodyId(1),
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::NegativeParameter { field: "visual scale", .. }));
    }

    #[test]
    fn rejects_parent_after_child() {
        let err = OrbitalParameterTable::new(
            vec![
                BodyParams::new("moon").with_parent(BodyId(1)).with_orbit(15.0, 1.0),
                BodyParams::new("earth").with_orbit(500.0, 0.3),
            ],
            BodyId(1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            OrreryError::ParentOutOfOrder { child: BodyId(0), parent: BodyId(1) }
        ));

        // A body cannot be its own parent either.
        let err = OrbitalParameterTable::new(
            vec![BodyParams::new("loop").with_parent(BodyId(0)).with_orbit(1.0, 1.0)],
            BodyId(0),
        )
        .unwrap_err();
        assert!(matches!(err, OrreryError::ParentOutOfOrder { .. }));
    }

    #[test]
    fn phase_offsets_seeded_and_bounded() {
        let table = small_table();
        let a = PhaseOffsets::generate(&table, 1234, 7.0).unwrap();
        let b = PhaseOffsets::generate(&table, 1234, 7.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), table.len());
        assert_eq!(a.get(BodyId(0)), 0.0, "root offset is fixed at zero");
        for (id, _) in table.iter().skip(1) {
            let phase = a.get(id);
            assert!((0.0..7.0).contains(&phase), "phase {phase} out of range");
        }

        let c = PhaseOffsets::generate(&table, 99, 7.0).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn phase_bound_validated() {
        let table = small_table();
        assert!(PhaseOffsets::generate(&table, 1, -1.0).is_err());
        assert!(PhaseOffsets::generate(&table, 1, f32::INFINITY).is_err());
        let zero = PhaseOffsets::generate(&table, 1, 0.0).unwrap();
        assert_eq!(zero, PhaseOffsets::zeroed(&table));
    }
}
