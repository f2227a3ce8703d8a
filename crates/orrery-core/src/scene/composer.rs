use glam::Mat4;

use crate::api::types::BodyId;
use crate::bodies::hierarchy::BodyHierarchy;
use crate::bodies::table::{OrbitalParameterTable, PhaseOffsets};
use crate::scene::orbit::{compose_body, placement, spin_scale};
use crate::scene::stack::MatrixStack;

/// Model-view matrix for one body draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDraw {
    pub body: BodyId,
    pub model_view: Mat4,
}

/// Composes body transforms for one frame by walking the hierarchy.
///
/// Holds only borrowed, read-only inputs: composing never mutates state, so
/// repeated calls with the same view and time return identical output.
pub struct SceneComposer<'a> {
    table: &'a OrbitalParameterTable,
    phases: &'a PhaseOffsets,
    hierarchy: &'a BodyHierarchy,
}

impl<'a> SceneComposer<'a> {
    pub fn new(
        table: &'a OrbitalParameterTable,
        phases: &'a PhaseOffsets,
        hierarchy: &'a BodyHierarchy,
    ) -> Self {
        assert_eq!(
            phases.len(),
            table.len(),
            "phase offsets ({}) do not cover the table ({})",
            phases.len(),
            table.len()
        );
        Self { table, phases, hierarchy }
    }

    /// Body draws in traversal order, with `view` as the composition root.
    pub fn compose(&self, view: Mat4, t: f32) -> Vec<BodyDraw> {
        let mut draws = Vec::with_capacity(self.table.len());
        for &root in self.hierarchy.roots() {
            self.compose_subtree(root, view, t, &mut draws);
        }
        draws
    }

    fn compose_subtree(&self, id: BodyId, parent: Mat4, t: f32, draws: &mut Vec<BodyDraw>) {
        let frames = compose_body(parent, self.table.get(id), self.phases.get(id), t);
        draws.push(BodyDraw { body: id, model_view: frames.own });
        for &child in self.hierarchy.children(id) {
            self.compose_subtree(child, frames.retained, t, draws);
        }
    }

    /// The retained (position-only) frame of `id` under `view`.
    ///
    /// Walks the ancestor chain directly, so any body can be evaluated on its own.
    pub fn retained_frame(&self, id: BodyId, view: Mat4, t: f32) -> Mat4 {
        let mut chain = self.hierarchy.ancestors(id);
        chain.reverse();
        chain.push(id);
        chain.into_iter().fold(view, |parent, body| {
            compose_body(parent, self.table.get(body), self.phases.get(body), t).retained
        })
    }

    /// Same traversal expressed on an explicit matrix stack.
    ///
    /// `stack` must hold the view matrix as its only frame; it is left that way.
    /// Each body opens a retained scope (placement) and, inside it, a
    /// transient scope (spin and scale) for its own draw; children run in the
    /// retained scope after the transient one closes.
    pub fn compose_on_stack(&self, stack: &mut MatrixStack, t: f32) -> Vec<BodyDraw> {
        let entry_depth = stack.depth();
        assert!(entry_depth > 0, "compose_on_stack needs the view matrix pushed first");

        let mut draws = Vec::with_capacity(self.table.len());
        for &root in self.hierarchy.roots() {
            self.stack_subtree(root, stack, t, &mut draws);
        }

        debug_assert_eq!(stack.depth(), entry_depth);
        draws
    }

    fn stack_subtree(&self, id: BodyId, stack: &mut MatrixStack, t: f32, draws: &mut Vec<BodyDraw>) {
        let body = self.table.get(id);
        let phase = self.phases.get(id);

        stack.scope(|stack| {
            if !body.is_root() {
                stack.multiply_top(placement(body, phase, t));
            }
            stack.scope(|stack| {
                stack.multiply_top(spin_scale(body, t));
                draws.push(BodyDraw { body: id, model_view: stack.top() });
            });
            for &child in self.hierarchy.children(id) {
                self.stack_subtree(child, stack, t, draws);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::catalog::{self, EARTH, MOON, SUN};
    use crate::bodies::table::BodyParams;
    use glam::Vec3;

    struct Fixture {
        table: OrbitalParameterTable,
        phases: PhaseOffsets,
        hierarchy: BodyHierarchy,
    }

    impl Fixture {
        fn solar(seed: u64) -> Self {
            let table = catalog::solar_system().unwrap();
            let phases = PhaseOffsets::generate(&table, seed, 7.0).unwrap();
            let hierarchy = BodyHierarchy::from_table(&table);
            Self { table, phases, hierarchy }
        }

        fn composer(&self) -> SceneComposer<'_> {
            SceneComposer::new(&self.table, &self.phases, &self.hierarchy)
        }
    }

    fn sample_view() -> Mat4 {
        Mat4::look_at_rh(Vec3::new(30.0, 120.0, 200.0), Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn emits_one_draw_per_body_in_traversal_order() {
        let fx = Fixture::solar(7);
        let draws = fx.composer().compose(sample_view(), 3.5);
        let order: Vec<u32> = draws.iter().map(|d| d.body.0).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn composing_twice_is_bit_identical() {
        let fx = Fixture::solar(11);
        let composer = fx.composer();
        let a = composer.compose(sample_view(), 42.25);
        let b = composer.compose(sample_view(), 42.25);
        assert_eq!(a, b);
        let bits = |d: &[BodyDraw]| -> Vec<u32> {
            d.iter().flat_map(|d| d.model_view.to_cols_array()).map(f32::to_bits).collect()
        };
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn stack_path_matches_stackless_path() {
        let fx = Fixture::solar(3);
        let composer = fx.composer();
        for &t in &[0.0, 1.5, 1000.0] {
            let mut stack = MatrixStack::new(sample_view());
            let on_stack = composer.compose_on_stack(&mut stack, t);
            assert_eq!(on_stack, composer.compose(sample_view(), t), "t = {t}");
        }
    }

    #[test]
    fn stack_is_balanced_after_traversal() {
        let fx = Fixture::solar(5);
        let mut stack = MatrixStack::empty();
        stack.push(sample_view());
        let pushes_before = stack.push_count();

        fx.composer().compose_on_stack(&mut stack, 12.0);

        assert_eq!(stack.depth(), 1, "only the view matrix remains");
        assert_eq!(stack.top(), sample_view());
        let pushes = stack.push_count() - pushes_before;
        assert_eq!(pushes, stack.pop_count(), "pushes and pops balance per frame");
        // Two scopes per body.
        assert_eq!(pushes, 2 * fx.table.len() as u64);
    }

    #[test]
    fn sun_is_view_times_spin_scale() {
        let fx = Fixture::solar(1);
        let t = 2.0;
        let draws = fx.composer().compose(sample_view(), t);
        let sun = fx.table.get(SUN);
        assert_eq!(draws[0].body, SUN);
        assert_eq!(draws[0].model_view, sample_view() * spin_scale(sun, t));
    }

    #[test]
    fn planets_start_on_positive_z_without_phase() {
        let fx = Fixture::solar(1);
        let phases = PhaseOffsets::zeroed(&fx.table);
        let composer = SceneComposer::new(&fx.table, &phases, &fx.hierarchy);
        for (id, body) in fx.table.iter().filter(|(_, b)| b.parent == Some(SUN)) {
            let retained = composer.retained_frame(id, Mat4::IDENTITY, 0.0);
            assert_eq!(
                retained.w_axis.truncate(),
                Vec3::new(0.0, 0.0, body.orbital_distance),
                "{}",
                body.name
            );
        }
    }

    #[test]
    fn moon_inherits_earth_position() {
        let fx = Fixture::solar(21);
        let composer = fx.composer();
        let view = sample_view();
        let t = 17.3;

        let draws = composer.compose(view, t);
        let moon_mv = draws.iter().find(|d| d.body == MOON).unwrap().model_view;

        let moon = fx.table.get(MOON);
        let earth_retained = composer.retained_frame(EARTH, view, t);
        let expected = earth_retained * placement(moon, fx.phases.get(MOON), t) * spin_scale(moon, t);
        assert_eq!(moon_mv, expected, "moon composes on earth's retained frame");
    }

    #[test]
    fn moon_orbits_earth_at_its_distance() {
        let fx = Fixture::solar(8);
        let composer = fx.composer();
        for &t in &[0.0, 4.0, 250.0] {
            let earth = composer.retained_frame(EARTH, Mat4::IDENTITY, t).w_axis.truncate();
            let moon = composer.retained_frame(MOON, Mat4::IDENTITY, t).w_axis.truncate();
            assert!((moon.distance(earth) - catalog::MOON_DISTANCE).abs() < 1e-2, "t = {t}");
        }
    }

    #[test]
    fn known_orbit_example() {
        let table = OrbitalParameterTable::new(
            vec![
                BodyParams::new("sun"),
                BodyParams::new("planet").with_parent(BodyId(0)).with_orbit(250.0, 0.3),
            ],
            BodyId(1),
        )
        .unwrap();
        let phases = PhaseOffsets::zeroed(&table);
        let hierarchy = BodyHierarchy::from_table(&table);
        let composer = SceneComposer::new(&table, &phases, &hierarchy);

        let p = composer.retained_frame(BodyId(1), Mat4::IDENTITY, 1.0).w_axis;
        assert!((p.x - 73.88).abs() < 0.05);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 238.83).abs() < 0.05);
    }

    #[test]
    #[should_panic(expected = "do not cover the table")]
    fn mismatched_phases_rejected() {
        let fx = Fixture::solar(1);
        let short = PhaseOffsets::from_vec(vec![0.0; 3]);
        SceneComposer::new(&fx.table, &short, &fx.hierarchy);
    }
}
