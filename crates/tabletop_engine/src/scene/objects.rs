//! Compound object builders
//!
//! Each builder is a pure function from a world position to the primitive
//! draws that make up the object. Nothing here touches uniforms; the
//! composer turns [`DrawOp`]s into uniform writes and draw calls.

use crate::foundation::math::{Vec2, Vec3};
use crate::render::{MaterialPreset, Primitive};
use crate::scene::layout::{self, tags, PlaneRecipe, SolidRecipe};
use crate::scene::transform::ModelTransform;

/// One primitive draw with its surface state
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    /// Mesh to draw
    pub primitive: Primitive,
    /// Model transform
    pub transform: ModelTransform,
    /// Texture tag
    pub texture: &'static str,
    /// UV tiling
    pub uv_scale: Vec2,
    /// Material preset
    pub material: MaterialPreset,
}

impl DrawOp {
    fn new(
        primitive: Primitive,
        transform: ModelTransform,
        texture: &'static str,
        uv_scale: f32,
        material: MaterialPreset,
    ) -> Self {
        Self {
            primitive,
            transform,
            texture,
            uv_scale: Vec2::repeat(uv_scale),
            material,
        }
    }
}

fn vec3(values: [f32; 3]) -> Vec3 {
    Vec3::from(values)
}

fn plane(recipe: &PlaneRecipe, position: Vec3, texture: &'static str) -> DrawOp {
    let [rx, ry, rz] = recipe.rotation;
    DrawOp {
        primitive: Primitive::Plane,
        transform: ModelTransform::new(vec3(recipe.scale), position).rotated(rx, ry, rz),
        texture,
        uv_scale: Vec2::from(recipe.uv_scale),
        material: MaterialPreset::Wood,
    }
}

fn resting_solid(recipe: &SolidRecipe, center: Vec3) -> ModelTransform {
    let [rx, ry, rz] = recipe.rotation;
    ModelTransform::new(vec3(recipe.scale), center).rotated(rx, ry, rz)
}

/// Wooden floor
pub fn floor() -> Vec<DrawOp> {
    vec![plane(&layout::FLOOR, vec3(layout::FLOOR_POSITION), tags::WOOD)]
}

/// Upright back wall centered at `position`
pub fn backdrop(position: Vec3) -> Vec<DrawOp> {
    vec![plane(&layout::BACKDROP, position, tags::BACKDROP)]
}

/// Thin gold disc resting on the floor at `position`
pub fn coaster(position: Vec3) -> Vec<DrawOp> {
    let half_height = layout::COASTER.scale[1] * 0.5;
    vec![DrawOp::new(
        Primitive::Cylinder,
        resting_solid(&layout::COASTER, position + Vec3::new(0.0, half_height, 0.0)),
        tags::GOLD,
        1.0,
        MaterialPreset::Metal,
    )]
}

/// Mug: rubber base, glass body, rubber handle
pub fn mug(position: Vec3) -> Vec<DrawOp> {
    let recipe = &layout::MUG;
    let base_half = recipe.base_height * 0.5;
    let body_half = recipe.body_height * 0.5;

    let base_center_y = base_half;
    let body_center_y = base_center_y + base_half + body_half - recipe.overlap;
    let body_position = position + Vec3::new(0.0, body_center_y - recipe.body_drop, 0.0);
    let handle_offset = Vec3::new(recipe.body_radius + recipe.handle_reach, recipe.handle_lift, 0.0);

    vec![
        DrawOp::new(
            Primitive::Cylinder,
            ModelTransform::new(
                Vec3::new(recipe.base_radius, recipe.base_height, recipe.base_radius),
                position + Vec3::new(0.0, base_center_y, 0.0),
            ),
            tags::RUBBER,
            2.0,
            MaterialPreset::Rubber,
        ),
        DrawOp::new(
            Primitive::Cylinder,
            ModelTransform::new(
                Vec3::new(recipe.body_radius, recipe.body_height, recipe.body_radius),
                body_position,
            ),
            tags::STAINED_GLASS,
            0.8,
            MaterialPreset::StainedGlass,
        ),
        DrawOp::new(
            Primitive::Torus,
            ModelTransform::new(vec3(recipe.handle_scale), body_position + handle_offset)
                .rotated(0.0, 0.0, 90.0),
            tags::RUBBER,
            1.4,
            MaterialPreset::Rubber,
        ),
    ]
}

/// Gold can with a steel lid
pub fn can(position: Vec3) -> Vec<DrawOp> {
    let recipe = &layout::CAN;
    let body_center_y = recipe.body_height * 0.5;
    let top_center_y = recipe.body_height + recipe.top_height * 0.5 - recipe.overlap;

    vec![
        DrawOp::new(
            Primitive::Cylinder,
            ModelTransform::new(
                Vec3::new(recipe.body_radius, recipe.body_height, recipe.body_radius),
                position + Vec3::new(0.0, body_center_y, 0.0),
            ),
            tags::GOLD,
            1.0,
            MaterialPreset::Metal,
        ),
        DrawOp::new(
            Primitive::Cylinder,
            ModelTransform::new(
                Vec3::new(recipe.top_radius, recipe.top_height, recipe.top_radius),
                position + Vec3::new(0.0, top_center_y, 0.0),
            ),
            tags::STAINLESS_END,
            1.0,
            MaterialPreset::Metal,
        ),
    ]
}

/// Rustic wood block resting on the floor
pub fn wood_block(position: Vec3) -> Vec<DrawOp> {
    let half_height = layout::WOOD_BLOCK.scale[1] * 0.5;
    vec![DrawOp::new(
        Primitive::Box,
        resting_solid(&layout::WOOD_BLOCK, position + Vec3::new(0.0, half_height, 0.0)),
        tags::RUSTIC_WOOD,
        1.0,
        MaterialPreset::Brick,
    )]
}

/// Loose steel ball
pub fn steel_ball() -> Vec<DrawOp> {
    vec![DrawOp::new(
        Primitive::Sphere,
        resting_solid(&layout::STEEL_BALL, vec3(layout::STEEL_BALL_POSITION)),
        tags::STAINLESS,
        1.0,
        MaterialPreset::Metal,
    )]
}

/// The whole scene in draw order
pub fn compose_scene() -> Vec<DrawOp> {
    let mut ops = floor();
    ops.extend(backdrop(vec3(layout::BACKDROP_POSITION)));
    ops.extend(coaster(vec3(layout::COASTER_POSITION)));
    ops.extend(mug(vec3(layout::MUG_POSITION)));
    ops.extend(can(vec3(layout::CAN_POSITION)));
    ops.extend(wood_block(vec3(layout::WOOD_BLOCK_POSITION)));
    ops.extend(steel_ball());
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_mug_stack_offsets() {
        let ops = mug(Vec3::new(-2.0, 0.0, -1.0));
        assert_eq!(
            ops.iter().map(|op| op.primitive).collect::<Vec<_>>(),
            vec![Primitive::Cylinder, Primitive::Cylinder, Primitive::Torus]
        );

        let base = &ops[0].transform;
        let body = &ops[1].transform;
        let handle = &ops[2].transform;

        assert_relative_eq!(base.translation, Vec3::new(-2.0, 0.03, -1.0), epsilon = EPSILON);
        // 0.03 + 0.03 + 0.65 - 0.03 overlap - 0.6 drop
        assert_relative_eq!(body.translation, Vec3::new(-2.0, 0.08, -1.0), epsilon = EPSILON);
        assert_relative_eq!(
            handle.translation - body.translation,
            Vec3::new(0.8, 0.5, 0.0),
            epsilon = EPSILON
        );
        assert_relative_eq!(handle.rotation_degrees, Vec3::new(0.0, 0.0, 90.0));

        assert_eq!(ops[1].texture, tags::STAINED_GLASS);
        assert_eq!(ops[1].material, MaterialPreset::StainedGlass);
        assert_relative_eq!(ops[2].uv_scale, Vec2::new(1.4, 1.4));
    }

    #[test]
    fn test_can_lid_overlaps_body() {
        let ops = can(Vec3::zeros());
        let body = &ops[0].transform;
        let lid = &ops[1].transform;

        let body_top = body.translation.y + body.scale.y * 0.5;
        let lid_bottom = lid.translation.y - lid.scale.y * 0.5;
        assert_relative_eq!(body_top - lid_bottom, layout::CAN.overlap, epsilon = EPSILON);
        assert!(lid.scale.x > body.scale.x);
    }

    #[test]
    fn test_builders_translate_with_position() {
        let here = coaster(Vec3::zeros());
        let there = coaster(Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(
            there[0].transform.translation - here[0].transform.translation,
            Vec3::new(1.0, 2.0, 3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_scene_draw_order_and_surfaces() {
        let ops = compose_scene();
        assert_eq!(ops.len(), 10);

        let textures: Vec<&str> = ops.iter().map(|op| op.texture).collect();
        assert_eq!(
            textures,
            vec![
                tags::WOOD,
                tags::BACKDROP,
                tags::GOLD,
                tags::RUBBER,
                tags::STAINED_GLASS,
                tags::RUBBER,
                tags::GOLD,
                tags::STAINLESS_END,
                tags::RUSTIC_WOOD,
                tags::STAINLESS,
            ]
        );

        // Every texture the scene draws with is one it loads
        for op in &ops {
            assert!(layout::SCENE_TEXTURES.iter().any(|asset| asset.tag == op.texture));
        }
    }

    #[test]
    fn test_backdrop_stands_upright() {
        let ops = backdrop(Vec3::new(0.0, 10.0, -25.0));
        let normal = ops[0].transform.to_matrix().transform_vector(&Vec3::y());
        // The plane's +Y normal now faces the camera along +Z
        assert!(normal.z > 0.99 * normal.norm());
    }
}
