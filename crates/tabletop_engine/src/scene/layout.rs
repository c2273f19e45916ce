//! Scene constants
//!
//! Where each object sits, which files back which texture tags, and the
//! dimensions of every compound object. These are authored values, not
//! derived ones; the builders in [`super::objects`] only read them.

/// Texture tags used by the scene
pub mod tags {
    /// Floor planks
    pub const WOOD: &str = "wood";
    /// Mug body
    pub const STAINED_GLASS: &str = "stainedglass";
    /// Mug base and handle
    pub const RUBBER: &str = "rubber";
    /// Steel ball
    pub const STAINLESS: &str = "stainless";
    /// Can lid
    pub const STAINLESS_END: &str = "stainless_end";
    /// Wood block
    pub const RUSTIC_WOOD: &str = "rusticwood";
    /// Can body and coaster
    pub const GOLD: &str = "gold";
    /// Back wall
    pub const BACKDROP: &str = "backdrop";
}

/// A texture file and the tag it is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAsset {
    /// File name relative to the texture directory
    pub file: &'static str,
    /// Lookup tag
    pub tag: &'static str,
}

/// Every texture the scene loads, in slot order
pub const SCENE_TEXTURES: [TextureAsset; 8] = [
    TextureAsset { file: "wood.jpg", tag: tags::WOOD },
    TextureAsset { file: "stainedglass.jpg", tag: tags::STAINED_GLASS },
    TextureAsset { file: "rubber.jpg", tag: tags::RUBBER },
    TextureAsset { file: "stainless.jpg", tag: tags::STAINLESS },
    TextureAsset { file: "stainless_end.jpg", tag: tags::STAINLESS_END },
    TextureAsset { file: "rusticwood.jpg", tag: tags::RUSTIC_WOOD },
    TextureAsset { file: "gold-seamless-texture.jpg", tag: tags::GOLD },
    TextureAsset { file: "backdrop.jpg", tag: tags::BACKDROP },
];

// Object placements (world space)

/// Center of the floor plane
pub const FLOOR_POSITION: [f32; 3] = [0.0, 0.0, -15.0];
/// Center of the back wall
pub const BACKDROP_POSITION: [f32; 3] = [0.0, 10.0, -25.0];
/// Coaster, directly under the mug
pub const COASTER_POSITION: [f32; 3] = [-2.0, 0.0, -1.0];
/// Mug footprint
pub const MUG_POSITION: [f32; 3] = [-2.0, 0.0, -1.0];
/// Can footprint; sunk so the mesh's visual bottom meets the floor
pub const CAN_POSITION: [f32; 3] = [2.0, -0.55, -1.0];
/// Wood block footprint
pub const WOOD_BLOCK_POSITION: [f32; 3] = [0.0, 0.0, 1.7];
/// Steel ball center
pub const STEEL_BALL_POSITION: [f32; 3] = [-0.8, 0.35, 0.6];

/// Flat surfaces: scale, Euler rotation, UV tiling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRecipe {
    /// Plane scale
    pub scale: [f32; 3],
    /// Rotation in degrees
    pub rotation: [f32; 3],
    /// UV tiling
    pub uv_scale: [f32; 2],
}

/// Floor plane
pub const FLOOR: PlaneRecipe = PlaneRecipe {
    scale: [60.0, 1.0, 60.0],
    rotation: [0.0, 0.0, 0.0],
    uv_scale: [10.0, 10.0],
};

/// Back wall, stood upright
pub const BACKDROP: PlaneRecipe = PlaneRecipe {
    scale: [60.0, 1.0, 16.0],
    rotation: [90.0, 0.0, 0.0],
    uv_scale: [2.0, 2.0],
};

/// Mug: base disc, body cylinder, handle torus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MugRecipe {
    /// Body cylinder height
    pub body_height: f32,
    /// Body cylinder radius
    pub body_radius: f32,
    /// Base disc height
    pub base_height: f32,
    /// Base disc radius, slightly wider than the body
    pub base_radius: f32,
    /// Handle torus scale
    pub handle_scale: [f32; 3],
    /// Handle distance beyond the body radius
    pub handle_reach: f32,
    /// Handle height above the body origin
    pub handle_lift: f32,
    /// Vertical overlap between base and body to hide the seam
    pub overlap: f32,
    /// Amount body and handle are lowered so the mug reads as grounded
    pub body_drop: f32,
}

/// The mug on the coaster
pub const MUG: MugRecipe = MugRecipe {
    body_height: 1.30,
    body_radius: 0.50,
    base_height: 0.06,
    base_radius: 0.54,
    handle_scale: [0.34, 0.34, 0.14],
    handle_reach: 0.30,
    handle_lift: 0.50,
    overlap: 0.03,
    body_drop: 0.6,
};

/// Can: body cylinder with a slightly wider lid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanRecipe {
    /// Body radius
    pub body_radius: f32,
    /// Body height
    pub body_height: f32,
    /// Lid radius
    pub top_radius: f32,
    /// Lid height
    pub top_height: f32,
    /// Vertical overlap between body and lid
    pub overlap: f32,
}

/// The can
pub const CAN: CanRecipe = CanRecipe {
    body_radius: 0.45,
    body_height: 1.20,
    top_radius: 0.46,
    top_height: 0.05,
    overlap: 0.01,
};

/// Single-primitive objects resting on the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidRecipe {
    /// Primitive scale
    pub scale: [f32; 3],
    /// Rotation in degrees
    pub rotation: [f32; 3],
}

/// Coaster disc
pub const COASTER: SolidRecipe = SolidRecipe {
    scale: [0.90, 0.05, 0.90],
    rotation: [0.0, 0.0, 0.0],
};

/// Wood block, turned a little toward the camera
pub const WOOD_BLOCK: SolidRecipe = SolidRecipe {
    scale: [1.2, 0.35, 0.7],
    rotation: [0.0, 25.0, 0.0],
};

/// Steel ball
pub const STEEL_BALL: SolidRecipe = SolidRecipe {
    scale: [0.35, 0.35, 0.35],
    rotation: [0.0, 0.0, 0.0],
};
