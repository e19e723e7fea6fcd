use crate::assets::Texture;

/// Unlit emissive material: the surface emits the texture color directly,
/// with no lighting interaction, so the texture appears flat in renders.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissiveMaterial {
    pub name: String,
    pub texture: Texture,
}

impl EmissiveMaterial {
    #[must_use]
    pub fn new(texture: Texture) -> Self {
        Self {
            name: texture.stem.clone(),
            texture,
        }
    }
}

/// Index into the scene's material pool.
///
/// Slots are only valid until the next rebind; the pool is cleared between
/// textures so stale materials never accumulate across jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialSlot(pub(crate) usize);
