//! Scene state.
//!
//! The scene is an explicit value: one target object, a material pool, and
//! one camera. The run loop owns it exclusively for the whole run and
//! mutates it in place, the material once per texture and the camera pose
//! once per view. Nothing reaches the scene through globals.

pub mod camera;
pub mod material;
pub mod object;

pub use camera::{Camera, DEFAULT_FOV_DEGREES};
pub use material::{EmissiveMaterial, MaterialSlot};
pub use object::SceneObject;

use crate::assets::Texture;

pub struct Scene {
    pub object: SceneObject,
    pub camera: Camera,
    materials: Vec<EmissiveMaterial>,
}

impl Scene {
    #[must_use]
    pub fn new(object: SceneObject, camera: Camera) -> Self {
        Self {
            object,
            camera,
            materials: Vec::new(),
        }
    }

    /// Drops every existing material and binds a fresh emissive material
    /// for `texture` to the object's sole slot (slot 0 is replaced if
    /// present, appended otherwise).
    ///
    /// Invalidates any [`MaterialSlot`] handed out by a previous rebind.
    pub fn rebind_material(&mut self, texture: &Texture) -> MaterialSlot {
        self.materials.clear();
        self.materials.push(EmissiveMaterial::new(texture.clone()));

        let slot = MaterialSlot(0);
        if let Some(first) = self.object.material_slots.first_mut() {
            *first = slot;
        } else {
            self.object.material_slots.push(slot);
        }
        slot
    }

    #[must_use]
    pub fn material(&self, slot: MaterialSlot) -> Option<&EmissiveMaterial> {
        self.materials.get(slot.0)
    }

    #[must_use]
    pub fn materials(&self) -> &[EmissiveMaterial] {
        &self.materials
    }

    /// The material currently bound to the object's slot 0, if any.
    #[must_use]
    pub fn bound_material(&self) -> Option<&EmissiveMaterial> {
        self.object
            .material_slots
            .first()
            .and_then(|slot| self.materials.get(slot.0))
    }
}
