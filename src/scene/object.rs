use std::path::PathBuf;

use super::material::MaterialSlot;

/// The render target: a staged mesh asset plus its material slot list.
///
/// The object carries a single material slot in practice; slot 0 is
/// replaced on every texture rebind.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Path of the mesh copy inside the dataset root.
    pub mesh_path: PathBuf,
    pub material_slots: Vec<MaterialSlot>,
}

impl SceneObject {
    #[must_use]
    pub fn new(mesh_path: PathBuf) -> Self {
        Self {
            mesh_path,
            material_slots: Vec::new(),
        }
    }
}
