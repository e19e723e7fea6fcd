//! Dataset asset handling: texture discovery, mesh staging, and the UV
//! data needed for the layout visualization.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, ViewsetError};

/// A named texture image on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub path: PathBuf,
    /// File name including extension; run ordering sorts on this.
    pub file_name: String,
    /// File name without extension; used as a directory segment.
    pub stem: String,
}

impl Texture {
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            stem,
        }
    }
}

/// Every regular file in `dir`, sorted lexicographically by file name.
///
/// An unreadable or empty directory is a configuration error; both are
/// reported before any rendering starts.
pub fn collect_textures(dir: &Path) -> Result<Vec<Texture>> {
    let entries = fs::read_dir(dir).map_err(|source| ViewsetError::TextureDirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut textures = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            textures.push(Texture::from_path(entry.path()));
        }
    }
    textures.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    if textures.is_empty() {
        return Err(ViewsetError::NoTextures(dir.to_path_buf()));
    }
    Ok(textures)
}

/// Copies the input mesh into the dataset root as `obj.<ext>` and returns
/// the staged path.
pub fn stage_mesh(input_obj: &Path, output_dir: &Path) -> Result<PathBuf> {
    if !input_obj.is_file() {
        return Err(ViewsetError::MeshNotFound(input_obj.to_path_buf()));
    }
    let ext = input_obj
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("obj");
    let staged = output_dir.join(format!("obj.{ext}"));
    fs::copy(input_obj, &staged)?;
    Ok(staged)
}

/// Texture coordinates and UV-space triangles of a mesh.
#[derive(Debug, Clone)]
pub struct UvMesh {
    pub uvs: Vec<[f32; 2]>,
    pub triangles: Vec<[u32; 3]>,
}

/// Reads the UV data of an OBJ file, triangulated, across all its models.
pub fn load_uv_mesh(path: &Path) -> Result<UvMesh> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;

    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();
    for model in &models {
        let mesh = &model.mesh;
        if mesh.texcoords.is_empty() {
            continue;
        }
        let base = uvs.len() as u32;
        uvs.extend(mesh.texcoords.chunks_exact(2).map(|uv| [uv[0], uv[1]]));
        triangles.extend(
            mesh.indices
                .chunks_exact(3)
                .map(|tri| [base + tri[0], base + tri[1], base + tri[2]]),
        );
    }

    if uvs.is_empty() {
        return Err(ViewsetError::MissingUvs(path.to_path_buf()));
    }
    Ok(UvMesh { uvs, triangles })
}
