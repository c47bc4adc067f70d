//! Resource cache for images, textures and fonts.
//!
//! Resources are loaded from the filesystem into name-keyed maps. The key is
//! the file basename without its final extension, so `sprites/apple.png`
//! and `apple.png` both resolve to `apple`, and `arial.ttf` and `arial.otf`
//! collide on `arial`. One shared derivation function keeps path-based and
//! name-based operations agreeing on identity.
//!
//! Lookups never fail: a miss returns a shared placeholder together with a
//! `false` found-flag, so rendering code keeps working while the miss stays
//! observable.

use std::path::Path;

use log::{info, warn};
use raylib::prelude::{Font, Image, Texture2D};
use rustc_hash::FxHashMap;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::window::Window;

/// Recognized image file extensions, lowercase, without the dot.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg"];
/// Recognized font file extensions, lowercase, without the dot.
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Image,
    Font,
}

/// Derive the logical resource name from a path: the file basename with the
/// final extension stripped. This is the single identity authority for the
/// whole cache.
fn resource_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Classify a path by extension. `None` means the file is not a resource.
fn extension_kind(path: &Path) -> Option<ResourceKind> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(ResourceKind::Image)
    } else if FONT_EXTENSIONS.contains(&ext.as_str()) {
        Some(ResourceKind::Font)
    } else {
        None
    }
}

/// A bare name has no directory component and no extension. Such input can
/// never name a resource file on disk, so unload treats a miss as a no-op
/// instead of a missing path.
fn is_bare_name(input: &str) -> bool {
    let path = Path::new(input);
    path.extension().is_none()
        && path
            .parent()
            .is_none_or(|parent| parent.as_os_str().is_empty())
}

/// Resolve a path that must exist on disk into its name and lowercase
/// extension.
fn split_resource_path(path: &Path) -> Result<(String, String)> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    Ok((resource_name(path), ext))
}

/// Name-keyed stores for decoded images, uploaded textures and loaded fonts.
///
/// Owned by exactly one [`Engine`]; all native handles are RAII wrappers, so
/// removing a map entry releases the underlying resource. The field order
/// matters: the maps and placeholders must drop before the window handle
/// does, and [`Engine`] declares its fields accordingly.
///
/// [`Engine`]: crate::Engine
pub struct Resources {
    images: FxHashMap<String, Image>,
    textures: FxHashMap<String, Texture2D>,
    fonts: FxHashMap<String, Font>,

    default_image: Image,
    default_texture: Texture2D,
    default_font: Font,
}

impl Resources {
    /// Build an empty cache and its placeholders. Needs the window open for
    /// the placeholder texture upload.
    pub(crate) fn new(window: &mut Window) -> Self {
        let default_image = window.make_missing_image();
        let default_texture = window
            .load_texture_from_image(&default_image)
            .expect("failed to upload the placeholder texture");

        Self {
            images: FxHashMap::default(),
            textures: FxHashMap::default(),
            fonts: FxHashMap::default(),
            default_image,
            default_texture,
            default_font: window.default_font(),
        }
    }

    /// Decode an image file and store it under its derived name.
    ///
    /// Loading a name that is already present is a no-op, not an error, so
    /// repeated loads of the same logical resource are idempotent.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (name, ext) = split_resource_path(path)?;

        if self.images.contains_key(&name) {
            return Ok(());
        }
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(Error::UnsupportedFormat(ext));
        }

        let image = Image::load_image(&path.to_string_lossy()).map_err(|reason| Error::Load {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })?;
        self.images.insert(name, image);
        Ok(())
    }

    /// Upload a texture for an image file, storing it under the derived
    /// name.
    ///
    /// When a decoded image of the same name is already cached it is
    /// uploaded directly; otherwise the file is decoded transiently and the
    /// decode is discarded after the upload.
    pub fn load_texture(&mut self, window: &mut Window, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (name, ext) = split_resource_path(path)?;

        if self.textures.contains_key(&name) {
            return Ok(());
        }
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(Error::UnsupportedFormat(ext));
        }

        let load_err = |reason: String| Error::Load {
            path: path.to_path_buf(),
            reason,
        };
        let texture = match self.images.get(&name) {
            Some(image) => window.load_texture_from_image(image).map_err(load_err)?,
            None => {
                let image =
                    Image::load_image(&path.to_string_lossy())
                        .map_err(|e| load_err(e.to_string()))?;
                window.load_texture_from_image(&image).map_err(load_err)?
            }
        };
        self.textures.insert(name, texture);
        Ok(())
    }

    /// Load a font file and store it under its derived name.
    pub fn load_font(&mut self, window: &mut Window, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let (name, ext) = split_resource_path(path)?;

        if self.fonts.contains_key(&name) {
            return Ok(());
        }
        if !FONT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(Error::UnsupportedFormat(ext));
        }

        let font = window.load_font(path).map_err(|reason| Error::Load {
            path: path.to_path_buf(),
            reason,
        })?;
        self.fonts.insert(name, font);
        Ok(())
    }

    /// Remove an image by resolved name or by path, releasing it.
    ///
    /// A bare name that maps to nothing is a silent no-op; a path that does
    /// not exist on disk is [`Error::NotFound`]. Callers relying on the old
    /// suite depend on this asymmetry.
    pub fn unload_image(&mut self, path_or_name: impl AsRef<str>) -> Result<()> {
        let key = path_or_name.as_ref();
        if self.images.remove(key).is_some() {
            return Ok(());
        }
        if is_bare_name(key) {
            // Unknown name: nothing to unload, not an error.
            return Ok(());
        }
        let (name, _) = split_resource_path(Path::new(key))?;
        self.images.remove(&name);
        Ok(())
    }

    /// Remove a texture by resolved name or by path, releasing it.
    pub fn unload_texture(&mut self, path_or_name: impl AsRef<str>) -> Result<()> {
        let key = path_or_name.as_ref();
        if self.textures.remove(key).is_some() {
            return Ok(());
        }
        if is_bare_name(key) {
            return Ok(());
        }
        let (name, _) = split_resource_path(Path::new(key))?;
        self.textures.remove(&name);
        Ok(())
    }

    /// Remove a font by resolved name or by path, releasing it.
    pub fn unload_font(&mut self, path_or_name: impl AsRef<str>) -> Result<()> {
        let key = path_or_name.as_ref();
        if self.fonts.remove(key).is_some() {
            return Ok(());
        }
        if is_bare_name(key) {
            return Ok(());
        }
        let (name, _) = split_resource_path(Path::new(key))?;
        self.fonts.remove(&name);
        Ok(())
    }

    /// Recursively load every recognized file under `dir`.
    ///
    /// Image files load both an image and a texture; font files load a
    /// font; everything else is skipped. Walk errors are logged and the
    /// walk continues, but a recognized file that fails to load aborts with
    /// that error.
    pub fn load_dir(&mut self, window: &mut Window, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("error while walking over {}: {err}", dir.display());
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path();
            match extension_kind(path) {
                Some(ResourceKind::Image) => {
                    info!("loading image: {}", path.display());
                    self.load_image(path)?;
                    info!("loading texture: {}", path.display());
                    self.load_texture(window, path)?;
                }
                Some(ResourceKind::Font) => {
                    info!("loading font: {}", path.display());
                    self.load_font(window, path)?;
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Recursively unload every recognized file under `dir`, the inverse of
    /// [`Resources::load_dir`].
    pub fn unload_dir(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("error while walking over {}: {err}", dir.display());
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let path = entry.path().to_string_lossy().into_owned();
            match extension_kind(entry.path()) {
                Some(ResourceKind::Image) => {
                    self.unload_image(&path)?;
                    self.unload_texture(&path)?;
                }
                Some(ResourceKind::Font) => {
                    self.unload_font(&path)?;
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Look up an image. Misses return the placeholder and `false`.
    pub fn image(&self, name: &str) -> (&Image, bool) {
        match self.images.get(name) {
            Some(image) => (image, true),
            None => (&self.default_image, false),
        }
    }

    /// Look up a texture. Misses return the placeholder and `false`.
    pub fn texture(&self, name: &str) -> (&Texture2D, bool) {
        match self.textures.get(name) {
            Some(texture) => (texture, true),
            None => (&self.default_texture, false),
        }
    }

    /// Look up a font. Misses return raylib's default font and `false`.
    pub fn font(&self, name: &str) -> (&Font, bool) {
        match self.fonts.get(name) {
            Some(font) => (font, true),
            None => (&self.default_font, false),
        }
    }

    /// Number of stored images.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of stored textures.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of stored fonts.
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Release every stored resource. The outermost run calls this exactly
    /// once, right before the window closes.
    pub(crate) fn clear(&mut self) {
        self.images.clear();
        self.textures.clear();
        self.fonts.clear();
    }
}
