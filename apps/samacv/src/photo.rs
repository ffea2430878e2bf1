//! Profile photo lifecycle.
//!
//! The photo arrives as raw bytes from outside (file picker, disk). To display it,
//! the bytes are decoded once into a `PhotoHandle`. Handles are reference counted:
//! clones held by rendered documents share one decoded image, and the image is
//! released as soon as the last clone is dropped. `PhotoRegistry` tracks how many
//! distinct decoded photos are alive so repeated selections can be checked for leaks.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use image::RgbaImage;
use tracing::debug;
use uuid::Uuid;

use crate::errors::PhotoError;

/// An externally supplied image file, not yet decoded.
#[derive(Debug, Clone)]
pub struct PhotoResource {
    pub name: String,
    pub bytes: Bytes,
}

impl PhotoResource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Counts decoded photos that are still referenced somewhere.
#[derive(Debug, Clone, Default)]
pub struct PhotoRegistry {
    live: Arc<AtomicUsize>,
}

impl PhotoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Decodes `resource` into a display handle.
    pub fn acquire(&self, resource: &PhotoResource) -> Result<PhotoHandle, PhotoError> {
        let decoded = image::load_from_memory(&resource.bytes).map_err(|source| PhotoError::Decode {
            name: resource.name.clone(),
            source,
        })?;

        let id = Uuid::new_v4();
        self.live.fetch_add(1, Ordering::SeqCst);
        debug!(%id, name = %resource.name, "photo handle acquired");

        Ok(PhotoHandle {
            inner: Arc::new(DecodedPhoto {
                id,
                image: decoded.to_rgba8(),
                live: Arc::clone(&self.live),
            }),
        })
    }
}

struct DecodedPhoto {
    id: Uuid,
    image: RgbaImage,
    live: Arc<AtomicUsize>,
}

impl Drop for DecodedPhoto {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        debug!(id = %self.id, "photo handle released");
    }
}

/// Shared display handle for a decoded photo. Equality is identity.
#[derive(Clone)]
pub struct PhotoHandle {
    inner: Arc<DecodedPhoto>,
}

impl PhotoHandle {
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn image(&self) -> &RgbaImage {
        &self.inner.image
    }
}

impl PartialEq for PhotoHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for PhotoHandle {}

impl fmt::Debug for PhotoHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoHandle")
            .field("id", &self.inner.id)
            .field("width", &self.inner.image.width())
            .field("height", &self.inner.image.height())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, Rgba};
    use std::io::Cursor;

    /// A small PNG, encoded in memory.
    pub(crate) fn png_resource(w: u32, h: u32) -> PhotoResource {
        let img = RgbaImage::from_pixel(w, h, Rgba([200, 80, 40, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageOutputFormat::Png)
            .unwrap();
        PhotoResource::new("profile.png", buf.into_inner())
    }

    #[test]
    fn test_acquire_decodes_png() {
        let registry = PhotoRegistry::new();
        let handle = registry.acquire(&png_resource(8, 6)).unwrap();
        assert_eq!(handle.image().dimensions(), (8, 6));
        assert_eq!(registry.live_handles(), 1);
    }

    #[test]
    fn test_acquire_rejects_garbage() {
        let registry = PhotoRegistry::new();
        let err = registry
            .acquire(&PhotoResource::new("broken.jpeg", Bytes::from_static(b"not an image")))
            .unwrap_err();
        assert!(err.to_string().contains("broken.jpeg"));
        assert_eq!(registry.live_handles(), 0);
    }

    #[test]
    fn test_clones_share_one_live_handle() {
        let registry = PhotoRegistry::new();
        let handle = registry.acquire(&png_resource(2, 2)).unwrap();
        let copies: Vec<PhotoHandle> = (0..5).map(|_| handle.clone()).collect();
        assert_eq!(registry.live_handles(), 1);
        assert!(copies.iter().all(|c| *c == handle));
        drop(copies);
        drop(handle);
        assert_eq!(registry.live_handles(), 0);
    }

    #[test]
    fn test_distinct_acquisitions_are_not_equal() {
        let registry = PhotoRegistry::new();
        let a = registry.acquire(&png_resource(2, 2)).unwrap();
        let b = registry.acquire(&png_resource(2, 2)).unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.live_handles(), 2);
    }
}
