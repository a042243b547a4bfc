//! Saving rendered images to disk through the [`Outcome`] railway.
//!
//! The encoder is chosen by the destination's file extension from an explicit
//! [`SaveFormats`] table owned by the [`ImageSaver`]. There is no global
//! registry.
//!
//! # Feature Flag
//!
//! Requires the `persist` feature (enabled by default).
//!
//! # Examples
//!
//! ```
//! use image::DynamicImage;
//! use outcome_rail::persist::{save_image, UNEXPECTED_FORMAT};
//!
//! let canvas = DynamicImage::new_rgb8(4, 4);
//! let out = save_image(&canvas, "cloud.gif");
//! assert_eq!(out.error(), Some(UNEXPECTED_FORMAT));
//! ```

use std::borrow::Cow;
use std::path::Path;

use image::{DynamicImage, ImageFormat};
use smallvec::SmallVec;

use crate::traits::ResultOutcomeExt;
use crate::types::{Outcome, Unit};

/// Failure message for a destination whose extension has no encoder.
pub const UNEXPECTED_FORMAT: &str = "Unexpected format";

/// Immutable mapping from file extension (without the dot) to encoder.
///
/// Lookups are exact and case-sensitive: `out.PNG` does not match `png`.
///
/// # Examples
///
/// ```
/// use image::ImageFormat;
/// use outcome_rail::persist::SaveFormats;
///
/// let formats = SaveFormats::default();
/// assert_eq!(formats.lookup("png"), Some(ImageFormat::Png));
/// assert_eq!(formats.lookup("gif"), None);
///
/// let custom = SaveFormats::empty().with_format("jpeg", ImageFormat::Jpeg);
/// assert_eq!(custom.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFormats {
    entries: SmallVec<[(Cow<'static, str>, ImageFormat); 3]>,
}

impl SaveFormats {
    /// Creates a table with no formats.
    #[must_use]
    pub fn empty() -> Self {
        Self { entries: SmallVec::new() }
    }

    /// Returns a table extended with `extension -> format`.
    ///
    /// A later entry for the same extension replaces the earlier one.
    #[must_use]
    pub fn with_format<S>(mut self, extension: S, format: ImageFormat) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        let extension = extension.into();
        self.entries.retain(|(known, _)| *known != extension);
        self.entries.push((extension, format));
        self
    }

    /// Returns the encoder registered for `extension`.
    #[must_use]
    pub fn lookup(&self, extension: &str) -> Option<ImageFormat> {
        self.entries
            .iter()
            .find(|(known, _)| known == extension)
            .map(|(_, format)| *format)
    }

    /// Returns the encoder for `path`'s extension.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<ImageFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.lookup(ext))
    }

    /// Number of registered extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no extension is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(extension, format)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ImageFormat)> + '_ {
        self.entries.iter().map(|(ext, format)| (&**ext, *format))
    }
}

impl Default for SaveFormats {
    /// `jpg` (lossy JPEG), `bmp` and `png`.
    fn default() -> Self {
        Self::empty()
            .with_format("jpg", ImageFormat::Jpeg)
            .with_format("bmp", ImageFormat::Bmp)
            .with_format("png", ImageFormat::Png)
    }
}

/// Writes images to disk, picking the encoder from its [`SaveFormats`].
///
/// # Examples
///
/// ```no_run
/// use image::DynamicImage;
/// use outcome_rail::persist::ImageSaver;
///
/// let saver = ImageSaver::default();
/// let out = saver.save(&DynamicImage::new_rgba8(64, 64), "cloud.png");
/// assert!(out.is_success());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageSaver {
    formats: SaveFormats,
}

impl ImageSaver {
    /// Creates a saver with the given format table.
    #[must_use]
    pub fn new(formats: SaveFormats) -> Self {
        Self { formats }
    }

    /// The format table this saver consults.
    #[must_use]
    pub fn formats(&self) -> &SaveFormats {
        &self.formats
    }

    /// Encodes `image` and writes it to `path`.
    ///
    /// Fails with [`UNEXPECTED_FORMAT`] when the extension has no encoder.
    /// Encoding and I/O errors fail with the error's own text.
    pub fn save<P>(&self, image: &DynamicImage, path: P) -> Outcome<Unit>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let Some(format) = self.formats.for_path(path) else {
            return Outcome::fail(UNEXPECTED_FORMAT);
        };

        Outcome::succeed(()).tap_ok(|_| image.save_with_format(path, format).into_outcome())
    }
}

/// Saves `image` to `path` using [`SaveFormats::default`].
pub fn save_image<P>(image: &DynamicImage, path: P) -> Outcome<Unit>
where
    P: AsRef<Path>,
{
    ImageSaver::default().save(image, path)
}
