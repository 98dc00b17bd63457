//! Named image store
//!
//! [`ImageStore`] maps names to [`Pix`] buffers. Operations read a source
//! image by name, compute a new buffer and bind it under a destination
//! name; a stored buffer is never modified in place. Loading and saving go
//! through the codec chosen by the file extension.
//!
//! A valid name is non-empty and contains no space character.
//!
//! # Examples
//!
//! ```
//! use pixedit::ImageStore;
//!
//! let mut store = ImageStore::new();
//! let ppm = b"P3\n2 1\n255\n255 0 0 0 0 255\n";
//! store.load_bytes(ppm, ".ppm", "img").unwrap();
//! store.flip_horizontal("img", "mirrored").unwrap();
//!
//! let out = store.save("mirrored", ".ppm").unwrap();
//! assert_eq!(out, b"P3\n2 1\n255\n0\n0\n255\n255\n0\n0\n");
//! ```

use crate::error::{StoreError, StoreResult};
use parking_lot::{Mutex, MutexGuard};
use pixedit_color::{ColorMatrix, NegativeClamp};
use pixedit_core::{Pix, PixMut, SUPPORTED_EXTENSIONS};
use pixedit_filter::Kernel;
use pixedit_io::{EncodePolicy, ImageFormat};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

const TARGET: &str = "pixedit::store";

/// Behavior switches for an [`ImageStore`]
///
/// The default reproduces the reference output: negative matrix sums map
/// to 255 and every binary save uses the codec of the requested extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    /// Mapping of negative sums on the color-matrix path
    pub negative_clamp: NegativeClamp,
    /// Which encoder runs for binary saves
    pub encode_policy: EncodePolicy,
}

impl StoreOptions {
    /// Set the negative-sum mapping.
    pub fn negative_clamp(mut self, clamp: NegativeClamp) -> Self {
        self.negative_clamp = clamp;
        self
    }

    /// Set the encode policy.
    pub fn encode_policy(mut self, policy: EncodePolicy) -> Self {
        self.encode_policy = policy;
        self
    }
}

/// Check that `name` is non-empty and contains no space.
pub fn validate_name(name: &str) -> StoreResult<()> {
    if name.is_empty() || name.contains(' ') {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn format_for(ext: &str) -> StoreResult<ImageFormat> {
    ImageFormat::from_extension(ext)
        .ok_or_else(|| StoreError::UnsupportedFormat(format!("extension '{}'", ext)))
}

/// Map from image name to pixel buffer
#[derive(Debug, Default)]
pub struct ImageStore {
    images: BTreeMap<String, Pix>,
    options: StoreOptions,
}

impl ImageStore {
    /// Create an empty store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            images: BTreeMap::new(),
            options,
        }
    }

    /// The options this store was created with.
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// The extensions accepted by [`load`](Self::load) and
    /// [`save`](Self::save), in a stable order.
    pub fn supported_formats() -> &'static [&'static str] {
        &SUPPORTED_EXTENSIONS
    }

    /// Whether an image is bound to `name`.
    pub fn has_image(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Get a shared handle to the image bound to `name`.
    pub fn get(&self, name: &str) -> Option<Pix> {
        self.images.get(name).cloned()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    /// Number of bound images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Bind an image built by the caller, replacing any previous binding.
    pub fn insert(&mut self, name: &str, pix: Pix) -> StoreResult<()> {
        validate_name(name)?;
        self.bind(name, pix);
        Ok(())
    }

    fn bind(&mut self, name: &str, pix: Pix) {
        debug!(
            target: TARGET,
            name,
            width = pix.width(),
            height = pix.height(),
            "bind"
        );
        self.images.insert(name.to_string(), pix);
    }

    fn source(&self, name: &str) -> StoreResult<Pix> {
        self.get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    // ---------------------------------------------------------------------
    // Load / save
    // ---------------------------------------------------------------------

    /// Read the file at `path` and bind the decoded image to `name`.
    ///
    /// The name is checked first, then the extension; the file is only
    /// opened once both are acceptable.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidName`] for an empty name or one with a space
    /// - [`StoreError::UnsupportedFormat`] for an unknown extension
    /// - [`StoreError::DecodeError`] if the file is missing, unreadable or
    ///   malformed
    pub fn load<P: AsRef<Path>>(&mut self, path: P, name: &str) -> StoreResult<()> {
        let path = path.as_ref();
        validate_name(name)?;
        let ext = pixedit_io::extension_of(path).unwrap_or("");
        let format = format_for(ext)?;

        debug!(target: TARGET, path = %path.display(), name, "load");
        let data = std::fs::read(path).map_err(|e| {
            StoreError::DecodeError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let pix = pixedit_io::read_image_mem(&data, format).map_err(StoreError::from_decode)?;
        self.bind(name, pix);
        Ok(())
    }

    /// Decode in-memory data whose format is given by `ext` (e.g. `".png"`)
    /// and bind it to `name`.
    pub fn load_bytes(&mut self, data: &[u8], ext: &str, name: &str) -> StoreResult<()> {
        validate_name(name)?;
        let format = format_for(ext)?;

        debug!(target: TARGET, ext, name, len = data.len(), "load bytes");
        let pix = pixedit_io::read_image_mem(data, format).map_err(StoreError::from_decode)?;
        self.bind(name, pix);
        Ok(())
    }

    /// Encode the image bound to `name` in the format of `ext`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if nothing is bound to `name`, then
    /// [`StoreError::UnsupportedFormat`] for an unknown extension.
    pub fn save(&self, name: &str, ext: &str) -> StoreResult<Vec<u8>> {
        let pix = self.source(name)?;
        let format = format_for(ext)?;

        debug!(target: TARGET, name, ext, "save");
        pixedit_io::write_image_mem_with(&pix, format, self.options.encode_policy)
            .map_err(StoreError::from_encode)
    }

    /// Encode the image bound to `name` and write it to `sink`.
    ///
    /// The format comes from `ext` alone, whatever the sink is.
    pub fn save_to<W: Write>(&self, sink: &mut W, name: &str, ext: &str) -> StoreResult<()> {
        let bytes = self.save(name, ext)?;
        sink.write_all(&bytes).map_err(StoreError::WriteError)?;
        sink.flush().map_err(StoreError::WriteError)
    }

    /// Encode the image bound to `name` into a file, taking the format
    /// from the extension of `path`.
    ///
    /// Nothing is created if the image or the extension is rejected.
    pub fn save_file<P: AsRef<Path>>(&self, path: P, name: &str) -> StoreResult<()> {
        let path = path.as_ref();
        let ext = pixedit_io::extension_of(path).unwrap_or("");
        let bytes = self.save(name, ext)?;
        let mut file = File::create(path).map_err(StoreError::WriteError)?;
        file.write_all(&bytes).map_err(StoreError::WriteError)
    }

    // ---------------------------------------------------------------------
    // Derivation
    // ---------------------------------------------------------------------

    /// Bind a black image of the source's size under `dest` and return it.
    ///
    /// Any image previously bound to `dest` is replaced. The store's own
    /// transforms run the same checks but bind `dest` only once their
    /// output is complete.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if nothing is bound to `src`
    /// - [`StoreError::InvalidName`] if `dest` is empty or has a space
    /// - [`StoreError::NameCollision`] if `dest == src`
    pub fn derive_buffer(&mut self, src: &str, dest: &str) -> StoreResult<Pix> {
        let (_, out) = self.derive(src, dest)?;
        let blank: Pix = out.into();
        self.bind(dest, blank.clone());
        Ok(blank)
    }

    fn derive(&self, src: &str, dest: &str) -> StoreResult<(Pix, PixMut)> {
        let pix = self.source(src)?;
        validate_name(dest)?;
        if dest == src {
            return Err(StoreError::NameCollision(dest.to_string()));
        }
        debug!(target: TARGET, src, dest, "derive");
        let out = pix.create_template();
        Ok((pix, out))
    }

    /// Derivation for the convolution filters, which do not validate the
    /// destination name.
    fn derive_filtered(&self, src: &str, dest: &str) -> StoreResult<(Pix, PixMut)> {
        let pix = self.source(src)?;
        if dest == src {
            return Err(StoreError::NameCollision(dest.to_string()));
        }
        debug!(target: TARGET, src, dest, "derive");
        let out = pix.create_template();
        Ok((pix, out))
    }

    // ---------------------------------------------------------------------
    // Color transforms
    // ---------------------------------------------------------------------

    /// Apply an arbitrary color matrix.
    pub fn color_transform(
        &mut self,
        src: &str,
        dest: &str,
        matrix: &ColorMatrix,
    ) -> StoreResult<()> {
        let (pix, mut out) = self.derive(src, dest)?;
        pixedit_color::apply_color_matrix_into(
            &pix,
            matrix,
            self.options.negative_clamp,
            &mut out,
        )?;
        self.bind(dest, out.into());
        Ok(())
    }

    /// Replicate the red channel into all three channels.
    pub fn red_channel(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.color_transform(src, dest, &ColorMatrix::red_channel())
    }

    /// Replicate the green channel into all three channels.
    pub fn green_channel(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.color_transform(src, dest, &ColorMatrix::green_channel())
    }

    /// Replicate the blue channel into all three channels.
    pub fn blue_channel(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.color_transform(src, dest, &ColorMatrix::blue_channel())
    }

    /// Rec. 709 luma greyscale.
    pub fn luma(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.color_transform(src, dest, &ColorMatrix::luma())
    }

    /// Sepia tone.
    pub fn sepia(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.color_transform(src, dest, &ColorMatrix::sepia())
    }

    /// Greyscale with caller-chosen weights for R, G and B.
    pub fn greyscale(&mut self, src: &str, dest: &str, weights: [f64; 3]) -> StoreResult<()> {
        self.color_transform(src, dest, &ColorMatrix::greyscale(weights))
    }

    /// Every channel becomes the largest of R, G and B.
    pub fn max_value(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        let (pix, mut out) = self.derive(src, dest)?;
        pixedit_color::max_value_into(&pix, &mut out)?;
        self.bind(dest, out.into());
        Ok(())
    }

    /// Every channel becomes the integer mean of R, G and B.
    pub fn intensity(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        let (pix, mut out) = self.derive(src, dest)?;
        pixedit_color::intensity_into(&pix, &mut out)?;
        self.bind(dest, out.into());
        Ok(())
    }

    /// Add `increment` to every channel, clamping to `[0, 255]`.
    pub fn brightness(&mut self, src: &str, dest: &str, increment: i32) -> StoreResult<()> {
        let (pix, mut out) = self.derive(src, dest)?;
        pixedit_color::brightness_into(&pix, increment, &mut out)?;
        self.bind(dest, out.into());
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Geometric transforms
    // ---------------------------------------------------------------------

    /// Mirror left-right.
    pub fn flip_horizontal(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        let (pix, mut out) = self.derive(src, dest)?;
        pixedit_transform::flip_lr_into(&pix, &mut out)?;
        self.bind(dest, out.into());
        Ok(())
    }

    /// Mirror top-bottom.
    pub fn flip_vertical(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        let (pix, mut out) = self.derive(src, dest)?;
        pixedit_transform::flip_tb_into(&pix, &mut out)?;
        self.bind(dest, out.into());
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Convolution filters
    // ---------------------------------------------------------------------

    /// Convolve R, G and B in turn with an arbitrary kernel.
    pub fn convolve(&mut self, src: &str, dest: &str, kernel: &Kernel) -> StoreResult<()> {
        let (pix, mut out) = self.derive_filtered(src, dest)?;
        pixedit_filter::convolve_rgb_into(&pix, kernel, &mut out)?;
        self.bind(dest, out.into());
        Ok(())
    }

    /// 3x3 blur of every channel.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidKernel`] if the image is smaller than 3x3.
    pub fn gaussian_blur(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.convolve(src, dest, &Kernel::blur())
    }

    /// 5x5 sharpen of every channel.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidKernel`] if the image is smaller than 5x5.
    pub fn sharpen(&mut self, src: &str, dest: &str) -> StoreResult<()> {
        self.convolve(src, dest, &Kernel::sharpen())
    }
}

/// An [`ImageStore`] shared between threads behind one mutex
#[derive(Debug, Clone, Default)]
pub struct SharedImageStore {
    inner: Arc<Mutex<ImageStore>>,
}

impl SharedImageStore {
    /// Create an empty shared store with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty shared store with the given options.
    pub fn with_options(options: StoreOptions) -> Self {
        Self::from(ImageStore::with_options(options))
    }

    /// Lock the store for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, ImageStore> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut ImageStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<ImageStore> for SharedImageStore {
    fn from(store: ImageStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}
