//! Asynchronous image loading.
//!
//! Decoding happens on a background thread; the result travels back over a
//! channel and is taken exactly once through [`PendingTexture`]. The GPU upload
//! itself stays on the caller's thread, since GL contexts are not shareable
//! across threads: resolve the pending load, then call [`DecodedImage::upload`].

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use super::{is_size_valid, load_bytes_with, Format, Options, TextureBackend, TextureError};

/// A decoded RGBA8 image whose size has been checked against its options.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: i32,
    pub height: i32,
    /// Row-major RGBA8 pixels, top row first.
    pub pixels: Vec<u8>,
    pub options: Options,
}

impl DecodedImage {
    /// `(width, height)` in pixels.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Hands the pixels to the native backend.
    pub fn upload<B: TextureBackend>(&self, backend: &mut B) -> Result<B::Texture, TextureError> {
        load_bytes_with(
            backend,
            &self.options,
            self.size(),
            Format::Rgba,
            &self.pixels,
        )
    }
}

/// A texture load in flight. Resolves at most once.
pub struct PendingTexture {
    receiver: Option<Receiver<Result<DecodedImage, TextureError>>>,
}

impl PendingTexture {
    /// Returns the result if decoding has finished.
    ///
    /// Yields `Some` exactly once; every later call returns `None`.
    pub fn try_take(&mut self) -> Option<Result<DecodedImage, TextureError>> {
        let receiver = self.receiver.as_ref()?;
        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(loader_vanished()),
        };
        self.receiver = None;
        Some(result)
    }

    /// Whether the result has already been taken.
    pub fn is_resolved(&self) -> bool {
        self.receiver.is_none()
    }

    /// Blocks until decoding finishes.
    ///
    /// # Errors
    ///
    /// Returns the load's error, or a [`TextureError::LoadError`] if the
    /// result was already taken with [`PendingTexture::try_take`].
    pub fn wait(mut self) -> Result<DecodedImage, TextureError> {
        match self.receiver.take() {
            Some(receiver) => receiver.recv().unwrap_or_else(|_| Err(loader_vanished())),
            None => Err(TextureError::LoadError("result already taken".into())),
        }
    }
}

fn loader_vanished() -> TextureError {
    TextureError::LoadError("image loader thread exited without a result".into())
}

/// Starts loading `url` with [`Options::default`].
pub fn load(url: &str) -> PendingTexture {
    load_with(Options::default(), url)
}

/// Starts loading `url` (a filesystem path or `file://` URL) with `options`.
pub fn load_with(options: Options, url: &str) -> PendingTexture {
    let (sender, receiver) = mpsc::channel();
    let url = url.to_owned();
    thread::spawn(move || {
        let result = decode(options, &url);
        if let Err(err) = &result {
            tracing::debug!(%url, %err, "texture load failed");
        }
        // The receiver may have been dropped; nobody is waiting in that case.
        let _ = sender.send(result);
    });
    PendingTexture {
        receiver: Some(receiver),
    }
}

fn resolve_path(url: &str) -> Result<PathBuf, TextureError> {
    if let Some(path) = url.strip_prefix("file://") {
        return Ok(PathBuf::from(path));
    }
    if url.contains("://") {
        return Err(TextureError::LoadError(format!(
            "unsupported URL scheme: {url}"
        )));
    }
    Ok(PathBuf::from(url))
}

fn decode(options: Options, url: &str) -> Result<DecodedImage, TextureError> {
    let path = resolve_path(url)?;
    let image = image::open(&path)
        .map_err(|e| TextureError::LoadError(format!("{}: {e}", path.display())))?
        .to_rgba8();

    let width = i32::try_from(image.width()).unwrap_or(i32::MAX);
    let height = i32::try_from(image.height()).unwrap_or(i32::MAX);
    if width <= 0 || height <= 0 || !is_size_valid(&options, width, height) {
        return Err(TextureError::SizeError { width, height });
    }

    Ok(DecodedImage {
        width,
        height,
        pixels: image.into_raw(),
        options,
    })
}
