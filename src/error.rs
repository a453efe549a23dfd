use std::path::PathBuf;

pub type BordureResult<T> = Result<T, BordureError>;

/// Error taxonomy for the icon pipeline.
///
/// Any error for any (photo, border) pair aborts the whole batch; there is no
/// per-file isolation. `AssetCorrupt` is a startup condition and fires before
/// any photo is touched.
#[derive(thiserror::Error, Debug)]
pub enum BordureError {
    #[error("unsupported image format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("decode error for '{}': {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("write error for '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("corrupt border template '{name}': {source}")]
    AssetCorrupt {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
