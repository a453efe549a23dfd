//! Per-(photo, border) orchestration: decode once per photo, then scale,
//! compose, and write one icon per catalog border.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;

use crate::{
    catalog::{BorderTemplate, Catalog},
    codec,
    composite::compose_icon,
    error::BordureResult,
    scale::scale_to_fill,
};

/// Scheduling options for a batch run.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Process photos on parallel workers.
    pub parallel: bool,
    /// Worker thread override (parallel mode only).
    pub threads: Option<usize>,
}

/// Produce one composited icon per (photo, border) pair.
///
/// Fail-fast: the first error for any pair aborts the batch. In parallel
/// mode `try_for_each` stops scheduling new photos once any worker fails;
/// masks are materialized before the pool starts so workers only read them.
#[tracing::instrument(skip(catalog, inputs), fields(photos = inputs.len(), borders = catalog.len()))]
pub fn make_icons(catalog: &Catalog, inputs: &[PathBuf], opts: &RunOptions) -> BordureResult<()> {
    catalog.precompute_masks();

    if !opts.parallel {
        for path in inputs {
            process_photo(catalog, path)?;
        }
        return Ok(());
    }

    let pool = build_thread_pool(opts.threads)?;
    pool.install(|| {
        inputs
            .par_iter()
            .try_for_each(|path| process_photo(catalog, path))
    })
}

fn process_photo(catalog: &Catalog, path: &Path) -> BordureResult<()> {
    let photo = codec::read_image(path)?;
    for template in catalog.iter() {
        render_pair(&photo, template, path)?;
    }
    Ok(())
}

fn render_pair(photo: &RgbaImage, template: &BorderTemplate, input: &Path) -> BordureResult<()> {
    let (width, height) = template.image().dimensions();
    let scaled = scale_to_fill(photo, width, height);
    let icon = compose_icon(&scaled, template.image(), template.interior_mask())?;
    let dest = codec::write_icon(input, template.name(), &icon)?;
    tracing::debug!(dest = %dest.display(), border = template.name(), "wrote icon");
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> BordureResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(anyhow::anyhow!("'threads' must be >= 1 when set").into());
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build worker thread pool: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_is_rejected() {
        assert!(build_thread_pool(Some(0)).is_err());
        assert!(build_thread_pool(Some(1)).is_ok());
        assert!(build_thread_pool(None).is_ok());
    }
}
