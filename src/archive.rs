use crate::context::Context;
use crate::config::Compression;
use crate::error::Error;
use crate::files;
use crate::platform::{Platform, PlatformTarget};
use crate::result::Result;
use crate::ui;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// An archive written during this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub platform: Platform,
    pub path: PathBuf,
    pub members: usize,
}

/// `[<label>] <name>.zip` in the containing directory
pub fn archive_path(root: &Path, platform: Platform, name: &str) -> PathBuf {
    root.join(format!("[{}] {}.zip", platform.label(), name))
}

/// Zip the contents of one platform folder.
///
/// Returns `None` when the folder is absent. Members are stored relative to
/// the platform folder, without a wrapping directory.
pub fn build(
    ctx: &Context,
    target: &PlatformTarget,
    name: &str,
    compression: Compression,
) -> Result<Option<Archive>> {
    if !target.exists() {
        log::debug!("no {} build, skipping archive", target.platform);
        return Ok(None);
    }

    let files = files::list_files(&target.directory)?;
    let path = archive_path(&ctx.root, target.platform, name);
    package(ctx, &target.directory, &files, &path, compression)?;

    Ok(Some(Archive {
        platform: target.platform,
        path,
        members: files.len(),
    }))
}

/// Write `files` (relative to `source_dir`) into a fresh archive at `output`.
///
/// A partially written archive is removed when any member fails.
pub fn package(
    ctx: &Context,
    source_dir: &Path,
    files: &[String],
    output: &Path,
    compression: Compression,
) -> Result<()> {
    let result = write_zip(ctx, source_dir, files, output, compression);
    if result.is_err() && output.exists() {
        if let Err(e) = fs::remove_file(output) {
            log::warn!("could not remove partial archive {}: {}", output.display(), e);
        }
    }
    result
}

fn write_zip(
    ctx: &Context,
    source_dir: &Path,
    files: &[String],
    output: &Path,
    compression: Compression,
) -> Result<()> {
    let archive_failed = |source: io::Error| Error::ArchivePackagingFailed {
        archive: output.to_path_buf(),
        member: None,
        source,
    };

    let file = File::create(output).map_err(archive_failed)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(compression.method());

    let written = files
        .iter()
        .try_for_each(|member| add_member(ctx, &mut zip, source_dir, member, output, options));

    // Close the archive whether or not every member made it in
    let finished = zip.finish();
    written?;
    finished.map_err(|e| archive_failed(io::Error::from(e)))?;
    Ok(())
}

fn add_member(
    ctx: &Context,
    zip: &mut ZipWriter<File>,
    source_dir: &Path,
    member: &str,
    output: &Path,
    options: SimpleFileOptions,
) -> Result<()> {
    let fail = |source: io::Error| Error::ArchivePackagingFailed {
        archive: output.to_path_buf(),
        member: Some(member.to_string()),
        source,
    };

    let path = source_dir.join(member);
    let mut source = File::open(&path).map_err(fail)?;
    let metadata = source.metadata().map_err(fail)?;

    let options = options.large_file(metadata.len() >= u32::MAX as u64);
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    zip.start_file(member, options)
        .map_err(|e| fail(io::Error::from(e)))?;
    io::copy(&mut source, zip).map_err(fail)?;

    ui::detail(ctx, format!("  {}", member))?;
    Ok(())
}
