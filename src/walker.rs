/// Finds the web assets under an input root and works out where their headers go.
use anyhow::{Context, Result};
use log::trace;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lowercased file name suffixes that get converted.
pub const WEB_EXTENSIONS: [&str; 3] = [".html", ".css", ".js"];

/// One file to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetJob {
    pub input: PathBuf,
    /// `input` relative to the input root.
    pub relative: PathBuf,
    pub output: PathBuf,
}

pub fn is_web_asset(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    WEB_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// `style.css` -> `style_css.h`. Case is kept as-is.
pub fn header_file_name(relative: &Path) -> String {
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = relative
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_{}.h", stem, ext)
}

pub fn output_path_for(output_root: &Path, relative: &Path) -> PathBuf {
    let parent = relative.parent().unwrap_or_else(|| Path::new(""));
    output_root.join(parent).join(header_file_name(relative))
}

// Anything but a directory or a link to one. Broken links stay in so reading them fails the run.
fn is_candidate(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_dir() {
        return false;
    }
    if ft.is_symlink() && entry.path().is_dir() {
        return false;
    }
    is_web_asset(&entry.file_name().to_string_lossy())
}

/// Lazily walk `input_root` and yield a job per matching file, in directory order.
/// Walk errors are yielded as `Err` and should stop the run.
pub fn find_assets<'a>(
    input_root: &'a Path,
    output_root: &'a Path,
) -> impl Iterator<Item = Result<AssetJob>> + 'a {
    WalkDir::new(input_root)
        .min_depth(1)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    return Some(
                        Err(err).with_context(|| format!("Failed to walk {:?}", input_root)),
                    )
                }
            };
            if !is_candidate(&entry) {
                trace!("Skipping {:?}", entry.path());
                return None;
            }
            let input = entry.into_path();
            let relative = match input.strip_prefix(input_root) {
                Ok(rel) => rel.to_path_buf(),
                Err(err) => return Some(Err(err.into())),
            };
            let output = output_path_for(output_root, &relative);
            Some(Ok(AssetJob {
                input,
                relative,
                output,
            }))
        })
}
