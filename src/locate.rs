use anyhow::anyhow;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Name of the reference GLSL compiler, with the platform's executable
/// suffix applied.
pub fn executable_name() -> &'static str {
    if cfg!(windows) {
        "glslangValidator.exe"
    } else {
        "glslangValidator"
    }
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolves the compiler executable, preferring an explicit override over a
/// scan of `search_path` (the caller passes the `PATH` variable). The scan
/// returns the first directory containing an executable of the expected
/// name, so the order of `search_path` is the tie-break.
pub fn find_glslang(
    override_path: Option<&Path>,
    search_path: Option<&OsStr>,
) -> Result<PathBuf, anyhow::Error> {
    if let Some(path) = override_path {
        if is_executable(path) {
            return Ok(path.to_path_buf());
        }
        log::warn!(
            "ignoring --glslang {}: not an executable file, falling back to PATH",
            path.display(),
        );
    }

    let name = executable_name();
    for dir in search_path.iter().flat_map(env::split_paths) {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Ok(candidate);
        }
    }

    Err(anyhow!(
        "could not find {name} on PATH, and it was not specified with --glslang"
    ))
}
