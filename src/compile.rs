use crate::stage::ShaderStage;

use anyhow::{bail, Context};
use rayon::prelude::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

// Pinned target environments, matching what the engine links against.
const TARGET_API: &str = "vulkan1.3";
const TARGET_SPIRV: &str = "spirv1.6";

/// Per-run configuration handed to every compilation task.
#[derive(Debug, Clone)]
pub struct Options {
    pub glslang: PathBuf,
    pub debug: bool,
}

/// Artifact path for a source file: the full input path with `.spv`
/// appended, so `foo.vert` compiles to `foo.vert.spv` next to it.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".spv");
    PathBuf::from(name)
}

/// Argument list for one glslangValidator invocation. Arguments are always
/// passed as a discrete list, never through a shell, so paths with spaces
/// need no quoting.
pub fn invocation_args(input: &Path, options: &Options) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-V".into(),
        input.into(),
        "-o".into(),
        output_path(input).into(),
    ];
    if options.debug {
        args.push("-g".into());
    }
    args.push("--target-env".into());
    args.push(TARGET_API.into());
    args.push("--target-env".into());
    args.push(TARGET_SPIRV.into());
    args
}

/// Runs the compiler on one source file and waits for it. A spawn error
/// (e.g. the resolved executable disappearing after the locator check) is
/// reported the same way as a non-zero exit.
pub fn compile_file(input: &Path, options: &Options) -> Result<(), anyhow::Error> {
    log::debug!("compiling shader {}", input.display());
    let status = Command::new(&options.glslang)
        .args(invocation_args(input, options))
        .status()
        .with_context(|| format!("failed to spawn {}", options.glslang.display()))?;
    if !status.success() {
        bail!(
            "compilation of {} failed with {status}",
            input.display(),
        );
    }
    Ok(())
}

/// Compiles every shader source under `root` in parallel and returns the
/// number of compiled files, or an error if at least one task failed.
/// A failing task never cancels its siblings; the outcome is decided only
/// after all tasks have joined.
pub fn compile_all(root: &Path, options: &Options) -> Result<usize, anyhow::Error> {
    let sources = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| ShaderStage::from_path(path).is_some())
        .collect::<Vec<_>>();

    let failed = sources
        .par_iter()
        .filter(|input| match compile_file(input, options) {
            Ok(()) => false,
            Err(err) => {
                log::error!("{err:#}");
                true
            }
        })
        .count();

    if failed > 0 {
        bail!("{failed} of {} shaders failed to compile", sources.len());
    }
    Ok(sources.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(debug: bool) -> Options {
        Options {
            glslang: PathBuf::from("/opt/vulkan/bin/glslangValidator"),
            debug,
        }
    }

    #[test]
    fn output_path_appends_to_the_full_name() {
        assert_eq!(
            output_path(Path::new("shaders/sky box/cube.frag")),
            PathBuf::from("shaders/sky box/cube.frag.spv"),
        );
    }

    #[test]
    fn invocation_always_pins_both_target_envs() {
        let args = invocation_args(Path::new("a.vert"), &options(false));
        let expected: Vec<OsString> = [
            "-V",
            "a.vert",
            "-o",
            "a.vert.spv",
            "--target-env",
            "vulkan1.3",
            "--target-env",
            "spirv1.6",
        ]
        .map(OsString::from)
        .to_vec();
        assert_eq!(args, expected);
    }

    #[test]
    fn debug_flag_is_present_iff_requested() {
        let with = invocation_args(Path::new("a.vert"), &options(true));
        let without = invocation_args(Path::new("a.vert"), &options(false));
        assert!(with.contains(&OsString::from("-g")));
        assert!(!without.contains(&OsString::from("-g")));
    }
}
