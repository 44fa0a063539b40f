use compileshaders::compile::{self, Options};
use compileshaders::locate;

use anyhow::Context;
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Compile all GLSL shaders below this program's own directory to SPIR-V.
///
/// Run with RUST_LOG=debug to see per-file logging output.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the glslangValidator executable
    #[arg(long)]
    glslang: Option<PathBuf>,

    /// Compile with debug symbols
    #[arg(short = 'g')]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let cli = Cli::parse();

    let glslang = locate::find_glslang(cli.glslang.as_deref(), env::var_os("PATH").as_deref())?;
    log::debug!("using compiler {}", glslang.display());

    // Compile the shaders that live alongside this binary, resolving
    // through any symlink the binary was launched from.
    let exe = env::current_exe()
        .and_then(|path| path.canonicalize())
        .context("failed to resolve own executable path")?;
    let root = exe
        .parent()
        .context("executable has no parent directory")?
        .to_path_buf();

    let options = Options {
        glslang,
        debug: cli.debug,
    };
    let compiled = compile::compile_all(&root, &options)?;
    log::info!("compiled {compiled} shaders under {}", root.display());
    Ok(())
}
