use std::path::{Path, PathBuf};
use std::process::Command;

/// Short hash of HEAD, or "unknown" outside a git checkout.
fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_owned())
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// `.git` directory, following a worktree `gitdir:` pointer file.
fn git_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("GIT_DIR") {
        return Some(dir.into());
    }

    let dot_git = Path::new(".git");
    if dot_git.is_dir() {
        return Some(dot_git.to_path_buf());
    }

    let pointer = std::fs::read_to_string(dot_git).ok()?;
    let target = PathBuf::from(pointer.strip_prefix("gitdir:")?.trim());
    Some(if target.is_relative() {
        Path::new(".").join(target)
    } else {
        target
    })
}

fn main() {
    println!("cargo:rustc-env=INKSLATE_GIT_HASH={}", git_hash());

    let Some(dir) = git_dir() else {
        return;
    };
    for watched in ["HEAD", "refs", "packed-refs"] {
        let path = dir.join(watched);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}
