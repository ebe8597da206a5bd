//! Build-time probes for the target toolchain and the source tree.

use crate::options::CpuIntrinsics;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Decide which CPU intrinsics the target offers.
///
/// `target_arch` and `target_env` take the values Cargo reports in
/// `CARGO_CFG_TARGET_ARCH` and `CARGO_CFG_TARGET_ENV`. The probe looks at
/// the target, never the host, so cross builds get the right answer.
pub fn probe_intrinsics(target_arch: &str, target_env: &str) -> CpuIntrinsics {
    let msvc = target_env == "msvc";
    CpuIntrinsics {
        mm_pause: matches!(target_arch, "x86" | "x86_64"),
        builtin_clz: !msvc,
        bitscan_reverse: msvc,
    }
}

/// Short commit hash of the git checkout at `dir`, if any.
///
/// Returns `None` when git is missing, `dir` is not inside a repository,
/// or the output is empty.
pub fn git_short_hash(dir: &Path) -> Option<String> {
    git_output(dir, &["rev-parse", "--short=10", "HEAD"])
}

/// Files whose change means the commit at `dir` may have moved.
///
/// Covers `HEAD` in the real git directory, the branch ref it points to
/// (or the directory that will hold it, for a branch with no commits yet)
/// and `packed-refs`. Paths are resolved by git itself, so a `dir` below
/// the repository root, a worktree or a `.git` file all work. Only paths
/// that exist are returned; outside a repository the list is empty.
pub fn git_watch_paths(dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let Some(head) = git_path(dir, "HEAD") else {
        return paths;
    };
    paths.push(head);

    if let Some(reference) = git_output(dir, &["symbolic-ref", "-q", "HEAD"]) {
        if let Some(ref_path) = git_path(dir, &reference) {
            if ref_path.exists() {
                paths.push(ref_path);
            } else if let Some(parent) = ref_path.parent().filter(|p| p.exists()) {
                paths.push(parent.to_path_buf());
            }
        }
    }
    if let Some(packed) = git_path(dir, "packed-refs") {
        paths.push(packed);
    }
    paths.retain(|p| p.exists());
    paths
}

/// `git rev-parse --git-path <name>`, resolved against `dir`.
fn git_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let path = PathBuf::from(git_output(dir, &["rev-parse", "--git-path", name])?);
    Some(if path.is_absolute() { path } else { dir.join(path) })
}

/// Trimmed stdout of a successful git command, if non-empty.
fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).current_dir(dir).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
