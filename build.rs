use std::process::Command;

fn main() {
    // Short git hash, when building from a checkout
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                Some(String::from_utf8_lossy(&o.stdout).trim().to_string())
            } else {
                None
            }
        });
    println!(
        "cargo:rustc-env=GIT_HASH={}",
        git_hash.as_deref().unwrap_or("unknown")
    );
    let dirty = Command::new("git")
        .args(["diff", "--quiet"])
        .status()
        .map(|s| if s.success() { "clean" } else { "dirty" })
        .unwrap_or("unknown");
    println!("cargo:rustc-env=GIT_DIRTY={}", dirty);
}
