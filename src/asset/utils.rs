use std::env;
use std::path::PathBuf;

/// Resolves a path relative to the executable, where bundled assets live.
pub fn exe_asset_path(name: &str) -> PathBuf {
    let mut exe_path = env::current_exe().expect("executable path should resolve");
    exe_path.pop(); // remove the file itself
    exe_path.join(name)
}
