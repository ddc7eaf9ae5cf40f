use std::path::Path;
use std::process::Command;

use anyhow::{Result, anyhow};

fn expand_home(path: &str) -> String {
    path.replace(
        '~',
        dirs::home_dir()
            .unwrap_or_default()
            .to_str()
            .unwrap_or_default(),
    )
}

/// Locate the ngspice binary: the `NGSPICE` environment variable wins,
/// otherwise the usual install location for the platform.
pub fn ngspice_path() -> String {
    if let Ok(path) = std::env::var("NGSPICE")
        && !path.is_empty()
    {
        return expand_home(&path);
    }

    if cfg!(target_os = "macos") {
        for candidate in ["/opt/homebrew/bin/ngspice", "/usr/local/bin/ngspice"] {
            if Path::new(candidate).exists() {
                return candidate.to_string();
            }
        }
        // Fall back to the first candidate so the error message is helpful
        "/opt/homebrew/bin/ngspice".to_string()
    } else if cfg!(target_os = "windows") {
        expand_home(r"C:\Program Files\ngspice\bin\ngspice.exe")
    } else {
        "/usr/bin/ngspice".to_string()
    }
}

fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "You can install it with: brew install ngspice"
    } else if cfg!(target_os = "windows") {
        "You can download it from: https://ngspice.sourceforge.io/download.html"
    } else {
        "You can install it with: sudo apt install ngspice"
    }
}

/// Check that ngspice is installed and executable, returning its path.
pub fn check_ngspice_installed() -> Result<String> {
    let path = ngspice_path();

    if !Path::new(&path).exists() {
        return Err(anyhow!(
            "ngspice not found at expected location: {path}\n\
             {}\n\
             If ngspice is installed in a non-standard location, set the NGSPICE environment variable.",
            install_hint()
        ));
    }

    match Command::new(&path).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(path),
        Ok(_) => Err(anyhow!(
            "ngspice found at {path} but failed to execute. Please check your installation."
        )),
        Err(e) => Err(anyhow!(
            "Failed to execute ngspice at {path}: {e}\n{}",
            install_hint()
        )),
    }
}
