//! Dependency install command detection

use std::path::Path;

/// Lockfiles mapped to their installer, in order of preference
const INSTALLERS: &[(&str, &str)] = &[
    ("bun.lockb", "bun install"),
    ("bun.lock", "bun install"),
    ("pnpm-lock.yaml", "pnpm install"),
    ("yarn.lock", "yarn install"),
];

const DEFAULT_INSTALLER: &str = "npm install";

/// Pick the install command for a service directory
///
/// Returns `None` when the service has no `package.json`, meaning there is
/// nothing to install.
pub fn detect_install_command(service_dir: &Path) -> Option<&'static str> {
    if !service_dir.join("package.json").exists() {
        return None;
    }

    let command = INSTALLERS
        .iter()
        .find(|(lockfile, _)| service_dir.join(lockfile).exists())
        .map(|(_, command)| *command)
        .unwrap_or(DEFAULT_INSTALLER);
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_package_json_skips_install() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_install_command(dir.path()), None);
    }

    #[test]
    fn test_defaults_to_npm() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        assert_eq!(detect_install_command(dir.path()), Some("npm install"));
    }

    #[test]
    fn test_lockfile_selects_installer() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(detect_install_command(dir.path()), Some("pnpm install"));
    }
}
