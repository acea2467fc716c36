use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain must never depend on.
const FORBIDDEN_DOMAIN_DEPS: &[&str] = &[
    "dioxus",
    "dioxus-desktop",
    "tokio",
    "web-sys",
    "js-sys",
    "gloo-timers",
    "tracing-subscriber",
];

const DOMAIN_PACKAGE: &str = "keepsake-domain";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    manifest_path: PathBuf,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_PACKAGE)
        .with_context(|| format!("{DOMAIN_PACKAGE} not found in workspace"))?;

    let mut violations = forbidden_dependencies(domain);

    let src = domain
        .manifest_path
        .parent()
        .map(|dir| dir.join("src"))
        .context("domain manifest has no parent directory")?;
    violations.extend(forbidden_imports(&src)?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn forbidden_dependencies(package: &Package) -> Vec<String> {
    package
        .dependencies
        .iter()
        .filter(|dep| FORBIDDEN_DOMAIN_DEPS.contains(&dep.name.as_str()))
        .map(|dep| format!("{} depends on {}", package.name, dep.name))
        .collect()
}

fn forbidden_imports(src: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(
        r"\b(dioxus|tokio|web_sys|js_sys|gloo_timers)::|std::time::(Instant|SystemTime)",
    )
    .context("compiling import pattern")?;

    let mut violations = Vec::new();
    for path in rust_files(src)? {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        for (line_no, line) in text.lines().enumerate() {
            if let Some(found) = pattern.find(line) {
                violations.push(format!(
                    "{}:{} uses {}",
                    path.display(),
                    line_no + 1,
                    found.as_str()
                ));
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_ui_dependencies() {
        let package = Package {
            name: DOMAIN_PACKAGE.to_string(),
            manifest_path: PathBuf::from("crates/domain/Cargo.toml"),
            dependencies: vec![
                Dependency { name: "serde".to_string() },
                Dependency { name: "dioxus".to_string() },
            ],
        };
        assert_eq!(
            forbidden_dependencies(&package),
            vec!["keepsake-domain depends on dioxus".to_string()]
        );
    }

    #[test]
    fn flags_platform_imports() {
        let dir = std::env::temp_dir().join(format!("xtask-arch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("ok.rs"), "use chrono::Utc;\n").unwrap();
        std::fs::write(dir.join("bad.rs"), "fn f() {\n    let _ = std::time::Instant::now();\n}\n").unwrap();

        let violations = forbidden_imports(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(violations.len(), 1);
        assert!(violations[0].ends_with("bad.rs:2 uses std::time::Instant"));
    }
}
