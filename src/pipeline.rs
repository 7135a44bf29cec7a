use crate::archive::{self, Archive};
use crate::config::Config;
use crate::context::Context;
use crate::mutate::{self, Outcome};
use crate::name;
use crate::platform::{self, Platform};
use crate::result::Result;
use crate::ui;

/// Summary of a completed run
#[derive(Debug)]
pub struct Report {
    pub name: String,
    pub archives: Vec<Archive>,
}

/// Deduce the game name, apply the build corrections, then write one archive
/// per platform folder present, stopping at the first failure.
pub fn run(ctx: &Context, config: &Config) -> Result<Report> {
    let targets = platform::targets(ctx, config);

    let name = name::resolve(&targets)?;
    ui::info(ctx, format!("Deduced game name as: {}", name))?;

    if let Some(windows) = platform::find(&targets, Platform::Windows) {
        match mutate::remove_console_executable(&windows.directory, &name, &config.console_suffix)? {
            Outcome::Applied => ui::step(ctx, "Removed console exe from Windows build")?,
            Outcome::AlreadyApplied => ui::step(ctx, "Windows build has no console exe")?,
            Outcome::NotApplicable => ui::step(ctx, "No Windows build found.")?,
        }
    }

    if let Some(web) = platform::find(&targets, Platform::Web) {
        match mutate::rename_web_index(&web.directory, &name)? {
            Outcome::Applied => ui::step(
                ctx,
                format!("Renamed {}.html to {} for Web build", name, mutate::WEB_INDEX),
            )?,
            Outcome::AlreadyApplied => ui::step(ctx, "Web build already has index.html")?,
            Outcome::NotApplicable => ui::step(ctx, "No Web build found.")?,
        }
    }

    let mut archives = Vec::new();
    for target in &targets {
        if let Some(archive) = archive::build(ctx, target, &name, config.compression)? {
            ui::success(
                ctx,
                format!(
                    "Packaged {} files into {}",
                    archive.members,
                    archive.path.display()
                ),
            )?;
            archives.push(archive);
        }
    }

    Ok(Report { name, archives })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs::{self, File};
    use std::path::Path;
    use zip::ZipArchive;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, relative.as_bytes()).unwrap();
    }

    fn members(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    fn zips(root: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(root)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|n| n.ends_with(".zip"))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_full_build_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "Windows/Game.exe");
        touch(root, "Windows/Game.pck");
        touch(root, "Windows/Game.console.exe");
        touch(root, "Linux/Game.pck");
        touch(root, "Linux/Game.x86_64");
        touch(root, "Web/Game.png");
        touch(root, "Web/Game.html");
        touch(root, "Web/Game.wasm");

        let ctx = Context::new(root.to_path_buf(), true);
        let report = run(&ctx, &Config::default()).unwrap();

        assert_eq!(report.name, "Game");
        assert!(!root.join("Windows/Game.console.exe").exists());
        assert!(root.join("Web/index.html").is_file());
        assert!(!root.join("Web/Game.html").exists());

        let platforms: Vec<_> = report.archives.iter().map(|a| a.platform).collect();
        assert_eq!(platforms, [Platform::Windows, Platform::Linux, Platform::Web]);
        assert_eq!(
            zips(root),
            ["[Linux] Game.zip", "[Web] Game.zip", "[Windows] Game.zip"]
        );

        assert_eq!(members(&root.join("[Windows] Game.zip")), ["Game.exe", "Game.pck"]);
        assert_eq!(members(&root.join("[Linux] Game.zip")), ["Game.pck", "Game.x86_64"]);
        assert_eq!(
            members(&root.join("[Web] Game.zip")),
            ["Game.png", "Game.wasm", "index.html"]
        );
    }

    #[test]
    fn test_rerun_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "Windows/Game.pck");
        touch(root, "Windows/Game.console.exe");
        touch(root, "Web/Game.png");
        touch(root, "Web/Game.html");

        let ctx = Context::new(root.to_path_buf(), true);
        run(&ctx, &Config::default()).unwrap();
        let report = run(&ctx, &Config::default()).unwrap();

        assert_eq!(report.archives.len(), 2);
        assert_eq!(members(&root.join("[Web] Game.zip")), ["Game.png", "index.html"]);
        assert_eq!(members(&root.join("[Windows] Game.zip")), ["Game.pck"]);
    }

    #[test]
    fn test_web_only_build() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "Web/Splash.png");
        touch(root, "Web/Splash.html");

        let ctx = Context::new(root.to_path_buf(), true);
        let report = run(&ctx, &Config::default()).unwrap();

        assert_eq!(report.name, "Splash");
        assert_eq!(zips(root), ["[Web] Splash.zip"]);
        assert_eq!(
            members(&root.join("[Web] Splash.zip")),
            ["Splash.png", "index.html"]
        );
    }

    #[test]
    fn test_no_build_directories() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(dir.path().to_path_buf(), true);

        let err = run(&ctx, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::NoBuildDirectory { .. }));
        assert_eq!(err.exit_code(), 66);
        assert!(zips(dir.path()).is_empty());
    }

    #[test]
    fn test_missing_web_page_stops_before_archiving() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "Linux/Game.pck");
        touch(root, "Web/Game.png");

        let ctx = Context::new(root.to_path_buf(), true);
        let err = run(&ctx, &Config::default()).unwrap_err();

        assert!(matches!(err, Error::MutationTargetMissing { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(zips(root).is_empty());
    }

    #[test]
    fn test_archive_write_failure_names_archive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "Linux/Game.pck");
        fs::create_dir(root.join("[Linux] Game.zip")).unwrap();

        let ctx = Context::new(root.to_path_buf(), true);
        let err = run(&ctx, &Config::default()).unwrap_err();

        assert!(matches!(err, Error::ArchivePackagingFailed { .. }));
        assert!(err.to_string().contains("[Linux] Game.zip"), "{err}");
    }
}
