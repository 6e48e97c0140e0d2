//! End-to-end resolution scenarios: standalone files, embeds, the
//! standard-library registry and on-disk projects.

use std::fs;

use tempfile::TempDir;
use wac_core::{load_file_meta, load_program_meta, Config, Error, Layer, SourceInput, MAIN_PKG};

#[test]
fn standalone_file_without_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let entry = temp_dir.path().join("main.wa");
    fs::write(&entry, "func main() {}").unwrap();

    let (manifest, vfs) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();

    assert_eq!(manifest.root, MAIN_PKG);
    assert_eq!(manifest.main_pkg, MAIN_PKG);
    assert_eq!(manifest.pkg.pkgpath, MAIN_PKG);
    assert_eq!(manifest.pkg.name, "main.wa");
    assert_eq!(vfs.app.read("main.wa").unwrap(), b"func main() {}");
    assert!(!vfs.std.is_empty());
}

#[test]
fn standalone_embed_present_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let entry = temp_dir.path().join("main.wa");
    fs::write(&entry, "//wa:embed data.txt\nfunc main() {}\n").unwrap();
    fs::write(temp_dir.path().join("data.txt"), "hello").unwrap();

    let (manifest, vfs) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();

    assert_eq!(manifest.root, MAIN_PKG);
    assert!(vfs.app.contains("main.wa"));
    assert_eq!(vfs.app.read("data.txt").unwrap(), b"hello");
}

#[test]
fn standalone_embed_missing_is_silently_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let entry = temp_dir.path().join("main.wa");
    fs::write(&entry, "//wa:embed data.txt\nfunc main() {}\n").unwrap();

    let (_, vfs) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();

    assert!(vfs.app.contains("main.wa"));
    assert!(!vfs.app.contains("data.txt"));
}

#[test]
fn absolute_embed_declaration_never_escapes_entry_directory() {
    let outside = TempDir::new().unwrap();
    let secret = outside.path().join("secret.txt");
    fs::write(&secret, "outside").unwrap();

    let temp_dir = TempDir::new().unwrap();
    let entry = temp_dir.path().join("main.wa");
    fs::write(
        &entry,
        format!("//wa:embed {}\nfunc main() {{}}\n", secret.display()),
    )
    .unwrap();

    let (_, vfs) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();

    // the declared path is only ever looked up under the entry
    // directory, where it does not exist
    assert!(vfs.app.contains("main.wa"));
    assert!(!vfs.app.contains(secret.to_string_lossy().as_ref()));
}

#[test]
fn inline_source_never_touches_disk_and_suppresses_vendor() {
    let temp_dir = TempDir::new().unwrap();
    // no file is ever written at this path
    let entry = temp_dir.path().join("snippet.wa");

    let (manifest, vfs) = load_file_meta(
        &Config::default(),
        &entry,
        SourceInput::Text("func main() {}".into()),
    )
    .unwrap();

    assert_eq!(manifest.pkg.name, "snippet.wa");
    assert_eq!(vfs.app.read("snippet.wa").unwrap(), b"func main() {}");
    assert!(matches!(vfs.vendor, Layer::Empty));
}

#[test]
fn on_disk_entry_anchors_vendor_at_manifest_root() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("wa.mod"),
        "[package]\nname = \"hello\"\npkgpath = \"myapp\"\n",
    )
    .unwrap();
    fs::create_dir(temp_dir.path().join("vendor")).unwrap();
    fs::write(temp_dir.path().join("vendor/dep.wa"), "func dep() {}").unwrap();
    let entry = temp_dir.path().join("main.wa");
    fs::write(&entry, "func main() {}").unwrap();

    let (manifest, vfs) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();

    assert_eq!(manifest.root, temp_dir.path().to_string_lossy());
    assert_eq!(vfs.vendor.read("dep.wa").unwrap(), b"func dep() {}");
}

#[test]
fn nil_buffer_fails_with_invalid_source() {
    let err = load_file_meta(
        &Config::default(),
        std::path::Path::new("main.wa"),
        SourceInput::Buffer(None),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidSource));
}

#[test]
fn std_registry_package() {
    let (manifest, vfs) = load_program_meta(&Config::default(), "os").unwrap();

    assert_eq!(manifest.root, "");
    assert_eq!(manifest.main_pkg, "os");
    assert!(manifest.is_std);
    assert_eq!(manifest.pkg.name, "os");
    assert_eq!(manifest.pkg.pkgpath, "os");
    assert!(matches!(vfs.app, Layer::Empty));
    assert!(matches!(vfs.vendor, Layer::Empty));
    assert!(!vfs.std.is_empty());
}

#[test]
fn project_with_manifest() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("wa.mod"),
        "[package]\nname = \"proj\"\npkgpath = \"example/proj\"\n",
    )
    .unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src/main.wa"), "func main() {}").unwrap();
    fs::create_dir(temp_dir.path().join("vendor")).unwrap();
    fs::write(temp_dir.path().join("vendor/dep.wa"), "func dep() {}").unwrap();

    let (manifest, vfs) =
        load_program_meta(&Config::default(), &temp_dir.path().to_string_lossy()).unwrap();

    assert_eq!(manifest.root, temp_dir.path().to_string_lossy());
    assert_eq!(manifest.main_pkg, "example/proj");
    assert!(!manifest.is_std);
    assert_eq!(vfs.app.read("main.wa").unwrap(), b"func main() {}");
    assert_eq!(vfs.vendor.read("dep.wa").unwrap(), b"func dep() {}");
}

#[test]
fn project_without_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    let err =
        load_program_meta(&Config::default(), &temp_dir.path().to_string_lossy()).unwrap_err();
    assert!(matches!(err, Error::ManifestRequired(_)));
}

#[test]
fn waroot_override_replaces_builtin_bundle() {
    let waroot = TempDir::new().unwrap();
    fs::create_dir_all(waroot.path().join("src/fmt")).unwrap();
    fs::write(waroot.path().join("src/fmt/fmt.wa"), "func Println() {}").unwrap();

    let cfg = Config {
        waroot: Some(waroot.path().to_path_buf()),
    };
    let (_, vfs) = load_program_meta(&cfg, "os").unwrap();

    assert_eq!(vfs.std.read("fmt/fmt.wa").unwrap(), b"func Println() {}");
}

#[test]
fn assembly_is_idempotent_for_unchanged_disk_state() {
    let temp_dir = TempDir::new().unwrap();
    let entry = temp_dir.path().join("main.wa");
    fs::write(&entry, "//wa:embed data.txt\nfunc main() {}\n").unwrap();
    fs::write(temp_dir.path().join("data.txt"), "hello").unwrap();

    let (m1, v1) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();
    let (m2, v2) = load_file_meta(&Config::default(), &entry, SourceInput::Absent).unwrap();

    assert_eq!(m1, m2);
    for path in ["main.wa", "data.txt"] {
        assert_eq!(v1.app.read(path).unwrap(), v2.app.read(path).unwrap());
    }
}
