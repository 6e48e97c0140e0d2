//! Standard-library registry: the fixed set of import paths shipped with
//! the toolchain and the built-in source bundle used when no root
//! override is configured.

use std::collections::BTreeMap;

use crate::vfs::Layer;

/// Import paths shipped with the toolchain. Membership here decides
/// standard-library mode without touching disk.
const STD_PKGS: &[&str] = &[
    "bytes",
    "errors",
    "fmt",
    "io",
    "math",
    "os",
    "runtime",
    "sort",
    "strconv",
    "strings",
    "syscall",
    "unicode",
    "unicode/utf8",
];

/// Sources bundled into the toolchain itself, keyed by path relative to
/// the standard-library root.
const BUILTIN_SRC: &[(&str, &str)] = &[
    ("errors/errors.wa", include_str!("../waroot/src/errors/errors.wa")),
    ("fmt/fmt.wa", include_str!("../waroot/src/fmt/fmt.wa")),
    ("math/math.wa", include_str!("../waroot/src/math/math.wa")),
    ("os/os.wa", include_str!("../waroot/src/os/os.wa")),
    ("runtime/runtime.wa", include_str!("../waroot/src/runtime/runtime.wa")),
    ("strings/strings.wa", include_str!("../waroot/src/strings/strings.wa")),
];

/// Decide whether an import path names a package shipped with the
/// toolchain
pub fn is_std_pkg(pkgpath: &str) -> bool {
    STD_PKGS.contains(&pkgpath)
}

/// The built-in standard-library bundle as an in-memory layer
pub fn builtin_fs() -> Layer {
    let files: BTreeMap<String, Vec<u8>> = BUILTIN_SRC
        .iter()
        .map(|(path, src)| (path.to_string(), src.as_bytes().to_vec()))
        .collect();
    Layer::Memory(files)
}
