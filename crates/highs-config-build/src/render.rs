//! Rendering of the descriptor.
//!
//! Both renderers are pure functions of [`BuildOptions`]: identical options
//! always produce byte-identical text. [`write_if_changed`] preserves that
//! property on disk by leaving an up-to-date file untouched.

use crate::error::Result;
use crate::options::BuildOptions;
use crate::symbols::{Symbol, SymbolValue};
use std::fs;
use std::path::{Path, PathBuf};

/// Include guard of the generated header.
pub const HEADER_GUARD: &str = "HCONFIG_H_";
/// File name of the generated header.
pub const HEADER_FILE: &str = "HConfig.h";
/// File name of the generated Rust constants.
pub const RUST_FILE: &str = "hconfig.rs";

/// Render `HConfig.h`.
///
/// Defined flags become `#define NAME`, undefined flags are kept as
/// `/* #undef NAME */` comments, strings are quoted and integers bare.
pub fn render_header(options: &BuildOptions) -> String {
    let mut out = format!("#ifndef {HEADER_GUARD}\n#define {HEADER_GUARD}\n\n");
    for symbol in options.feature_symbols() {
        out.push_str(&c_define(&symbol));
    }
    out.push('\n');
    for symbol in options.provenance_symbols() {
        out.push_str(&c_define(&symbol));
    }
    out.push('\n');
    out.push_str(&format!("#endif /* {HEADER_GUARD} */\n"));
    out
}

/// One header line for `symbol`, newline included.
fn c_define(symbol: &Symbol<'_>) -> String {
    let name = symbol.name;
    match symbol.value {
        SymbolValue::Flag(true) => format!("#define {name}\n"),
        SymbolValue::Flag(false) => format!("/* #undef {name} */\n"),
        SymbolValue::Str(value) => format!("#define {name} {}\n", c_string_literal(value)),
        SymbolValue::Int(value) => format!("#define {name} {value}\n"),
    }
}

fn c_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// One documented Rust constant for `symbol`, preceded by a blank line.
fn rust_const(symbol: &Symbol<'_>) -> String {
    let name = symbol.name;
    match symbol.value {
        SymbolValue::Flag(defined) => {
            let state = if defined { "defined" } else { "undefined" };
            format!("\n/// `{name}` ({state}).\npub const {name}: bool = {defined};\n")
        }
        SymbolValue::Str(value) => format!("\n/// `{name}`.\npub const {name}: &str = {value:?};\n"),
        SymbolValue::Int(value) => format!("\n/// `{name}`.\npub const {name}: u32 = {value};\n"),
    }
}

/// Render the Rust constants that `highs-config` includes.
///
/// Presence flags become `bool` constants, so undefined flags still have
/// a name to query. Two C-string constants back the C API.
pub fn render_rust(options: &BuildOptions) -> String {
    let mut out = String::from("// @generated by highs-config-build. Do not edit.\n");
    for symbol in options.symbols() {
        out.push_str(&rust_const(&symbol));
    }
    out.push_str(&format!(
        "\n/// `HIGHS_GITHASH` as a NUL-terminated string.\n\
         pub const HIGHS_GITHASH_CSTR: &::core::ffi::CStr = c{:?};\n",
        options.githash()
    ));
    out.push_str(&format!(
        "\n/// Dotted version as a NUL-terminated string.\n\
         pub const HIGHS_VERSION_CSTR: &::core::ffi::CStr = c{:?};\n",
        options.version().to_string()
    ));
    out
}

/// Write `contents` to `path` unless the file already holds exactly that.
///
/// Returns whether the file was written. Parent directories are created
/// as needed.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool> {
    if let Ok(existing) = fs::read(path) {
        if existing == contents.as_bytes() {
            return Ok(false);
        }
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(true)
}

/// Paths of the files written by [`write_descriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    /// Rust constants, for `include!`
    pub rust: PathBuf,
    /// Directory holding `HConfig.h`, for C include paths
    pub include_dir: PathBuf,
    /// The header itself
    pub header: PathBuf,
}

/// Render and write both descriptor files under `out_dir`.
///
/// The Rust constants go to `out_dir/hconfig.rs` and the header to
/// `out_dir/include/HConfig.h`.
pub fn write_descriptor(options: &BuildOptions, out_dir: &Path) -> Result<GeneratedFiles> {
    options.validate()?;
    let include_dir = out_dir.join("include");
    let files = GeneratedFiles {
        rust: out_dir.join(RUST_FILE),
        header: include_dir.join(HEADER_FILE),
        include_dir,
    };
    write_if_changed(&files.rust, &render_rust(options))?;
    write_if_changed(&files.header, &render_header(options))?;
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BackendTarget, Version};

    fn options() -> BuildOptions {
        BuildOptions::builder()
            .backend(BackendTarget::Cpu)
            .version(Version::new(1, 10, 0))
            .githash("fd8665394e")
            .source_dir("/src/HiGHS")
            .build()
            .unwrap()
    }

    #[test]
    fn test_header_has_guard() {
        let header = render_header(&options());
        assert!(header.starts_with("#ifndef HCONFIG_H_\n#define HCONFIG_H_\n\n"));
        assert!(header.ends_with("\n#endif /* HCONFIG_H_ */\n"));
    }

    #[test]
    fn test_every_symbol_kind_renders_one_line() {
        let cases = [
            (Symbol { name: "FAST_BUILD", value: SymbolValue::Flag(true) }, "#define FAST_BUILD\n"),
            (Symbol { name: "FAST_BUILD", value: SymbolValue::Flag(false) }, "/* #undef FAST_BUILD */\n"),
            (Symbol { name: "HIGHS_GITHASH", value: SymbolValue::Str("abc") }, "#define HIGHS_GITHASH \"abc\"\n"),
            (Symbol { name: "HIGHS_VERSION_MAJOR", value: SymbolValue::Int(1) }, "#define HIGHS_VERSION_MAJOR 1\n"),
        ];
        for (symbol, line) in cases {
            assert_eq!(c_define(&symbol), line);
        }

        let header = render_header(&options());
        let defines = header
            .lines()
            .filter(|l| l.starts_with("#define ") || l.starts_with("/* #undef "))
            .count();
        // The include guard's own `#define` plus one line per symbol.
        assert_eq!(defines, 1 + options().symbols().count());

        let flag = Symbol { name: "ZLIB_FOUND", value: SymbolValue::Flag(false) };
        assert_eq!(
            rust_const(&flag),
            "\n/// `ZLIB_FOUND` (undefined).\npub const ZLIB_FOUND: bool = false;\n"
        );
    }

    #[test]
    fn test_c_string_escaping() {
        assert_eq!(c_string_literal("plain"), "\"plain\"");
        assert_eq!(c_string_literal(r#"C:\a "b""#), r#""C:\\a \"b\"""#);
    }

    #[test]
    fn test_rust_constants() {
        let rust = render_rust(&options());
        assert!(rust.contains("pub const CUPDLP_CPU: bool = true;\n"));
        assert!(rust.contains("pub const CUPDLP_GPU: bool = false;\n"));
        assert!(rust.contains("pub const HIGHS_GITHASH: &str = \"fd8665394e\";\n"));
        assert!(rust.contains("pub const HIGHS_VERSION_MINOR: u32 = 10;\n"));
        assert!(rust.contains("pub const HIGHS_DIR: &str = \"/src/HiGHS\";\n"));
        assert!(rust.contains("c\"fd8665394e\";\n"));
        assert!(rust.contains("c\"1.10.0\";\n"));
    }

    #[test]
    fn test_rust_string_escaping() {
        let options = BuildOptions::builder()
            .backend(BackendTarget::Cpu)
            .githash("abc")
            .source_dir(r#"C:\src\"HiGHS""#)
            .build()
            .unwrap();
        let rust = render_rust(&options);
        assert!(rust.contains(r#"pub const HIGHS_DIR: &str = "C:\\src\\\"HiGHS\"";"#));
    }

    #[test]
    fn test_write_if_changed() {
        let dir = std::env::temp_dir().join(format!(
            "highs-config-build-render-{}",
            std::process::id()
        ));
        let path = dir.join("nested").join("out.txt");

        assert!(write_if_changed(&path, "one").unwrap());
        assert!(!write_if_changed(&path, "one").unwrap());
        assert!(write_if_changed(&path, "two").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");

        let _ = fs::remove_dir_all(&dir);
    }
}
