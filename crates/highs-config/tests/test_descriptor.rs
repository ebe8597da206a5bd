//! Integration tests for the compiled descriptor

use highs_config::{
    backend_target, default_thread_count, enabled_features, index_width, is_feature_enabled,
    log_build_info, provenance, symbols, version_info, version_string, BackendTarget, Feature,
    IndexWidth, CONFIG,
};
use pretty_assertions::assert_eq;
use std::thread;

#[test]
fn test_backend_follows_cargo_features() {
    let expected = if cfg!(feature = "cupdlp-gpu") {
        BackendTarget::Gpu
    } else {
        BackendTarget::Cpu
    };
    assert_eq!(backend_target(), expected);
    assert_ne!(
        is_feature_enabled(Feature::CupdlpCpu),
        is_feature_enabled(Feature::CupdlpGpu)
    );
}

#[test]
fn test_index_width_follows_cargo_features() {
    let expected = if cfg!(feature = "int64") {
        IndexWidth::Bits64
    } else {
        IndexWidth::Bits32
    };
    assert_eq!(index_width(), expected);
}

#[test]
fn test_optional_flags_follow_cargo_features() {
    assert_eq!(CONFIG.fast_build, cfg!(feature = "fast-build"));
    assert_eq!(CONFIG.zlib_found, cfg!(feature = "zlib"));
    assert_eq!(CONFIG.force_native, cfg!(feature = "cupdlp-force-native"));
    assert_eq!(CONFIG.no_default_threads, cfg!(feature = "no-default-threads"));
    assert_eq!(default_thread_count().is_none(), CONFIG.no_default_threads);
}

#[test]
fn test_version_matches_package() {
    let info = version_info();
    assert_eq!(info.major.to_string(), env!("CARGO_PKG_VERSION_MAJOR"));
    assert_eq!(info.minor.to_string(), env!("CARGO_PKG_VERSION_MINOR"));
    assert_eq!(info.patch.to_string(), env!("CARGO_PKG_VERSION_PATCH"));
    assert!(!info.githash.is_empty());
    assert_eq!(
        version_string(),
        format!(
            "HiGHS {}.{}.{} (git hash: {})",
            info.major, info.minor, info.patch, info.githash
        )
    );
}

#[test]
fn test_provenance_is_recorded() {
    let provenance = provenance();
    assert!(!provenance.build_type.is_empty());
    assert_eq!(provenance.build_type, symbols::CMAKE_BUILD_TYPE);
    assert_eq!(provenance.install_prefix, symbols::CMAKE_INSTALL_PREFIX);
    assert_eq!(provenance.source_dir, symbols::HIGHS_DIR);
}

#[test]
fn test_enabled_features_include_backend() {
    let enabled: Vec<Feature> = enabled_features().collect();
    let backend = match backend_target() {
        BackendTarget::Cpu => Feature::CupdlpCpu,
        BackendTarget::Gpu => Feature::CupdlpGpu,
    };
    assert!(enabled.contains(&backend));
}

#[test]
fn test_concurrent_reads_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| (version_info(), provenance(), version_string())))
        .collect();
    for handle in handles {
        let (info, provenance, banner) = handle.join().unwrap();
        assert_eq!(info, version_info());
        assert_eq!(provenance, highs_config::provenance());
        assert_eq!(banner, version_string());
    }
}

#[test]
fn test_log_build_info_does_not_panic() {
    let _ = env_logger::builder().is_test(true).try_init();
    log_build_info();
}

#[cfg(feature = "serde")]
#[test]
fn test_record_serializes() {
    let json = serde_json::to_value(CONFIG).unwrap();
    assert_eq!(json["githash"], CONFIG.githash);
    assert_eq!(json["version"]["major"], CONFIG.version.major);
}

#[test]
fn test_value_types_are_shared_with_types_crate() {
    let backend: highs_config_types::BackendTarget = backend_target();
    let width: highs_config_types::IndexWidth = index_width();
    assert_eq!(backend, CONFIG.backend);
    assert_eq!(width, CONFIG.index_width);
    assert_eq!(
        CONFIG.version,
        highs_config_types::Version::new(
            symbols::HIGHS_VERSION_MAJOR,
            symbols::HIGHS_VERSION_MINOR,
            symbols::HIGHS_VERSION_PATCH,
        )
    );
}

#[test]
fn test_generator_is_not_a_runtime_dependency() {
    let manifest = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
        .expect("manifest is readable");
    let mut section = "";
    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            section = line;
        } else if line.starts_with("highs-config-build") {
            assert_ne!(section, "[dependencies]", "generator linked into the library");
        }
    }
}
