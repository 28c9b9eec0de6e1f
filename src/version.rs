//! Version and build.

/// Return the program name.
pub const fn name() -> &'static str {
    match option_env!("PROGRAM_NAME") {
        Some(s) => s,
        None => "gridlocator",
    }
}

/// Return the program version.
pub const fn version() -> Option<&'static str> {
    option_env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod test {
    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(super::version(), Some(env!("CARGO_PKG_VERSION")));
        assert!(!super::name().is_empty());
    }
}
