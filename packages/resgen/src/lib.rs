//! Runtime support for modules generated by `resgen-build`.
//!
//! The generator writes `assets.rs` into `OUT_DIR` by default; consumers
//! pull it into their crate with:
//!
//! ```ignore
//! mod assets {
//!     resgen::include_assets!();
//! }
//! ```

#[macro_export]
#[cfg(windows)]
macro_rules! path_sep {
    () => {
        "\\"
    };
}
#[macro_export]
#[cfg(not(windows))]
macro_rules! path_sep {
    () => {
        "/"
    };
}

#[macro_export]
macro_rules! out_path {
    ($filename:expr) => {
        concat!(env!("OUT_DIR"), $crate::path_sep!(), $filename)
    };
}

/// Includes the generated asset module from `OUT_DIR`.
#[macro_export]
macro_rules! include_assets {
    () => {
        $crate::include_assets!("assets.rs");
    };
    ($filename:expr) => {
        include!($crate::out_path!($filename));
    };
}
