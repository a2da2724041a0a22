use rustc_version::{version_meta, Channel};

// Benchmarks under `#[bench]` need the unstable `test` crate, so they are
// only compiled when the toolchain is nightly.
fn main() {
    let meta = match version_meta() {
        Ok(meta) => meta,
        Err(_) => return,
    };
    assert!(meta.semver.major >= 1);

    if let Channel::Nightly = meta.channel {
        println!("cargo:rustc-cfg=rustc_nightly");
    }
}
