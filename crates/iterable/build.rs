fn main() {
    println!("cargo::rustc-check-cfg=cfg(contiguous_cursors)");

    // The contiguous category is a build capability, resolved once here.
    if std::env::var_os("CARGO_FEATURE_CONTIGUOUS").is_some() {
        println!("cargo::rustc-cfg=contiguous_cursors");
    }
}
