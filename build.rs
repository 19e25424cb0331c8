fn main() {
    // Writes $OUT_DIR/built.rs with package and git metadata.
    if let Err(err) = built::write_built_file() {
        println!("cargo:warning=failed to acquire build-time information: {err}");
    }
}
