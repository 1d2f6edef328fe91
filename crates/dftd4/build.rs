fn main() {
    println!("cargo:rerun-if-env-changed=DFTD4_LIB_DIR");
    if let Ok(dir) = std::env::var("DFTD4_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }
    println!("cargo:rustc-link-lib=dylib=dftd4");
}
