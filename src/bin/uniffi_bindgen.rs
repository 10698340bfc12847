//! Generates Swift, Kotlin, Python and Ruby bindings for the glucosavor
//! library, so a native GUI can load a catalog and run lookups directly.
//!
//! ```bash
//! cargo build --release
//! cargo run --features cli --bin uniffi-bindgen generate \
//!     --library target/release/libglucosavor.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
