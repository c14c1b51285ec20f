//! Build script for userdir-service.
//!
//! Compiles the protobuf definitions into Rust code using tonic-build and
//! emits the descriptor set used by the reflection service.

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../../proto/userdir.proto");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("userdir_descriptor.bin"))
        .compile_protos(&["../../proto/userdir.proto"], &["../../proto"])?;

    Ok(())
}
