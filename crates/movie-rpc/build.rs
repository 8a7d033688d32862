fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the movie service contract (client and server stubs)
    println!("cargo:rerun-if-changed=../../proto/movies.proto");
    tonic_build::compile_protos("../../proto/movies.proto")?;
    Ok(())
}
