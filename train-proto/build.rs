fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto = "proto/train.proto";
    println!("cargo:rerun-if-changed={proto}");
    tonic_build::compile_protos(proto)?;
    Ok(())
}
