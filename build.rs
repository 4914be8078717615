use vergen_gitcl::{Build, Cargo, Emitter, Gitcl};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = Build::builder().build_timestamp(true).build();
    let cargo = Cargo::builder().build();
    let gitcl = Gitcl::builder().branch(true).sha(true).dirty(true).build();

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&gitcl)?
        .emit()?;

    // Server stubs are generated alongside the client; the integration
    // tests run an in-process stub server against them.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/prediction.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/prediction.proto");

    Ok(())
}
