//! gRPC 코드 생성
//!
//! `proto/users.proto`에서 tonic 서버/클라이언트 코드를 생성합니다.
//! 시스템에 protoc가 없어도 빌드되도록 번들된 protoc 바이너리를 사용합니다.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("PROTOC").is_none() {
        let protoc = protoc_bin_vendored::protoc_bin_path()?;
        // build script는 단일 스레드로 실행됩니다
        unsafe {
            std::env::set_var("PROTOC", protoc);
        }
    }

    println!("cargo:rerun-if-changed=proto/users.proto");
    tonic_build::compile_protos("proto/users.proto")?;
    Ok(())
}
