//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 과정과 노출된 엔드포인트를 터미널에 보기 좋게 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  Users API                       ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let border = "═".repeat(50);
    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
pub fn print_step_complete(step: u8, description: &str) {
    println!("✓ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ users indexes: OK
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 기동 완료 후 노출된 인터페이스를 요약합니다.
pub fn print_endpoints_summary(http_addr: &str, grpc_addr: &str, trust_mode: &str) {
    println!();
    print_boxed_title("🚀 USERS API READY");
    println!("   🌐 REST:       http://{}/api", http_addr);
    println!("   🔮 GraphQL:    http://{}/graphql", http_addr);
    println!("   🛝 Playground: http://{}/playground", http_addr);
    println!("   📡 gRPC:       {}", grpc_addr);
    println!("   💚 Health:     http://{}/health", http_addr);
    println!("   🔐 Trust mode: {}", trust_mode);
    println!();
}
