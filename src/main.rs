//! 직원 디렉터리 서비스 메인 애플리케이션
//!
//! 저장소와 서비스를 조립하고 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use employee_directory_service::config::{DatabaseConfig, ServerConfig, StorageBackend};
use employee_directory_service::db::Database;
use employee_directory_service::errors::{AppError, AppResult};
use employee_directory_service::repositories::employees::{
    EmployeeStore, InMemoryEmployeeStore, MongoEmployeeStore,
};
use employee_directory_service::routes::configure_all_routes;
use employee_directory_service::services::auth::{AuthService, StaticCredentialVerifier, TokenService};
use employee_directory_service::services::employees::EmployeeService;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 파일을 먼저 읽어야 RUST_LOG가 반영된다
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let env_file = load_env_file(&profile);
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨 (profile: {})", file, profile),
        Err(e) => warn!("환경 파일 로드 실패 (profile: {}): {}", profile, e),
    }

    info!("🚀 직원 디렉터리 서비스 시작중...");

    let store = initialize_employee_store().await.map_err(to_io_error)?;

    let token_service = Arc::new(TokenService::from_config());
    let verifier = StaticCredentialVerifier::from_config().map_err(to_io_error)?;
    let auth_service = AuthService::new(Arc::new(verifier), token_service.clone());
    let employee_service = EmployeeService::new(store);

    info!(
        "✅ 모든 서비스가 성공적으로 초기화되었습니다! (토큰 TTL: {}분)",
        token_service.default_ttl().num_minutes()
    );

    start_http_server(token_service, auth_service, employee_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    token_service: Arc<TokenService>,
    auth_service: AuthService,
    employee_service: EmployeeService,
) -> io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다 (0 값 불가)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let token_data = web::Data::from(token_service);
    let auth_data = web::Data::new(auth_service);
    let employee_data = web::Data::new(employee_service);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 명시적으로 조립한 서비스 주입
            .app_data(token_data.clone())
            .app_data(auth_data.clone())
            .app_data(employee_data.clone())

            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// `STORAGE_BACKEND`에 따라 직원 저장소를 생성합니다
///
/// MongoDB를 사용하는 경우 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
async fn initialize_employee_store() -> AppResult<Arc<dyn EmployeeStore>> {
    let backend = DatabaseConfig::backend().map_err(AppError::InternalError)?;

    match backend {
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;

            let store = MongoEmployeeStore::new(&database, &DatabaseConfig::employee_collection());
            store.ensure_indexes().await?;

            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            warn!("인메모리 저장소 사용: 프로세스가 종료되면 데이터가 사라집니다");
            Ok(Arc::new(InMemoryEmployeeStore::new()))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file(profile: &str) -> Result<&'static str, dotenv::Error> {
    match profile {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=employee_directory_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와의 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig { per_second, burst_size };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

fn to_io_error(error: AppError) -> io::Error {
    error!("초기화 실패: {}", error);
    io::Error::other(error.to_string())
}
