//! Database Connection Management Module
//!
//! MongoDB 연결을 관리합니다. `STORAGE_BACKEND=mongodb`일 때만 사용됩니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="assessment_db"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new().await?;
//! let store = MongoEmployeeStore::new(&database, "employees");
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::errors::{AppError, AppResult};

const APP_NAME: &str = "employee_directory_service";

/// MongoDB 클라이언트와 데이터베이스 이름을 묶은 핸들
///
/// `Client`는 내부적으로 커넥션 풀을 가지며 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정(`MONGODB_URI`, `DATABASE_NAME`)으로 연결합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await
    }

    /// 연결 후 `ping`으로 도달 가능 여부를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StorageUnavailable` - URI 파싱 실패, 연결 실패, ping 실패
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::StorageUnavailable(format!("MongoDB URI 파싱 실패: {}", e)))?;

        // 모니터링용 애플리케이션 이름
        client_options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::StorageUnavailable(format!("MongoDB 클라이언트 생성 실패: {}", e)))?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::StorageUnavailable(format!("MongoDB 연결 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
