/// Common test utilities and fixtures
use axum::Router;
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tunex_core::{CreateUser, Role};
use tunex_server::{
    api,
    services::{AuthService, FileStorage},
    state::AppState,
};

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Everything a test needs: the full router, the auth service, the pool,
/// and the temp dir holding the database and upload directory
pub struct TestApp {
    pub app: Router,
    pub auth_service: Arc<AuthService>,
    pub pool: SqlitePool,
    pub _temp_dir: TempDir,
}

/// Build the real application router over a temp-dir database
pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();

    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());
    let pool = tunex_storage::create_pool(&db_url).await.unwrap();
    tunex_storage::run_migrations(&pool).await.unwrap();
    tunex_storage::seed::ensure_defaults(&pool).await.unwrap();

    let file_storage = FileStorage::new(temp_dir.path().join("uploads"));
    file_storage.initialize().await.unwrap();
    let file_storage = Arc::new(file_storage);

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour access
        1, // 1 day refresh
    ));

    let app_state = AppState::new(pool.clone(), Arc::clone(&auth_service), file_storage);
    let app = api::router(app_state, Arc::clone(&auth_service));

    TestApp {
        app,
        auth_service,
        pool,
        _temp_dir: temp_dir,
    }
}

/// Create a user directly in storage with the standard test password
pub async fn create_user_with_roles(
    test_app: &TestApp,
    email: &str,
    username: &str,
    roles: &[Role],
) -> i64 {
    let password_hash = test_app.auth_service.hash_password(TEST_PASSWORD).unwrap();

    let user = tunex_storage::users::create(
        &test_app.pool,
        CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            roles: roles.to_vec(),
        },
    )
    .await
    .unwrap();

    user.id
}

/// Mint an access token for a user id and active role, bypassing the
/// login endpoint
pub fn access_token(test_app: &TestApp, user_id: i64, username: &str, role: Role) -> String {
    let session = tunex_server::middleware::AuthSession {
        user_id,
        username: username.to_string(),
        role,
    };
    test_app.auth_service.create_access_token(&session).unwrap()
}

/// A seeded song owned by `creator_id`, tagged with the first seeded genre
pub async fn create_song(test_app: &TestApp, title: &str, creator_id: i64) -> i64 {
    let genre = tunex_storage::genres::get_all(&test_app.pool)
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("Seeded genres missing");

    let song = tunex_storage::songs::create(
        &test_app.pool,
        tunex_core::CreateSong {
            title: title.to_string(),
            file_path: format!("/tmp/{}.mp3", title.to_lowercase()),
            duration_seconds: 200,
            creator_id,
            genre_id: genre.id,
        },
    )
    .await
    .unwrap();

    song.id
}

/// Minimal PCM WAV payload: 16-bit mono at 8 kHz, `seconds` of silence
pub fn test_wav_bytes(seconds: u32) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 8_000;
    const BYTES_PER_SAMPLE: u32 = 2;

    let data_len = SAMPLE_RATE * BYTES_PER_SAMPLE * seconds;

    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&(SAMPLE_RATE * BYTES_PER_SAMPLE).to_le_bytes());
    bytes.extend_from_slice(&(BYTES_PER_SAMPLE as u16).to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(44 + data_len as usize, 0);

    bytes
}

/// Build a multipart upload body for the creator upload endpoint
pub fn multipart_upload_body(
    boundary: &str,
    filename: &str,
    file_bytes: &[u8],
    title: &str,
    genre_id: i64,
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"song\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(
        format!(
            "\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"genre_id\"\r\n\r\n{genre_id}\r\n--{boundary}--\r\n"
        )
        .as_bytes(),
    );
    body
}

/// The id of the first seeded genre
pub async fn first_genre_id(test_app: &TestApp) -> i64 {
    tunex_storage::genres::get_all(&test_app.pool)
        .await
        .unwrap()
        .first()
        .expect("Seeded genres missing")
        .id
}

#[allow(dead_code)]
pub fn upload_dir(test_app: &TestApp) -> &Path {
    test_app._temp_dir.path()
}
