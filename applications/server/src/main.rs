/// TuneX Server - music-sharing web service
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tunex_core::{CreateUser, Role};
use tunex_server::{
    api,
    config::ServerConfig,
    services::{AuthService, FileStorage},
    state::AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tunex-server")]
#[command(about = "TuneX music-sharing server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role names to assign (ADMIN, CREATOR, USER)
        #[arg(short, long, default_value = "USER")]
        roles: Vec<String>,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunex_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser {
            email,
            username,
            password,
            roles,
        } => {
            add_user(&email, &username, &password, &roles).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting TuneX Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = tunex_storage::create_pool(&config.storage.database_url).await?;
    tunex_storage::run_migrations(&pool).await?;
    tunex_storage::seed::ensure_defaults(&pool).await?;
    tracing::info!("Database connected");

    // Initialize file storage
    let file_storage = FileStorage::new(config.storage.upload_path.clone());
    file_storage.initialize().await?;
    let file_storage = Arc::new(file_storage);
    tracing::info!("File storage initialized");

    // Initialize auth service
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));
    tracing::info!("Auth service initialized");

    // Bootstrap the admin account if absent
    if tunex_storage::users::find_by_email(&pool, &config.auth.admin_email)
        .await?
        .is_none()
    {
        let password_hash = auth_service.hash_password(&config.auth.admin_password)?;
        tunex_storage::users::create(
            &pool,
            CreateUser {
                username: "TUNEX_ADMIN".to_string(),
                email: config.auth.admin_email.clone(),
                password_hash,
                roles: vec![Role::Admin],
            },
        )
        .await?;
        tracing::info!("Bootstrap admin created: {}", config.auth.admin_email);
    }

    // Build application state and router
    let app_state = AppState::new(pool, Arc::clone(&auth_service), file_storage);
    let app = api::router(app_state, auth_service);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(email: &str, username: &str, password: &str, roles: &[String]) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = tunex_storage::create_pool(&config.storage.database_url).await?;
    tunex_storage::run_migrations(&pool).await?;
    tunex_storage::seed::ensure_defaults(&pool).await?;

    let roles = roles
        .iter()
        .map(|name| {
            Role::from_str(name).ok_or_else(|| anyhow::anyhow!("Invalid role: {}", name))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );
    let password_hash = auth_service.hash_password(password)?;

    let user = tunex_storage::users::create(
        &pool,
        CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            roles,
        },
    )
    .await?;

    println!("Created user {} <{}> (id {})", user.username, user.email, user.id);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = tunex_storage::create_pool(&config.storage.database_url).await?;
    tunex_storage::run_migrations(&pool).await?;

    let users = tunex_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.username, user.email);
    }

    Ok(())
}
