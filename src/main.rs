use chat_messages::{
    db::{create_pool, redact_database_url, run_migrations, DbPool},
    group::GroupRepository,
    message::{MessageInfoMapper, MessageRepository, MessageService, ParticipantAccess},
    private_chat::PrivateChatRepository,
    routes::create_router,
    state::{AppState, Config},
    user::UserRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn build_message_service(db: &DbPool, config: &Config) -> MessageService {
    let user_repository = UserRepository::new(db.clone());
    let group_repository = Arc::new(GroupRepository::new(db.clone()));
    let private_chat_repository = Arc::new(PrivateChatRepository::new(db.clone()));
    let message_repository = MessageRepository::new(db.clone());

    let service = MessageService::new(
        Arc::new(user_repository),
        group_repository.clone(),
        private_chat_repository.clone(),
        Arc::new(message_repository),
        Arc::new(MessageInfoMapper),
    );

    if config.enforce_chat_membership {
        tracing::info!("Chat membership is enforced on message reads");
        service.with_access(Arc::new(ParticipantAccess::new(
            group_repository,
            private_chat_repository,
        )))
    } else {
        service
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,chat_messages=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    tracing::info!(
        "Connecting to database at {}...",
        redact_database_url(&config.database_url)
    );
    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    let state = AppState {
        config: config.clone(),
        message_service: build_message_service(&db, &config),
    };

    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
