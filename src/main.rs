use prototype_registry::clients::PrototypeClient;
use prototype_registry::lifecycle::{setup_tracing, RegistrySystem};
use prototype_registry::model::{Category, User, UserOverrides};
use prototype_registry::user_prototype::UserError;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting prototype registry demo");

    let system = RegistrySystem::new();

    // One prototype per category, except WRITER
    let prototypes = [
        User::new(1, "admin", "admin@example.com", "Administrator", 40, Category::Admin),
        User::new(2, "reader", "reader@example.com", "Reader", 30, Category::Reader),
    ];

    let span = tracing::info_span!("registration");
    async {
        for user in prototypes {
            system
                .user_client
                .register_user(user)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("cloning");
    async {
        for category in Category::ALL {
            match system.user_client.clone_prototype(category).await {
                Ok(user) => info!(%category, username = user.username(), "Cloned prototype"),
                Err(UserError::NotRegistered(category)) => {
                    info!(%category, "No prototype for category")
                }
                Err(e) => error!(error = %e, "Clone failed"),
            }
        }

        let overrides = UserOverrides {
            user_id: Some(3),
            username: Some("second_admin".to_string()),
            ..Default::default()
        };
        match system.user_client.clone_user_with(Category::Admin, overrides).await {
            Ok(user) => info!(user_id = user.user_id(), username = user.username(), "Derived new admin"),
            Err(e) => error!(error = %e, "Clone with overrides failed"),
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
