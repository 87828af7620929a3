//! menu-client against a real listening server
//! Run: cargo test -p menu-server --test client_e2e

use std::time::Duration;

use menu_client::{
    AdminSession, CatalogStore, ClientConfig, Credentials, FixedCredentials, Language,
    ProductInput, ReviewInput, SessionStorage,
};
use menu_server::{Config, Server, ServerState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct Running {
    _dir: tempfile::TempDir,
    base_url: String,
    stop: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl Running {
    async fn start() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        config.shutdown_timeout_ms = 500;
        let state = ServerState::initialize(&config).await.unwrap();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (stop, stopped) = oneshot::channel::<()>();
        let server = Server::with_state(config, state);
        let handle = tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            _dir: dir,
            base_url,
            stop: Some(stop),
            handle,
        }
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url).with_timeout(5)
    }

    async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        tokio::time::timeout(Duration::from_secs(5), &mut self.handle)
            .await
            .expect("server did not stop")
            .unwrap();
    }
}

fn input(name: &str, category: &str, subcategory: Option<&str>, popular: bool) -> ProductInput {
    ProductInput {
        name: Some(name.into()),
        price: Some(10.0),
        category: Some(category.into()),
        subcategory: subcategory.map(Into::into),
        is_popular: popular,
        ..Default::default()
    }
}

#[tokio::test]
async fn admin_manages_catalog_and_guest_browses_it() {
    let server = Running::start().await;
    let config = server.client_config();
    let client = config.build_http_client().unwrap();

    // Admin logs in before mutating the catalog
    let session_dir = tempfile::tempdir().unwrap();
    let mut session = AdminSession::restore(
        FixedCredentials::default(),
        SessionStorage::new(session_dir.path(), menu_client::auth::SESSION_FILE),
    );
    assert!(session.login(&Credentials::new("admin", "wrong")).is_err());
    assert!(!session.is_logged_in());
    session.login(&Credentials::new("admin", "admin123")).unwrap();
    assert!(session.is_logged_in());

    let burger = client
        .create_product(&input("Burger", "Main", Some("Meat"), true))
        .await
        .unwrap();
    client
        .create_product(&input("Juice", "Drinks", None, false))
        .await
        .unwrap();

    let err = client
        .create_product(&ProductInput::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());

    // Guest view
    let store = CatalogStore::new(config.build_http_client().unwrap(), Language::Ar);
    store.refresh().await;
    let state = store.snapshot();
    assert_eq!(state.products().len(), 2);
    assert!(state.categories().contains_key("Main"));
    assert!(state.categories()["Drinks"].is_empty());

    store.update(|s| s.select_category("Main"));
    let visible = store.read(|s| s.visible_products());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, burger.id);
    assert_eq!(store.read(|s| s.subcategory_options()), vec!["Meat"]);

    // Deleting the product empties its category
    client.delete_product(&burger.id).await.unwrap();
    let err = client.delete_product(&burger.id).await.unwrap_err();
    assert!(err.is_not_found());

    store.refresh().await;
    let state = store.snapshot();
    assert!(state.visible_products().is_empty());
    assert!(!state.categories().contains_key("Main"));

    server.shutdown().await;
}

#[tokio::test]
async fn review_moderation_over_http() {
    let server = Running::start().await;
    let client = server.client_config().build_http_client().unwrap();

    let reply = client
        .submit_review(&ReviewInput {
            name: Some("Ali".into()),
            phone: Some("0501234567".into()),
            comment: Some("Excellent".into()),
            rating: Some(5),
        })
        .await
        .unwrap();
    assert_eq!(reply.message, "Review submitted successfully");

    assert!(client.list_reviews(true).await.unwrap().is_empty());
    let all = client.list_reviews(false).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].is_approved);

    let approved = client.set_review_approval(&all[0].id, true).await.unwrap();
    assert!(approved.is_approved);
    assert_eq!(client.list_reviews(true).await.unwrap().len(), 1);

    client.delete_review(&all[0].id).await.unwrap();
    let err = client.set_review_approval(&all[0].id, true).await.unwrap_err();
    assert!(err.is_not_found());

    let health = client.health().await.unwrap();
    assert_eq!(health["status"], "healthy");

    server.shutdown().await;
}
