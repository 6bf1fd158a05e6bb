// src/application/state.rs
//
// Everything a command needs, wired once at startup.

use std::sync::Arc;

use log::info;

use crate::config::{AppConfig, DataMode};
use crate::domain::Session;
use crate::error::AppResult;
use crate::events::{register_notification_handlers, EventBus, Notifications};
use crate::infrastructure::DownloadWorkspace;
use crate::integrations::ApiClient;
use crate::repositories::{
    ApplicationRepository, AuthGateway, FileSessionStore, HttpApplicationRepository,
    HttpAuthGateway, MemoryApplicationRepository, MemoryAuthGateway, SessionStore,
};
use crate::services::{ApplicationsService, AuthService, SubmissionService};

/// Shared application state.
/// All fields are Arc-wrapped so commands can run concurrently.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    /// Notices raised by the last commands, filled from the event bus
    pub notifications: Arc<Notifications>,
    pub sessions: Arc<dyn SessionStore>,
    pub applications: Arc<ApplicationsService>,
    pub submissions: Arc<SubmissionService>,
    pub auth: Arc<AuthService>,
    pub downloads: DownloadWorkspace,
}

impl AppState {
    /// Pick the repository strategy from `config.data_mode()` and wire
    /// the services around it.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let sessions: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file()));

        let (repository, gateway) = match config.data_mode() {
            DataMode::Mock => {
                let repository: Arc<dyn ApplicationRepository> =
                    Arc::new(MemoryApplicationRepository::new(config.mock_latency()));
                let gateway: Arc<dyn AuthGateway> = Arc::new(MemoryAuthGateway::new());
                (repository, gateway)
            }
            DataMode::Remote => {
                let client = Arc::new(
                    ApiClient::new(config.api_base_url()?, config.request_timeout())?
                        .with_sessions(Arc::clone(&sessions)),
                );
                let repository: Arc<dyn ApplicationRepository> =
                    Arc::new(HttpApplicationRepository::new(Arc::clone(&client)));
                let gateway: Arc<dyn AuthGateway> = Arc::new(HttpAuthGateway::new(client));
                (repository, gateway)
            }
        };

        info!(
            "data mode {:?} (api base {})",
            config.data_mode(),
            config.api_base_url
        );

        Ok(Self::new(config, repository, gateway, sessions))
    }

    /// Wire services around already-built strategies.
    pub fn new(
        config: AppConfig,
        repository: Arc<dyn ApplicationRepository>,
        gateway: Arc<dyn AuthGateway>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let notifications = Arc::new(Notifications::new());
        register_notification_handlers(&event_bus, Arc::clone(&notifications));

        let applications = Arc::new(ApplicationsService::new(repository, Arc::clone(&event_bus)));
        let submissions = Arc::new(SubmissionService::new(
            Arc::clone(&applications),
            Arc::clone(&event_bus),
        ));
        let auth = Arc::new(AuthService::new(
            gateway,
            Arc::clone(&sessions),
            Arc::clone(&event_bus),
        ));
        let downloads = DownloadWorkspace::new(config.download_dir());

        Self {
            config,
            event_bus,
            notifications,
            sessions,
            applications,
            submissions,
            auth,
            downloads,
        }
    }

    /// Admin-only locations go through here.
    pub fn authorize(&self, location: &str) -> AppResult<Session> {
        self.auth.guard(true).authorize(location)
    }
}
