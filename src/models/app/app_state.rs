use crate::models::panel::Session;
use crate::services::AnalysisClient;
use tokio::sync::Mutex;

pub struct AppState {
    pub client: AnalysisClient,
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(client: AnalysisClient) -> Self {
        AppState {
            client,
            session: Mutex::new(Session::default()),
        }
    }
}
