use tahniyat_application::GreetingService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub greeting_service: GreetingService,
    pub redis_client: redis::Client,
}
