use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryRegistryStore;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryRegistryStore>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryRegistryStore>>,
}

impl AppState {
    pub fn in_memory(store: Arc<InMemoryRegistryStore>) -> Self {
        Self {
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(store.clone())),
            queries: store,
        }
    }
}
