use directory_core::repositories::{CompensationRepository, EmployeeRepository};
use directory_core::services::{CompensationService, EmployeeService};
use directory_infrastructure::Store;
use directory_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Store, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Fresh repository session for this request
    pub fn employee_service(&self) -> EmployeeService<dyn EmployeeRepository> {
        EmployeeService::new(self.store.employee_repository())
    }

    pub fn compensation_service(&self) -> CompensationService<dyn CompensationRepository, dyn EmployeeRepository> {
        CompensationService::new(
            self.store.compensation_repository(),
            self.store.employee_repository(),
        )
    }
}
