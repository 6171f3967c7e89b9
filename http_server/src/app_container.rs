use std::sync::Arc;
use use_cases::locations::LocationService;

pub struct Application {
    pub locations: Arc<dyn LocationService>,
}

impl Application {
    pub fn new(locations: Arc<dyn LocationService>) -> Self {
        Application { locations }
    }
}
