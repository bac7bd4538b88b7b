use crate::destination::DestinationResolver;
use std::time::Duration;

pub struct AppState {
    pub resolver: DestinationResolver,
    pub default_timeout: Duration,
}
