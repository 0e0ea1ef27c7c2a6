use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("coastline.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("coastline.client.request_errors");

pub(crate) static LOGINS: Counter = Counter::new("coastline.auth.logins");
pub(crate) static UPLOADS: Counter = Counter::new("coastline.uploads.files");
pub(crate) static CHAT_TURNS: Counter = Counter::new("coastline.chat.turns");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&LOGINS);
    collector.register_counter(&UPLOADS);
    collector.register_counter(&CHAT_TURNS);
}
