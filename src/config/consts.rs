/// Message emitted when no other message is configured
pub const DEFAULT_MESSAGE: &str = "Hello Golang";
/// Log filter used when `RUST_LOG` is unset; quiet enough that stderr stays empty
pub const DEFAULT_LOG_FILTER: &str = "warn";
