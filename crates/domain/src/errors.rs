use thiserror::Error;

/// Error kinds for the resolver-routing core (§7).
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("construction failed: {0}")]
    ConstructionFailure(String),

    #[error("group '{0}' is unknown")]
    UnknownGroup(String),

    #[error("malformed duration: {0}")]
    MalformedDuration(String),

    #[error("upstream '{server}' failed: {source}")]
    UpstreamError {
        server: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("resolution failed, used resolvers '{a}' and '{b}': {errors:?}")]
    RaceExhausted {
        a: String,
        b: String,
        errors: Vec<String>,
    },
}
