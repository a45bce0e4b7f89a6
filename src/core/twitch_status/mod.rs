pub mod channel_name;
pub mod response_format;
pub mod status_config;
pub mod status_models;
pub mod status_request;
pub mod status_service;

pub use channel_name::extract_channel_name;
pub use status_config::{ConfigError, TwitchStatusConfig};
pub use status_request::{
    StatusOutcome, StatusRequest, StatusRequestBuilder, StatusTransport, TransportError,
};
pub use status_service::{Conversation, ReplyError, ReplySink, TwitchStatusService};
