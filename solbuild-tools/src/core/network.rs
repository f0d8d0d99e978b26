// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown network {name}; configured networks: {known}")]
    Unknown { name: String, known: String },

    #[error("network {network} has no url{}", missing_url_hint(.var))]
    MissingUrl {
        network: String,
        var: Option<String>,
    },

    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
}

fn missing_url_hint(var: &Option<String>) -> String {
    match var {
        Some(var) => format!("; set {var} in the environment or .env file"),
        None => String::new(),
    }
}
