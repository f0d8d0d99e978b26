// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Accounts available on a configured network.

use alloy::{
    primitives::{Address, B256},
    providers::{Provider, ProviderBuilder},
    signers::local::{LocalSignerError, PrivateKeySigner},
};

use super::{config::NetworkConfig, network::NetworkError};
use crate::utils::decode0x;

const KEY_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum AccountsError {
    #[error("empty private key")]
    EmptyKey,
    #[error("private key is not valid hex: {0}")]
    KeyHex(#[from] hex::FromHexError),
    #[error("private key must be 32 bytes, got {0}")]
    KeyLength(usize),
    #[error("invalid private key: {0}")]
    Signer(#[from] LocalSignerError),

    #[error("{0}")]
    Network(#[from] NetworkError),
}

/// Address controlled by a hex-encoded private key.
pub fn signer_address(key: &str) -> Result<Address, AccountsError> {
    if key.trim().is_empty() {
        return Err(AccountsError::EmptyKey);
    }
    let bytes = decode0x(key)?;
    if bytes.len() != KEY_LEN {
        return Err(AccountsError::KeyLength(bytes.len()));
    }
    let signer = PrivateKeySigner::from_bytes(&B256::from_slice(&bytes))
        .map_err(LocalSignerError::from)?;
    Ok(signer.address())
}

/// Accounts the node at `url` manages itself (`eth_accounts`).
pub async fn node_accounts(url: &str) -> Result<Vec<Address>, NetworkError> {
    let provider = ProviderBuilder::new().connect(url).await?;
    provider_accounts(&provider).await
}

/// Accounts managed by the node behind `provider`.
pub async fn provider_accounts(provider: &impl Provider) -> Result<Vec<Address>, NetworkError> {
    let accounts = provider.get_accounts().await?;
    Ok(accounts)
}

/// Accounts of a network: its configured keys, or the node's own accounts if it has none.
pub async fn network_accounts(
    name: &str,
    network: &NetworkConfig,
) -> Result<Vec<Address>, AccountsError> {
    if !network.accounts.is_empty() {
        return network
            .accounts
            .iter()
            .map(|key| signer_address(key))
            .collect();
    }

    let url = network.require_url(name)?;
    debug!(@grey, "no keys configured for {name}, asking {url} for its accounts");
    Ok(node_accounts(url).await?)
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::address, transports::mock::Asserter};

    use super::*;

    const KEY_0: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const KEY_1: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn network(url: &str, accounts: &[&str]) -> NetworkConfig {
        NetworkConfig {
            url: url.to_string(),
            accounts: accounts.iter().map(|a| a.to_string()).collect(),
            url_var: Some("GOERLI_URL".to_string()),
        }
    }

    #[test]
    fn derives_address_from_key() {
        assert_eq!(
            signer_address(KEY_0).unwrap(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(
            signer_address(KEY_1).unwrap(),
            address!("70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn displays_checksummed() {
        let address = signer_address(KEY_0).unwrap();
        assert_eq!(
            address.to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(matches!(signer_address(""), Err(AccountsError::EmptyKey)));
        assert!(matches!(signer_address("  "), Err(AccountsError::EmptyKey)));
        assert!(matches!(
            signer_address("0x1234"),
            Err(AccountsError::KeyLength(2))
        ));
        assert!(matches!(
            signer_address("0xnothex"),
            Err(AccountsError::KeyHex(_))
        ));
        assert!(matches!(
            signer_address(&format!("0x{}", "00".repeat(32))),
            Err(AccountsError::Signer(_))
        ));
    }

    #[tokio::test]
    async fn node_accounts_are_checksummed() {
        let asserter = Asserter::new();
        asserter.push_success(&vec![
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
        ]);
        let provider = ProviderBuilder::new().connect_mocked_client(asserter);

        let accounts = provider_accounts(&provider).await.unwrap();
        let shown: Vec<String> = accounts.iter().map(ToString::to_string).collect();
        assert_eq!(
            shown,
            [
                "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
                "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            ]
        );
    }

    #[tokio::test]
    async fn node_without_accounts() {
        let asserter = Asserter::new();
        asserter.push_success(&Vec::<String>::new());
        let provider = ProviderBuilder::new().connect_mocked_client(asserter);
        assert!(provider_accounts(&provider).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn configured_keys_need_no_node() {
        let accounts = network_accounts("goerli", &network("", &[KEY_0, KEY_1]))
            .await
            .unwrap();
        assert_eq!(
            accounts,
            vec![
                address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
                address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            ]
        );
    }

    #[tokio::test]
    async fn no_keys_and_no_url_is_an_error() {
        let err = network_accounts("goerli", &network("", &[]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AccountsError::Network(NetworkError::MissingUrl { .. })
        ));
        assert!(err.to_string().contains("GOERLI_URL"), "{err}");
    }

    #[tokio::test]
    async fn one_bad_key_fails_the_network() {
        let err = network_accounts("goerli", &network("", &[KEY_0, ""]))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountsError::EmptyKey));
    }
}
