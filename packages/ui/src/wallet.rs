//! Browser wallet bridge for the record write-through.
//!
//! After the backend has stored a record, its reference is also written to the
//! health-access contract through the injected `window.ethereum` provider:
//! request accounts, send a `createRecord(patientId, ipfsHash)` transaction,
//! then poll for the receipt.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("MetaMask is not installed")]
    NotInstalled,
    #[error("no contract address configured")]
    NoContract,
    #[error("wallet returned no account")]
    NoAccount,
    #[error("wallet request failed: {0}")]
    Request(String),
    #[error("transaction {0} reverted")]
    Reverted(String),
    #[error("no receipt for transaction {0}")]
    Timeout(String),
    #[error("wallet access is only available in the browser")]
    Unsupported,
}

/// Seconds to wait for a receipt before giving up.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const RECEIPT_POLLS: u32 = 120;

/// Receipt `status` is `0x1` on success and `0x0` on revert. Pre-Byzantium
/// receipts carry no status and count as success.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn receipt_succeeded(status: Option<&str>) -> bool {
    !matches!(status, Some("0x0"))
}

/// Write a record reference to the contract and return the transaction hash.
pub async fn create_record_on_chain(
    contract_address: Option<String>,
    patient_id: String,
    ipfs_hash: String,
) -> Result<String, WalletError> {
    let contract = contract_address.ok_or(WalletError::NoContract)?;
    imp::send_create_record(&contract, &patient_id, &ipfs_hash).await
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::time::Duration;

    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{receipt_succeeded, WalletError, RECEIPT_POLLS};

    fn js_err(value: JsValue) -> WalletError {
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        WalletError::Request(message)
    }

    fn provider() -> Result<Object, WalletError> {
        let window = web_sys::window().ok_or(WalletError::NotInstalled)?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|_| WalletError::NotInstalled)?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(WalletError::NotInstalled);
        }
        Ok(ethereum.unchecked_into())
    }

    fn set(target: &Object, key: &str, value: &str) -> Result<(), WalletError> {
        Reflect::set(target, &JsValue::from_str(key), &JsValue::from_str(value))
            .map(|_| ())
            .map_err(js_err)
    }

    /// EIP-1193 `provider.request({ method, params })`.
    async fn request(provider: &Object, method: &str, params: Array) -> Result<JsValue, WalletError> {
        let args = Object::new();
        set(&args, "method", method)?;
        Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(js_err)?;

        let request: Function = Reflect::get(provider, &JsValue::from_str("request"))
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        let promise: Promise = request
            .call1(provider, &args)
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        JsFuture::from(promise).await.map_err(js_err)
    }

    async fn wait_for_receipt(provider: &Object, hash: &str) -> Result<(), WalletError> {
        for _ in 0..RECEIPT_POLLS {
            let receipt = request(
                provider,
                "eth_getTransactionReceipt",
                Array::of1(&JsValue::from_str(hash)),
            )
            .await?;
            if !receipt.is_null() && !receipt.is_undefined() {
                let status = Reflect::get(&receipt, &JsValue::from_str("status"))
                    .ok()
                    .and_then(|s| s.as_string());
                if receipt_succeeded(status.as_deref()) {
                    return Ok(());
                }
                return Err(WalletError::Reverted(hash.to_string()));
            }
            gloo_timers::future::sleep(Duration::from_secs(1)).await;
        }
        Err(WalletError::Timeout(hash.to_string()))
    }

    pub async fn send_create_record(
        contract: &str,
        patient_id: &str,
        ipfs_hash: &str,
    ) -> Result<String, WalletError> {
        let provider = provider()?;

        let accounts = request(&provider, "eth_requestAccounts", Array::new()).await?;
        let from = Array::from(&accounts)
            .get(0)
            .as_string()
            .ok_or(WalletError::NoAccount)?;

        let data = api::contract::to_hex_data(&api::contract::create_record_call(patient_id, ipfs_hash));
        let tx = Object::new();
        set(&tx, "from", &from)?;
        set(&tx, "to", contract)?;
        set(&tx, "data", &data)?;

        let hash = request(&provider, "eth_sendTransaction", Array::of1(&tx))
            .await?
            .as_string()
            .ok_or_else(|| WalletError::Request("wallet returned no transaction hash".to_string()))?;
        tracing::info!("Submitted record transaction {hash}");

        wait_for_receipt(&provider, &hash).await?;
        Ok(hash)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::WalletError;

    pub async fn send_create_record(
        _contract: &str,
        _patient_id: &str,
        _ipfs_hash: &str,
    ) -> Result<String, WalletError> {
        Err(WalletError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_receipt_status() {
        assert!(receipt_succeeded(Some("0x1")));
        assert!(receipt_succeeded(None));
        assert!(!receipt_succeeded(Some("0x0")));
    }

    #[test]
    fn test_requires_contract_address() {
        let result = block_on(create_record_on_chain(None, "p1".into(), "rec-1".into()));
        assert_eq!(result, Err(WalletError::NoContract));
    }

    #[test]
    fn test_native_build_has_no_wallet() {
        let result = block_on(create_record_on_chain(
            Some("0x5FbDB2315678afecb367f032d93F642f64180aa3".into()),
            "p1".into(),
            "rec-1".into(),
        ));
        assert_eq!(result, Err(WalletError::Unsupported));
    }
}
