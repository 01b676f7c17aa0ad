use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::duration_seconds;

pub const STORE_BY_CN: &str = "cn";
pub const STORE_BY_SERIAL: &str = "serial";

pub const DEFAULT_CHAIN_OPTION: &str = "last";
pub const DEFAULT_KEY_TYPE: &str = "rsa";
pub const DEFAULT_KEY_BITS: u32 = 2048;
pub const DEFAULT_KEY_CURVE: &str = "P256";
pub const DEFAULT_SERVER_TIMEOUT_SECONDS: i64 = 180;

/// A role configuration rejected at create/update time.
///
/// Each variant carries the caller-visible message for one invariant.
/// [`RoleEntry::validate`] reports at most one of these per call, in a fixed
/// order, so callers always see the first violated invariant only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleValidationError {
    #[error("Invalid mode. fakemode or apikey or tpp credentials required")]
    NoAuthorityMode,
    #[error(r#""ttl" value must be less than "max_ttl" value"#)]
    TtlExceedsMaxTtl,
    #[error("TPP credentials and Cloud API key can't be specified in one role")]
    MixedTppAndCloudCredentials,
    #[error("Can't specify both store_by and store_by_cn or store_by_serial options")]
    StoreByWithDeprecatedStoreOptions,
    #[error("Can't specify both no_store and store_by_cn or store_by_serial options")]
    NoStoreWithDeprecatedStoreOptions,
    #[error("Can't specify both no_store and store_by options")]
    NoStoreWithStoreBy,
    #[error("Option store_by can be {STORE_BY_SERIAL} or {STORE_BY_CN}, not {0}")]
    UnknownStoreByValue(String),
}

/// One role's configuration: which certificate authority to use, how to
/// reach it, and the issuance and storage policy applied to certificates
/// produced under the role.
///
/// This is the persisted shape, secrets included. It is written to storage
/// under `role/<name>` and must round-trip losslessly, so the legacy string
/// fields written by old versions are kept even though nothing validates
/// them any more. Callers are only ever shown the redacted [`RoleView`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoleEntry {
    pub tpp_url: String,
    pub cloud_url: String,
    pub zone: String,
    pub tpp_user: String,
    pub tpp_password: String,
    pub apikey: String,
    pub trust_bundle_file: String,
    pub fakemode: bool,
    pub chain_option: String,
    pub store_by_cn: bool,
    pub store_by_serial: bool,
    pub store_by: String,
    pub no_store: bool,
    pub service_generated_cert: bool,
    pub store_pkey: bool,
    pub key_type: String,
    pub key_bits: u32,
    pub key_curve: String,
    #[serde(rename = "ttl_duration", with = "duration_seconds")]
    pub ttl: Duration,
    #[serde(rename = "max_ttl_duration", with = "duration_seconds")]
    pub max_ttl: Duration,
    pub generate_lease: bool,
    #[serde(with = "duration_seconds")]
    pub server_timeout: Duration,

    // Lease configuration written by old versions under the bare ttl/max_ttl
    // names. Only decoded and re-encoded, never interpreted.
    #[serde(rename = "ttl")]
    pub legacy_ttl: String,
    #[serde(rename = "max_ttl")]
    pub legacy_max_ttl: String,
    pub lease: String,
    pub lease_max: String,
}

impl Default for RoleEntry {
    fn default() -> Self {
        RoleEntry {
            tpp_url: String::new(),
            cloud_url: String::new(),
            zone: String::new(),
            tpp_user: String::new(),
            tpp_password: String::new(),
            apikey: String::new(),
            trust_bundle_file: String::new(),
            fakemode: false,
            chain_option: DEFAULT_CHAIN_OPTION.to_string(),
            store_by_cn: false,
            store_by_serial: false,
            store_by: String::new(),
            no_store: false,
            service_generated_cert: false,
            store_pkey: false,
            key_type: DEFAULT_KEY_TYPE.to_string(),
            key_bits: DEFAULT_KEY_BITS,
            key_curve: DEFAULT_KEY_CURVE.to_string(),
            ttl: Duration::zero(),
            max_ttl: Duration::zero(),
            generate_lease: false,
            server_timeout: Duration::seconds(DEFAULT_SERVER_TIMEOUT_SECONDS),
            legacy_ttl: String::new(),
            legacy_max_ttl: String::new(),
            lease: String::new(),
            lease_max: String::new(),
        }
    }
}

impl RoleEntry {
    /// Checks that the entry is internally consistent.
    ///
    /// The checks run in a fixed order and stop at the first violation:
    /// authority mode, TTL ordering, the two TPP/Cloud exclusivity checks,
    /// the three storage-selector exclusivity checks, then the
    /// storage-selector value. Runs before any write, so a rejected entry
    /// leaves no partial state behind.
    pub fn validate(&self) -> Result<(), RoleValidationError> {
        if !self.fakemode
            && self.apikey.is_empty()
            && (self.tpp_url.is_empty() || self.tpp_user.is_empty() || self.tpp_password.is_empty())
        {
            return Err(RoleValidationError::NoAuthorityMode);
        }

        if self.max_ttl > Duration::zero() && self.ttl > self.max_ttl {
            return Err(RoleValidationError::TtlExceedsMaxTtl);
        }

        if !self.tpp_url.is_empty() && !self.apikey.is_empty() {
            return Err(RoleValidationError::MixedTppAndCloudCredentials);
        }

        if !self.tpp_user.is_empty() && !self.apikey.is_empty() {
            return Err(RoleValidationError::MixedTppAndCloudCredentials);
        }

        if (self.store_by_cn || self.store_by_serial) && !self.store_by.is_empty() {
            return Err(RoleValidationError::StoreByWithDeprecatedStoreOptions);
        }

        if (self.store_by_cn || self.store_by_serial) && self.no_store {
            return Err(RoleValidationError::NoStoreWithDeprecatedStoreOptions);
        }

        if !self.store_by.is_empty() && self.no_store {
            return Err(RoleValidationError::NoStoreWithStoreBy);
        }

        if !self.store_by.is_empty()
            && self.store_by != STORE_BY_SERIAL
            && self.store_by != STORE_BY_CN
        {
            return Err(RoleValidationError::UnknownStoreByValue(
                self.store_by.clone(),
            ));
        }

        Ok(())
    }

    /// Folds the deprecated store_by_cn/store_by_serial flags into the
    /// store_by selector. Serial wins when both flags are set. Applied after
    /// validation has passed, never interleaved with it, so the persisted
    /// record always carries the normalized selector. The flags themselves
    /// are kept so callers still see what they originally wrote.
    pub fn migrate_deprecated_store_options(&mut self) {
        if self.store_by_serial {
            self.store_by = STORE_BY_SERIAL.to_string();
        } else if self.store_by_cn {
            self.store_by = STORE_BY_CN.to_string();
        }
    }

    /// The caller-facing projection of the entry. The TPP password and the
    /// Cloud API key never leave the storage layer; TTL fields are rendered
    /// back to whole seconds.
    pub fn to_view(&self) -> RoleView {
        RoleView {
            tpp_url: self.tpp_url.clone(),
            cloud_url: self.cloud_url.clone(),
            zone: self.zone.clone(),
            tpp_user: self.tpp_user.clone(),
            trust_bundle_file: self.trust_bundle_file.clone(),
            fakemode: self.fakemode,
            chain_option: self.chain_option.clone(),
            store_by_cn: self.store_by_cn,
            store_by_serial: self.store_by_serial,
            store_by: self.store_by.clone(),
            no_store: self.no_store,
            service_generated_cert: self.service_generated_cert,
            store_pkey: self.store_pkey,
            key_type: self.key_type.clone(),
            key_bits: self.key_bits,
            key_curve: self.key_curve.clone(),
            ttl: self.ttl.num_seconds(),
            max_ttl: self.max_ttl.num_seconds(),
            generate_lease: self.generate_lease,
            server_timeout: self.server_timeout.num_seconds(),
        }
    }
}

/// Redacted role record returned by the read operation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoleView {
    pub tpp_url: String,
    pub cloud_url: String,
    pub zone: String,
    pub tpp_user: String,
    pub trust_bundle_file: String,
    pub fakemode: bool,
    pub chain_option: String,
    pub store_by_cn: bool,
    pub store_by_serial: bool,
    pub store_by: String,
    pub no_store: bool,
    pub service_generated_cert: bool,
    pub store_pkey: bool,
    pub key_type: String,
    pub key_bits: u32,
    pub key_curve: String,
    pub ttl: i64,
    pub max_ttl: i64,
    pub generate_lease: bool,
    pub server_timeout: i64,
}
