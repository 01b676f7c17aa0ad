use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::api::models::role::{
    RoleEntry, DEFAULT_CHAIN_OPTION, DEFAULT_KEY_BITS, DEFAULT_KEY_CURVE, DEFAULT_KEY_TYPE,
    DEFAULT_SERVER_TIMEOUT_SECONDS,
};

/// The field set accepted by the create/update role operation.
///
/// TTL and timeout values arrive as whole seconds and only become durations
/// once the body is turned into an entry. The zone is the only required
/// field; everything else takes the documented default when omitted. The
/// legacy lease fields are not part of this surface, they only exist on
/// records written by old versions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpsertRoleBody {
    #[serde(default)]
    pub tpp_url: String,
    #[serde(default)]
    pub cloud_url: String,
    pub zone: String,
    #[serde(default)]
    pub tpp_user: String,
    #[serde(default)]
    pub tpp_password: String,
    #[serde(default)]
    pub apikey: String,
    #[serde(default)]
    pub trust_bundle_file: String,
    #[serde(default)]
    pub fakemode: bool,
    #[serde(default = "default_chain_option")]
    pub chain_option: String,
    #[serde(default)]
    pub store_by_cn: bool,
    #[serde(default)]
    pub store_by_serial: bool,
    #[serde(default)]
    pub store_by: String,
    #[serde(default)]
    pub no_store: bool,
    #[serde(default)]
    pub service_generated_cert: bool,
    #[serde(default)]
    pub store_pkey: bool,
    #[serde(default = "default_key_type")]
    pub key_type: String,
    #[serde(default = "default_key_bits")]
    pub key_bits: u32,
    #[serde(default = "default_key_curve")]
    pub key_curve: String,
    #[serde(default)]
    pub ttl: i64,
    #[serde(default)]
    pub max_ttl: i64,
    #[serde(default)]
    pub generate_lease: bool,
    #[serde(default = "default_server_timeout")]
    pub server_timeout: i64,
}

fn default_chain_option() -> String {
    DEFAULT_CHAIN_OPTION.to_string()
}

fn default_key_type() -> String {
    DEFAULT_KEY_TYPE.to_string()
}

fn default_key_bits() -> u32 {
    DEFAULT_KEY_BITS
}

fn default_key_curve() -> String {
    DEFAULT_KEY_CURVE.to_string()
}

fn default_server_timeout() -> i64 {
    DEFAULT_SERVER_TIMEOUT_SECONDS
}

impl UpsertRoleBody {
    /// Builds the entry candidate that will be validated and persisted.
    /// Legacy lease fields always start out empty on a fresh write.
    pub fn into_entry(self) -> RoleEntry {
        RoleEntry {
            tpp_url: self.tpp_url,
            cloud_url: self.cloud_url,
            zone: self.zone,
            tpp_user: self.tpp_user,
            tpp_password: self.tpp_password,
            apikey: self.apikey,
            trust_bundle_file: self.trust_bundle_file,
            fakemode: self.fakemode,
            chain_option: self.chain_option,
            store_by_cn: self.store_by_cn,
            store_by_serial: self.store_by_serial,
            store_by: self.store_by,
            no_store: self.no_store,
            service_generated_cert: self.service_generated_cert,
            store_pkey: self.store_pkey,
            key_type: self.key_type,
            key_bits: self.key_bits,
            key_curve: self.key_curve,
            ttl: Duration::seconds(self.ttl),
            max_ttl: Duration::seconds(self.max_ttl),
            generate_lease: self.generate_lease,
            server_timeout: Duration::seconds(self.server_timeout),
            ..RoleEntry::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::UpsertRoleBody;

    #[test]
    fn zone_is_required() {
        let result = serde_json::from_value::<UpsertRoleBody>(json!({
            "fakemode": true,
        }));

        assert!(result.is_err());
    }

    #[test]
    fn omitted_fields_take_the_documented_defaults() -> anyhow::Result<()> {
        let body = serde_json::from_value::<UpsertRoleBody>(json!({
            "zone": "vault",
        }))?;

        assert_eq!(body.chain_option, "last");
        assert_eq!(body.key_type, "rsa");
        assert_eq!(body.key_bits, 2048);
        assert_eq!(body.key_curve, "P256");
        assert_eq!(body.ttl, 0);
        assert_eq!(body.max_ttl, 0);
        assert_eq!(body.server_timeout, 180);
        assert!(!body.fakemode);
        assert!(!body.generate_lease);

        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<UpsertRoleBody>(json!({
            "zone": "vault",
            "fakemode": true,
            "store_by_common_name": true,
        }));

        assert!(result.is_err());
    }

    #[test]
    fn second_counts_become_durations_on_the_entry() -> anyhow::Result<()> {
        let body = serde_json::from_value::<UpsertRoleBody>(json!({
            "zone": "vault",
            "fakemode": true,
            "ttl": 300,
            "max_ttl": 600,
            "server_timeout": 60,
        }))?;

        let entry = body.into_entry();

        assert_eq!(entry.ttl, Duration::seconds(300));
        assert_eq!(entry.max_ttl, Duration::seconds(600));
        assert_eq!(entry.server_timeout, Duration::seconds(60));
        assert_eq!(entry.legacy_ttl, "");
        assert_eq!(entry.lease, "");

        Ok(())
    }
}
