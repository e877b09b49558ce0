// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discovery records returned by the cloud lookup endpoint.

use serde::{Deserialize, Serialize};

/// A bridge registered on the local network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeAddress {
    /// Bridge identifier.
    pub id: String,
    /// Address of the bridge on the local network.
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nupnp_record() {
        let records: Vec<BridgeAddress> = serde_json::from_str(
            r#"[{"id":"0000000000000001","internalipaddress":"192.168.1.100"}]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![BridgeAddress {
                id: "0000000000000001".to_string(),
                internal_ip_address: "192.168.1.100".to_string(),
            }]
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let record = BridgeAddress {
            id: "1".to_string(),
            internal_ip_address: "10.0.0.2".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"id": "1", "internalipaddress": "10.0.0.2"})
        );
    }
}
