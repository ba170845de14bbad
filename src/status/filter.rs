//! Display filters for the detail view: validation and peer selection.
//!
//! Filters only narrow what the human-readable report shows. JSON and YAML
//! output always carry every peer.

use crate::error::ValidationError;
use crate::status::model::PeerState;
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::str::FromStr;

/// Connection-status criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    Any,
    Connected,
    Disconnected,
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_lowercase().as_str() {
            "" => Ok(StatusFilter::Any),
            "connected" => Ok(StatusFilter::Connected),
            "disconnected" => Ok(StatusFilter::Disconnected),
            _ => Err(ValidationError::InvalidStatusFilter(token.to_string())),
        }
    }
}

impl StatusFilter {
    pub fn matches(self, peer: &PeerState) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Connected => peer.conn_status.is_connected(),
            StatusFilter::Disconnected => !peer.conn_status.is_connected(),
        }
    }
}

/// Validated filter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    status: StatusFilter,
    ips: BTreeSet<String>,
}

impl FilterConfig {
    /// Validate the raw status token and IP list.
    ///
    /// All-or-nothing: the first bad entry fails the whole configuration.
    pub fn parse<S: AsRef<str>>(status: &str, ips: &[S]) -> Result<Self, ValidationError> {
        let status = StatusFilter::from_str(status)?;

        let mut allowed = BTreeSet::new();
        for addr in ips {
            let addr = addr.as_ref();
            IpAddr::from_str(addr).map_err(|source| ValidationError::InvalidIpFilter {
                addr: addr.to_string(),
                source,
            })?;
            allowed.insert(addr.to_string());
        }

        Ok(Self {
            status,
            ips: allowed,
        })
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn ips(&self) -> &BTreeSet<String> {
        &self.ips
    }

    /// True when the peer passes both criteria. IPs match literally, with
    /// no address normalization.
    pub fn retains(&self, peer: &PeerState) -> bool {
        self.status.matches(peer) && (self.ips.is_empty() || self.ips.contains(&peer.ip))
    }

    /// Peers that pass the filter, in input order.
    pub fn select<'a>(&self, peers: &'a [PeerState]) -> Vec<&'a PeerState> {
        peers.iter().filter(|peer| self.retains(peer)).collect()
    }
}
