//! The visitor requesting a download.

use crate::settings::IpLoggingType;
use dlm_types::{DownloadId, UserId};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Request-scoped view of whoever is downloading.
///
/// `download_cookies` holds the downloads this visitor already carries a
/// "recently downloaded" cookie for; the host fills it from the request and
/// writes back whatever the logger adds.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    pub user_id: UserId,
    pub ip: Option<IpAddr>,
    pub user_agent: String,
    download_cookies: HashSet<DownloadId>,
}

impl Visitor {
    /// An anonymous visitor.
    #[must_use]
    pub fn new(ip: Option<IpAddr>, user_agent: &str) -> Self {
        Self {
            user_id: UserId::GUEST,
            ip,
            user_agent: user_agent.to_string(),
            download_cookies: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Marks downloads the request already carries cookies for.
    #[must_use]
    pub fn with_download_cookies(mut self, downloads: impl IntoIterator<Item = DownloadId>) -> Self {
        self.download_cookies.extend(downloads);
        self
    }

    #[must_use]
    pub fn has_download_cookie(&self, download: DownloadId) -> bool {
        self.download_cookies.contains(&download)
    }

    pub fn set_download_cookie(&mut self, download: DownloadId) {
        self.download_cookies.insert(download);
    }

    pub fn download_cookies(&self) -> impl Iterator<Item = DownloadId> + '_ {
        self.download_cookies.iter().copied()
    }

    /// The IP address as it should be stored for the given policy.
    #[must_use]
    pub fn logged_ip(&self, ip_type: IpLoggingType) -> Option<String> {
        let ip = self.ip?;
        match ip_type {
            IpLoggingType::Full => Some(ip.to_string()),
            IpLoggingType::Anonymized => Some(anonymize_ip(ip).to_string()),
            IpLoggingType::Disabled => None,
        }
    }

    /// Pseudonymous id for the visitor: SHA-256 of the IP as stored under
    /// `ip_type`. `None` when no IP is recorded.
    #[must_use]
    pub fn uuid(&self, ip_type: IpLoggingType) -> Option<String> {
        let ip = self.logged_ip(ip_type)?;
        Some(hex::encode(Sha256::digest(ip.as_bytes())))
    }
}

/// Drops the host part of an address: the last octet of IPv4, everything
/// after the first 48 bits of IPv6. IPv4-mapped IPv6 addresses are treated
/// as IPv4.
#[must_use]
pub fn anonymize_ip(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V4(v4) => IpAddr::V4(anonymize_v4(v4)),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V6(anonymize_v4(v4).to_ipv6_mapped()),
            None => {
                let s = v6.segments();
                IpAddr::V6(Ipv6Addr::new(s[0], s[1], s[2], 0, 0, 0, 0, 0))
            }
        },
    }
}

fn anonymize_v4(ip: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, _] = ip.octets();
    Ipv4Addr::new(a, b, c, 0)
}
