//! Device address discovery seam.
//!
//! Enumerating network interfaces is platform work that lives outside
//! this workspace. The codec only needs the resulting IPv4 address, so the
//! enumerator is reached through [`Ipv4AddressSource`].

use std::net::{IpAddr, Ipv4Addr};

/// Reports the IPv4 address of the device, if one is available.
pub trait Ipv4AddressSource {
    fn ipv4_address(&self) -> Option<Ipv4Addr>;
}

impl Ipv4AddressSource for Ipv4Addr {
    fn ipv4_address(&self) -> Option<Ipv4Addr> {
        Some(*self)
    }
}

/// A snapshot of the addresses bound to the device's interfaces, in the
/// order the platform enumerated them.
#[derive(Debug, Clone, Default)]
pub struct InterfaceAddresses {
    addresses: Vec<IpAddr>,
}

impl InterfaceAddresses {
    pub fn new(addresses: impl IntoIterator<Item = IpAddr>) -> Self {
        Self {
            addresses: addresses.into_iter().collect(),
        }
    }
}

impl Ipv4AddressSource for InterfaceAddresses {
    /// The first IPv4 address that is not a loopback address.
    fn ipv4_address(&self) -> Option<Ipv4Addr> {
        self.addresses.iter().find_map(|addr| match addr {
            IpAddr::V4(v4) if !v4.is_loopback() => Some(*v4),
            _ => None,
        })
    }
}
