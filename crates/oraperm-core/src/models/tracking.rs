//! Tracking data domain models.
//!
//! Tracking data is device telemetry sent alongside requests for audit
//! purposes. Either part may be unavailable on a given device.

use std::net::Ipv4Addr;

use crate::network::Ipv4AddressSource;

/// Physical location of the device running the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Seconds elapsed since the location fix was taken.
    pub seconds_since_update: i32,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, seconds_since_update: i32) -> Self {
        Self {
            latitude,
            longitude,
            seconds_since_update,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackingData {
    pub location: Option<Location>,
    /// IPv4 address octets, most significant first.
    pub ip_v4_address: Option<[u8; 4]>,
}

impl TrackingData {
    pub fn new(location: Option<Location>, ip_v4_address: Option<Ipv4Addr>) -> Self {
        Self {
            location,
            ip_v4_address: ip_v4_address.map(|addr| addr.octets()),
        }
    }

    /// Build tracking data from a location fix and whatever address the
    /// network-interface source reports.
    pub fn capture<S: Ipv4AddressSource + ?Sized>(location: Option<Location>, source: &S) -> Self {
        Self::new(location, source.ipv4_address())
    }

    /// Set the address from octets held in a signed byte representation.
    ///
    /// Octets above 127 arrive as negative values in two's complement;
    /// reinterpreting the bits (equivalent to masking with `0xFF`)
    /// recovers the unsigned octet.
    pub fn with_signed_octets(mut self, octets: [i8; 4]) -> Self {
        self.ip_v4_address = Some(octets.map(|b| b as u8));
        self
    }

    pub fn ip_v4_addr(&self) -> Option<Ipv4Addr> {
        self.ip_v4_address.map(Ipv4Addr::from)
    }
}
