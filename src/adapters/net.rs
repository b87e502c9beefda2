//! Best-effort local IP lookup for the splash screen.
//!
//! "Connecting" a UDP socket only selects a route; no packet is sent.
//! The socket's local address is then the address of the outgoing
//! interface.

use std::net::{IpAddr, UdpSocket};

pub const NOT_CONNECTED: &str = "Not connected";

const PROBE_TARGET: &str = "8.8.8.8:80";

pub fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(PROBE_TARGET).ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_unspecified()).then_some(ip)
}

/// The address as text, or [`NOT_CONNECTED`].
pub fn local_ip_label() -> String {
    local_ip().map_or_else(|| NOT_CONNECTED.to_owned(), |ip| ip.to_string())
}
