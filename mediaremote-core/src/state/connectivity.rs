//! Network connectivity state

/// Wifi link as shown on the statistics page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalState {
    Connected,
    Disconnected,
}

/// Snapshot of wifi and API connectivity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConnectivityState {
    /// RSSI in dBm, NaN when unknown
    pub wifi_signal_dbm: f32,
    pub api_connected: bool,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        Self {
            wifi_signal_dbm: f32::NAN,
            api_connected: false,
        }
    }
}

impl ConnectivityState {
    /// Classify the wifi reading
    ///
    /// A real RSSI is always negative; NaN or a positive value means no link.
    pub fn signal(&self) -> SignalState {
        if self.wifi_signal_dbm.is_nan() || self.wifi_signal_dbm > 0.0 {
            SignalState::Disconnected
        } else {
            SignalState::Connected
        }
    }
}
