//! Logic for reading launch events off the chain.
//!
//! A `Launch.NewLaunch` event carries the SCALE encoding of
//! `(sender, recipient, parameter)` where the parameter is a fixed 32-byte
//! value. The raw record stays private to the crate; consumers get a
//! [`LaunchEvent`] with the parameter already rendered as the `0x…` payload
//! string the codec understands.

use parity_scale_codec::Decode;
pub use subxt::utils::AccountId32;

/// Pallet emitting launch events.
pub const LAUNCH_PALLET: &str = "Launch";
/// Event variant announcing a new launch.
pub const NEW_LAUNCH_EVENT: &str = "NewLaunch";

/// Wire shape of the `NewLaunch` event fields.
#[derive(Decode)]
pub(crate) struct NewLaunchRecord {
    pub sender: AccountId32,
    pub recipient: AccountId32,
    pub param: [u8; 32],
}

/// A launch addressed to some account, as delivered to the application.
///
/// Ephemeral by design: events are handed over once and nothing is retained
/// if the consumer drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEvent {
    pub sender: AccountId32,
    pub recipient: AccountId32,
    /// The encoded launch parameter: `0x` + 64 lowercase hex digits.
    pub param: String,
}

impl From<NewLaunchRecord> for LaunchEvent {
    fn from(record: NewLaunchRecord) -> Self {
        Self {
            sender: record.sender,
            recipient: record.recipient,
            param: format!("0x{}", hex::encode(record.param)),
        }
    }
}

/// Decodes the field bytes of a `NewLaunch` event.
pub(crate) fn decode_new_launch(
    bytes: &[u8],
) -> Result<NewLaunchRecord, parity_scale_codec::Error> {
    NewLaunchRecord::decode(&mut &bytes[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_new_launch_field_bytes() {
        // SCALE of (AccountId32, AccountId32, [u8; 32]) is the plain
        // concatenation of the three fixed-size arrays.
        let mut bytes = Vec::with_capacity(96);
        bytes.extend_from_slice(&[0x11; 32]);
        bytes.extend_from_slice(&[0x22; 32]);
        let mut param = [0u8; 32];
        param[0] = b'2';
        bytes.extend_from_slice(&param);

        let event = LaunchEvent::from(decode_new_launch(&bytes).unwrap());
        assert_eq!(event.sender, AccountId32([0x11; 32]));
        assert_eq!(event.recipient, AccountId32([0x22; 32]));
        assert_eq!(
            event.param,
            "0x3200000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn rejects_truncated_field_bytes() {
        assert!(decode_new_launch(&[0u8; 95]).is_err());
    }

    #[test]
    fn param_rendering_matches_the_codec() {
        let mut param = [0u8; 32];
        param[0] = b'0';
        let mut bytes = vec![0u8; 64];
        bytes.extend_from_slice(&param);

        let event = LaunchEvent::from(decode_new_launch(&bytes).unwrap());
        assert_eq!(launchlink_codec::decode(&event.param).unwrap(), "0");
    }
}
