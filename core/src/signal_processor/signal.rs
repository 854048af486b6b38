use crate::context::IStr;

/// Signals emitted by the EventProcessor for session-level changes the host
/// may want to surface. Per-hit damage is not signalled; read the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSignal {
    /// A non-rest zone change cleared the registry and window
    SessionReset { zone_name: String },
    /// Zone change into a configured rest zone; the session was kept
    RestZoneEntered { zone_name: String },
    PlayerRegistered { player: IStr, spec_id: u32 },
    PetRegistered { owner: IStr, pet: IStr },
}
