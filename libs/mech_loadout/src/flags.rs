//! Bit flag sets that travel as single wire bytes.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// The boolean pilot talents of a loadout.
    ///
    /// Exactly one byte on the wire; the bit assignment is part of the
    /// link format contract and must not be reordered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[repr(transparent)]
    pub struct Efficiencies: u8 {
        const SPEED_TWEAK = 1 << 0;
        const COOL_RUN = 1 << 1;
        const HEAT_CONTAINMENT = 1 << 2;
        const ANCHOR_TURN = 1 << 3;
        const ARM_REFLEX = 1 << 4;
        const QUICK_IGNITION = 1 << 5;
        const HARD_BRAKE = 1 << 6;
        const KINETIC_BURST = 1 << 7;
    }
}

bitflags::bitflags! {
    /// Toggleable arm actuators on swappable-pod chassis.
    ///
    /// Packed into the low-order bits of the actuator wire byte; the high
    /// bits are reserved and must stay zero.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[repr(transparent)]
    pub struct ActuatorState: u8 {
        const RIGHT_LOWER_ARM = 1 << 0;
        const RIGHT_HAND = 1 << 1;
        const LEFT_LOWER_ARM = 1 << 2;
        const LEFT_HAND = 1 << 3;
    }
}
