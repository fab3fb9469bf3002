use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Ordered service classes. `Cs0` is the lowest, `Cs6` the highest.
#[repr(u8)]
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, TryFromPrimitive, IntoPrimitive,
)]
pub enum UPriority {
    Cs0 = 0,
    Cs1 = 1,
    Cs2 = 2,
    Cs3 = 3,
    Cs4 = 4,
    Cs5 = 5,
    Cs6 = 6,
}

impl UPriority {
    pub const ALL: [UPriority; 7] = [
        UPriority::Cs0,
        UPriority::Cs1,
        UPriority::Cs2,
        UPriority::Cs3,
        UPriority::Cs4,
        UPriority::Cs5,
        UPriority::Cs6,
    ];

    #[inline]
    pub fn value(self) -> u8 {
        self.into()
    }
}
