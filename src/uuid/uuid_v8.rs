use crate::utils::now_millis;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

const UUID_VERSION: u64 = 8;
const COUNTER_BITS: u32 = 12;
const COUNTER_MASK: u64 = (1 << COUNTER_BITS) - 1;
const VARIANT_RFC4122: u64 = 0b10 << 62;
const RANDOM_MASK: u64 = (1 << 62) - 1;

/// Last issued `(millis << 12) | counter` tick.
static LAST_TICK: AtomicU64 = AtomicU64::new(0);

/// Time-ordered 128-bit identifier.
///
/// Layout of the most significant half: 48 bits of UNIX milliseconds, a 4-bit
/// version (`8`), then a 12-bit counter. The least significant half carries
/// the RFC 4122 variant followed by 62 random bits.
///
/// Ids generated within one process compare strictly increasing; when more
/// than 4096 ids are requested in a millisecond the counter borrows from the
/// timestamp field rather than repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid {
    msb: u64,
    lsb: u64,
}

impl Uuid {
    pub fn generate() -> Self {
        let tick = next_tick(now_millis());
        let millis = tick >> COUNTER_BITS;
        let counter = tick & COUNTER_MASK;

        Self {
            msb: (millis << 16) | (UUID_VERSION << 12) | counter,
            lsb: VARIANT_RFC4122 | (rand::random::<u64>() & RANDOM_MASK),
        }
    }

    pub const fn from_parts(msb: u64, lsb: u64) -> Self {
        Self { msb, lsb }
    }

    pub const fn msb(&self) -> u64 {
        self.msb
    }

    pub const fn lsb(&self) -> u64 {
        self.lsb
    }

    /// Milliseconds since the UNIX epoch encoded in the id.
    pub const fn timestamp_millis(&self) -> u64 {
        self.msb >> 16
    }

    pub const fn version(&self) -> u8 {
        ((self.msb >> 12) & 0xF) as u8
    }
}

fn next_tick(now_ms: u64) -> u64 {
    let mut prev = LAST_TICK.load(Ordering::Relaxed);
    loop {
        let candidate = if (prev >> COUNTER_BITS) >= now_ms {
            prev + 1
        } else {
            now_ms << COUNTER_BITS
        };

        match LAST_TICK.compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => {
                if (candidate >> COUNTER_BITS) > now_ms {
                    tracing::trace!(
                        "Uuid tick ahead of clock by {} ms",
                        (candidate >> COUNTER_BITS) - now_ms
                    );
                }
                return candidate;
            }
            Err(actual) => prev = actual,
        }
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.msb >> 32,
            (self.msb >> 16) & 0xFFFF,
            self.msb & 0xFFFF,
            self.lsb >> 48,
            self.lsb & 0xFFFF_FFFF_FFFF
        )
    }
}
