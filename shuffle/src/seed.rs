use tracing::debug;

use crate::error::ShuffleError;

/// Supplies the seed used when the caller doesn't provide one explicitly.
pub trait SeedSource {
    fn initial_seed(&self) -> u64;
}

/// Seeds from the current wall-clock time, in whole seconds since the UNIX
/// epoch. Two runs within the same second will shuffle identically.
#[derive(Default, Debug, Clone, Copy)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn initial_seed(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn initial_seed(&self) -> u64 {
        self.0
    }
}

/// Picks the seed for a run: the explicit value if there is one (it has to be
/// a valid unsigned 64-bit integer), otherwise whatever `fallback` supplies.
pub fn resolve_seed<S: SeedSource>(
    explicit: Option<&str>,
    fallback: &S,
) -> Result<u64, ShuffleError> {
    match explicit {
        Some(value) => {
            let seed = value
                .parse::<u64>()
                .map_err(|_| ShuffleError::InvalidSeed(value.to_string()))?;
            debug!("Using explicit seed {seed}.");
            Ok(seed)
        }
        None => {
            let seed = fallback.initial_seed();
            debug!("No explicit seed given, using default seed {seed}.");
            Ok(seed)
        }
    }
}
