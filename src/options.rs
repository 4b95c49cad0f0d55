use crate::error::{Error, Result};

/// Height ceiling before anything has been inserted.
pub const DEFAULT_INITIAL_MAX_LEVEL: usize = 8;

/// Floor applied whenever the ceiling is recomputed from the entry count.
/// Keeps small lists from being starved of height.
pub const DEFAULT_MIN_MAX_LEVEL: usize = 10;

/// Hard ceiling on any tower. `floor(log2(len))` only exceeds this past
/// four billion entries.
pub const DEFAULT_MAX_LEVEL_LIMIT: usize = 32;

/// Tuning knobs for the height ceiling of a [`SkipList`](crate::SkipList).
///
/// ```
/// use skiplist_kv::Options;
///
/// let opts = Options::new().with_min_max_level(4).with_initial_max_level(4);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    initial_max_level: usize,
    min_max_level: usize,
    max_level_limit: usize,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Creates options with the default values.
    #[inline]
    pub const fn new() -> Self {
        Self {
            initial_max_level: DEFAULT_INITIAL_MAX_LEVEL,
            min_max_level: DEFAULT_MIN_MAX_LEVEL,
            max_level_limit: DEFAULT_MAX_LEVEL_LIMIT,
        }
    }

    /// Sets the ceiling used before the first insert.
    #[inline]
    pub const fn with_initial_max_level(mut self, level: usize) -> Self {
        self.initial_max_level = level;
        self
    }

    /// Sets the floor of the recomputed ceiling.
    #[inline]
    pub const fn with_min_max_level(mut self, level: usize) -> Self {
        self.min_max_level = level;
        self
    }

    /// Sets the hard ceiling no tower may exceed.
    #[inline]
    pub const fn with_max_level_limit(mut self, level: usize) -> Self {
        self.max_level_limit = level;
        self
    }

    /// Ceiling used before the first insert.
    #[inline]
    pub const fn initial_max_level(&self) -> usize {
        self.initial_max_level
    }

    /// Floor of the recomputed ceiling.
    #[inline]
    pub const fn min_max_level(&self) -> usize {
        self.min_max_level
    }

    /// Hard ceiling no tower may exceed.
    #[inline]
    pub const fn max_level_limit(&self) -> usize {
        self.max_level_limit
    }

    /// Checks that the three levels are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        if self.max_level_limit == 0 {
            return Err(Error::InvalidOptions("max_level_limit must be > 0".into()));
        }
        if self.initial_max_level > self.max_level_limit {
            return Err(Error::InvalidOptions(format!(
                "initial_max_level {} exceeds max_level_limit {}",
                self.initial_max_level, self.max_level_limit
            )));
        }
        if self.min_max_level > self.max_level_limit {
            return Err(Error::InvalidOptions(format!(
                "min_max_level {} exceeds max_level_limit {}",
                self.min_max_level, self.max_level_limit
            )));
        }
        Ok(())
    }

    /// The ceiling for a list holding `len` entries whose tallest tower
    /// reaches `top_level`.
    ///
    /// `max(min_max_level, floor(log2(len)))`, never below `top_level` and
    /// never above `max_level_limit`.
    pub(crate) fn max_level_for(&self, len: usize, top_level: usize) -> usize {
        let log2 = len.checked_ilog2().unwrap_or(0) as usize;
        self.min_max_level
            .max(log2)
            .max(top_level)
            .min(self.max_level_limit)
    }
}
