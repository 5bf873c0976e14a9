#[derive(Debug, Clone)]
pub struct Config {
    /// Objects a region may hold directly before it tries to subdivide.
    pub max_objects: usize,
    /// Maximum subdivision depth; the root sits at level 0.
    pub max_levels: usize,
    /// Keep at most this many pruned node slots around for reuse.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_objects: 4,
            max_levels: 6,
            pool_size: 4000,
        }
    }
}
