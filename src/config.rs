use crate::constants::{DEFAULT_CONCATENATOR, DEFAULT_MAX_FIXED_SEQUENCES};
use crate::models::{CompounderConfig, MatchMode};

pub const DEFAULT_COMPOUNDER_CONFIG: &CompounderConfig = &CompounderConfig {
    concatenator: DEFAULT_CONCATENATOR,
    match_mode: MatchMode::Glob,
    case_insensitive: true,
    max_fixed_sequences: DEFAULT_MAX_FIXED_SEQUENCES,
};
