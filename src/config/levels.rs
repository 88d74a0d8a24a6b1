//! Calculator configuration

/// Settings for the digit-gate ladder
pub struct GateLadderSettings {
    // Step size for digit-sum residues 1, 4, 7
    pub step_low: i64,
    // Step size for digit-sum residues 2, 5, 8
    pub step_mid: i64,
    // Step size for digit-sum residues 3, 6, 9
    pub step_high: i64,
    // How many rungs a ladder projects from the input level
    pub rung_count: usize,
}

/// Settings for the fixed 3/6/9 step ladder
pub struct StepLadderSettings {
    // Successive offsets applied to the last-two-digit base
    pub offsets: [i64; 3],
}

/// Settings for the square-root reversal level
pub struct ReversalSettings {
    // Offset applied to the square root before squaring back
    pub root_offset: f64,
}

/// The Master Calculator Configuration
pub struct LevelsConfig {
    // Whole-level calculators require at least two digits, i.e. values >= 10
    pub min_whole_level: i64,

    // Sub-groups
    pub gate_ladder: GateLadderSettings,
    pub step_ladder: StepLadderSettings,
    pub reversal: ReversalSettings,
}

pub const LEVELS: LevelsConfig = LevelsConfig {
    min_whole_level: 10,

    gate_ladder: GateLadderSettings {
        step_low: 12,
        step_mid: 15,
        step_high: 18,
        rung_count: 10,
    },

    step_ladder: StepLadderSettings {
        offsets: [3, 6, 9],
    },

    reversal: ReversalSettings { root_offset: 2.0 },
};
