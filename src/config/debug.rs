//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; they are further gated behind
//! `cfg(debug_assertions)` at the call sites so release builds stay quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (program switching, manual actions).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub static DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_state_serde: false,
    print_shutdown: false,
};
