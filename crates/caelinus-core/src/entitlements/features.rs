//! Well-known feature, content-type and daily-limit keys.
//!
//! Keys stay opaque strings in the evaluator so the backend can introduce new
//! ones without a release. These constants name the ones the app ships with.

/// Gated capabilities.
pub mod feature {
    /// SANRI queries beyond the daily free allowance.
    pub const UNLIMITED_QUERY: &str = "unlimited_query";
    /// Full guided ritual library.
    pub const RITUAL_LIBRARY: &str = "ritual_library";
    /// Long-form SANRI interpretation.
    pub const DEEP_ANALYSIS: &str = "deep_analysis";
    /// Spoken SANRI replies.
    pub const VOICE_MODE: &str = "voice_mode";
    /// Rituals generated for the user's own profile.
    pub const PERSONAL_RITUAL: &str = "personal_ritual";
    /// The invite-only oracle space.
    pub const ORACLE_CHAMBER: &str = "oracle_chamber";

    pub const ALL: [&str; 6] = [
        UNLIMITED_QUERY,
        RITUAL_LIBRARY,
        DEEP_ANALYSIS,
        VOICE_MODE,
        PERSONAL_RITUAL,
        ORACLE_CHAMBER,
    ];
}

/// List-style content whose visible length depends on the plan.
pub mod content {
    pub const CITIES_LIST: &str = "cities_list";
    pub const RITUALS_LIST: &str = "rituals_list";
}

/// Actions counted against a per-day cap.
pub mod daily {
    pub const SANRI_QUERY: &str = "sanri_query";
    pub const RITUAL_AUDIO: &str = "ritual_audio";
}

/// Human-readable description of a known feature key, for upgrade messages.
pub fn describe(feature_key: &str) -> Option<&'static str> {
    match feature_key {
        feature::UNLIMITED_QUERY => Some("Unlimited SANRI queries"),
        feature::RITUAL_LIBRARY => Some("The full guided ritual library"),
        feature::DEEP_ANALYSIS => Some("Deep SANRI analysis"),
        feature::VOICE_MODE => Some("Voice replies"),
        feature::PERSONAL_RITUAL => Some("Personal rituals"),
        feature::ORACLE_CHAMBER => Some("The Oracle chamber"),
        _ => None,
    }
}
