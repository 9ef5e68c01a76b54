/// Concord engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Actor recorded as `created_by` on translations the engine merges on its own.
pub const SYSTEM_ACTOR: &str = "system";

/// Upper bound on candidates returned by a single discovery request.
pub const MAX_CANDIDATES: usize = 20;

/// Upper bound on resolved decisions considered by one insights computation.
pub const MAX_INSIGHTS_WINDOW: usize = 10_000;
