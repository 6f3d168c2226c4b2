//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Setup:
//!     (method, template(s), handler)
//!     → pattern.rs (parse once into literal/parameter segments)
//!     → router.rs (append per method, registration order kept)
//!     → Freeze: Arc<Router> handed to the serving layer
//!
//! Per request (method, raw path, body):
//!     → path.rs (strip query and base path, normalize slashes)
//!     → router.rs (walk every template for the method)
//!     → pattern.rs (segment-wise match, capture args)
//!     → invoke each distinct matched handler once
//!     → default handler if nothing matched
//! ```
//!
//! # Design Decisions
//! - No regex, no wildcards: literal or `{name}` segments only
//! - Deterministic: same input always invokes the same handlers in the same order
//! - All matching handlers run, not just the first

pub mod args;
pub mod path;
pub mod pattern;
pub mod router;

pub use args::MatchArgs;
pub use pattern::{Pattern, Segment};
pub use router::{Patterns, Router};
