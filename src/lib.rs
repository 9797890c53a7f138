//! Spring-damped vertices for an interactive "spaghetti" curve.
//!
//! A [`Strand`] is a chain of [`Vertex`]es joined by quadratic curves. The
//! user plucks it with the pointer: a vertex under the pointer follows it,
//! and once the pointer leaves (or lets go) the vertex is launched along the
//! pointer's motion and springs back to where it started.
//!
//! Everything runs inside the host's animation frame:
//!
//! ```
//! use kurbo::Point;
//! use spaghetti::{MouseTracker, SpringSettings, Strand};
//!
//! let mut strand = Strand::new(
//!     Point::new(0.0, 100.0),
//!     Point::new(400.0, 100.0),
//!     9,
//!     SpringSettings::default(),
//!     None,
//! );
//! let mut mouse = MouseTracker::new();
//! mouse.move_to(Point::new(210.0, 90.0));
//! strand.render(&mouse);
//! let path = strand.to_bez_path();
//! assert!(!path.elements().is_empty());
//! ```

mod hitbox;
mod pointer;
mod settings;
mod strand;
mod throttle;
mod vertex;

pub use hitbox::{HitEvent, Hitbox};
pub use pointer::{MouseTracker, Pointer};
pub use settings::{SettingsError, SpringSettings};
pub use strand::Strand;
pub use throttle::{Clock, ManualClock, SystemClock, Throttle};
pub use vertex::{HitCallback, Vertex};
