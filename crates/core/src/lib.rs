//! Core of the Folio portfolio page
//!
//! Everything here is host-independent: the authored content, the two
//! pieces of interactive state and the pure renderer. The browser front end
//! in `folio-ui` plugs the real viewport in through [`ViewportObserver`].
//!
//! ## Module Structure
//! - `content`: immutable experience, project and skill entries
//! - `section`: section and card identifiers
//! - `visibility`: sticky per-section visibility flags
//! - `hover`: active-card tracking
//! - `observer`: viewport observation capability and a simulated viewport
//! - `page`: mount/unmount lifecycle tying the above together
//! - `style`: conditional classes and inline styles
//! - `markup`, `render`: pure page renderer
//! - `config`, `error`, `result`: ambient plumbing

#![forbid(unsafe_code)]

pub mod config;
pub mod content;
pub mod error;
pub mod hover;
pub mod markup;
pub mod observer;
pub mod page;
pub mod render;
pub mod result;
pub mod section;
pub mod style;
pub mod visibility;

pub use config::PageConfig;
pub use content::Portfolio;
pub use error::Error;
pub use hover::HoverTracker;
pub use observer::{IntersectionEntry, Subscription, SubscriptionSet, ViewportObserver};
pub use page::{Page, PageState};
pub use result::{Result, ResultExt};
pub use section::{CardId, Section};
pub use visibility::{IntersectionThreshold, SectionVisibility, Transition};
