//! Status reporting core: domain model, wire mapping, filtering, ordering,
//! and rendering of a daemon status snapshot.

pub mod filter;
pub mod mapper;
pub mod model;
pub mod render;
pub mod run;
pub mod sort;

pub use filter::{FilterConfig, StatusFilter};
pub use mapper::from_wire_full_status;
pub use model::{
    ConnStatus, FullStatus, LocalPeerState, ManagementState, PeerState, SignalState, UnknownStatus,
};
pub use run::{run_status, OutputMode, StatusOptions};
pub use sort::sort_peers;
