mod activity_log;
mod department;
mod event;
mod matches;
mod result;
mod round_set;
mod sport;
mod status;
mod user;

pub use activity_log::ActivityLog;
pub use department::Department;
pub use event::{Event, EventCategory, EventType};
pub use matches::Match;
pub use result::{EventResult, medal_label};
pub use round_set::{ParseRoundTagError, RoundSet, RoundTag};
pub use sport::Sport;
pub use status::ProgressStatus;
pub use user::{Role, User};
