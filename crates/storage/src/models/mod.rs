mod competition;
mod criteria;
mod event_type;
mod judge;
mod participant;

pub use competition::Competition;
pub use criteria::Criteria;
pub use event_type::EventType;
pub use judge::Judge;
pub use participant::Participant;
