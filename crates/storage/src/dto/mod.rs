pub mod common;
pub mod competition;
pub mod criteria;
pub mod event_type;
pub mod judge;
pub mod participant;
