//! Domain events

mod domain_event;

pub use domain_event::{
    AccountLoggedInEvent, BroadcastEndedEvent, BroadcastStartedEvent, DomainEvent,
    VideoPublishedEvent, ViewerJoinedEvent, ViewerLeftEvent,
};
