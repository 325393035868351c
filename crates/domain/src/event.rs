use crate::{shared::entity::ID, User};
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// A named, time bounded entry in the calendar of the `User` that created it.
///
/// A `CalendarEvent` can only be created through the `CalendarEventBuilder`,
/// which guarantees that the event has a creator and that it starts strictly
/// before it ends. After that it is only ever read.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    id: Option<ID>,
    creator: ID,
    name: Option<String>,
    description: Option<String>,
    start_at: DateTime<FixedOffset>,
    end_at: DateTime<FixedOffset>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidEventError {
    #[error("The creator of the event must be set")]
    MissingCreator,
    #[error("The start of the event must be set")]
    MissingStart,
    #[error("The end of the event must be set")]
    MissingEnd,
    #[error("The event start: {start} must be before the event end: {end}")]
    StartNotBeforeEnd {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
}

impl CalendarEvent {
    pub fn builder() -> CalendarEventBuilder {
        Default::default()
    }

    /// Assigned by the repository when the event is saved for the first time
    pub fn id(&self) -> Option<&ID> {
        self.id.as_ref()
    }

    pub fn creator(&self) -> &ID {
        &self.creator
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn start_at(&self) -> DateTime<FixedOffset> {
        self.start_at
    }

    pub fn end_at(&self) -> DateTime<FixedOffset> {
        self.end_at
    }

    pub fn is_created_by(&self, user: &User) -> bool {
        self.creator == user.id
    }

    pub fn with_id(mut self, id: ID) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalendarEventBuilder {
    id: Option<ID>,
    creator: Option<ID>,
    name: Option<String>,
    description: Option<String>,
    start_at: Option<DateTime<FixedOffset>>,
    end_at: Option<DateTime<FixedOffset>>,
}

impl CalendarEventBuilder {
    pub fn id(mut self, id: ID) -> Self {
        self.id = Some(id);
        self
    }

    pub fn creator(self, user: &User) -> Self {
        self.creator_id(user.id.clone())
    }

    pub fn creator_id(mut self, creator: ID) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start_at(mut self, start_at: DateTime<FixedOffset>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    pub fn end_at(mut self, end_at: DateTime<FixedOffset>) -> Self {
        self.end_at = Some(end_at);
        self
    }

    pub fn build(self) -> Result<CalendarEvent, InvalidEventError> {
        let creator = self.creator.ok_or(InvalidEventError::MissingCreator)?;
        let start_at = self.start_at.ok_or(InvalidEventError::MissingStart)?;
        let end_at = self.end_at.ok_or(InvalidEventError::MissingEnd)?;
        // Compares the instants, the offsets are irrelevant here
        if start_at >= end_at {
            return Err(InvalidEventError::StartNotBeforeEnd {
                start: start_at,
                end: end_at,
            });
        }

        Ok(CalendarEvent {
            id: self.id,
            creator,
            name: self.name,
            description: self.description,
            start_at,
            end_at,
        })
    }
}
