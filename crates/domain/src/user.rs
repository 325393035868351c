use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub name: String,
}

impl User {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
