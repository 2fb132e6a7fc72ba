use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the CRUD API";

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain acknowledgement body, e.g. `{"message": "Item created"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Root greeting. `port` stays a string on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub message: String,
    pub port: String,
}

impl Welcome {
    pub fn new(port: u16) -> Self {
        Self { message: WELCOME_MESSAGE.to_string(), port: port.to_string() }
    }
}
