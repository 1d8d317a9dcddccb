/*
[INPUT]:  Collaborator data shapes and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - types exchanged with identity, geolocation, notification
[UPDATE]: When collaborator payloads change or new types added
*/

pub mod models;

pub use models::*;
