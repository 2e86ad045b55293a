use serde_json::{json, Value};

use crate::builder::MachineJsonBuilder;

/// Release timestamp used by fixtures, in the catalog's format.
pub const RELEASE_TIMESTAMP: &str = "2024-03-02T19:00:00.000000Z";

/// An entry of the unreleased-machines list.
///
/// Carries release date, OS, `difficulty_text`, a first creator and a retiring machine.
pub fn upcoming_machine(name: &str) -> Value {
    MachineJsonBuilder::new(name)
        .release(RELEASE_TIMESTAMP)
        .os("Linux")
        .difficulty_text("Medium")
        .first_creator("creator")
        .retiring("OldBox")
        .build()
}

/// An entry of the paginated active-machines list.
///
/// Always carries OS and `difficultyText`, plus a primary maker.
pub fn active_machine(name: &str, os: &str, difficulty: &str) -> Value {
    MachineJsonBuilder::new(name)
        .os(os)
        .difficulty_text_camel(difficulty)
        .release(RELEASE_TIMESTAMP)
        .maker("maker")
        .build()
}

/// Wraps machines in a `{"data": [...]}` list envelope.
pub fn list_response(machines: Vec<Value>) -> Value {
    json!({ "data": machines })
}

/// Wraps a machine in an `{"info": {...}}` single-machine envelope.
pub fn info_response(machine: Value) -> Value {
    json!({ "info": machine })
}

/// The active-machine endpoint's answer when the user has no machine spawned.
pub fn no_active_machine_response() -> Value {
    json!({ "info": null })
}
