use serde_json::{json, Map, Value};

/// Builder for machine objects as returned by the HackTheBox catalog API.
///
/// Starts with only the `name` field set. Each method adds the corresponding field using
/// the key the API uses for it, so tests can reproduce the partial payloads that the
/// different endpoints return.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::MachineJsonBuilder;
///
/// let machine = MachineJsonBuilder::new("Zipper")
///     .os("Linux")
///     .difficulty_text("Hard")
///     .first_creator("C")
///     .build();
/// ```
pub struct MachineJsonBuilder {
    /// Fields accumulated so far.
    fields: Map<String, Value>,
}

impl MachineJsonBuilder {
    /// Creates a builder for a machine with the given name and no other fields.
    pub fn new(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), json!(name));
        Self { fields }
    }

    /// Creates a builder for a machine object without a `name` field.
    pub fn nameless() -> Self {
        Self { fields: Map::new() }
    }

    /// Sets an arbitrary field, for shapes the other methods do not cover.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn os(self, os: &str) -> Self {
        self.field("os", json!(os))
    }

    /// Sets `difficultyText`, the field name used by the list endpoints.
    pub fn difficulty_text_camel(self, difficulty: &str) -> Self {
        self.field("difficultyText", json!(difficulty))
    }

    /// Sets `difficulty_text`, the field name used by the unreleased endpoint.
    pub fn difficulty_text(self, difficulty: &str) -> Self {
        self.field("difficulty_text", json!(difficulty))
    }

    /// Sets the `release` timestamp verbatim.
    pub fn release(self, timestamp: &str) -> Self {
        self.field("release", json!(timestamp))
    }

    pub fn maker(self, name: &str) -> Self {
        self.field("maker", json!({ "id": 1, "name": name }))
    }

    pub fn maker2(self, name: &str) -> Self {
        self.field("maker2", json!({ "id": 2, "name": name }))
    }

    /// Appends a creator to the `firstCreator` list.
    pub fn first_creator(self, name: &str) -> Self {
        self.push_named("firstCreator", name)
    }

    /// Appends a creator to the `coCreators` list.
    pub fn co_creator(self, name: &str) -> Self {
        self.push_named("coCreators", name)
    }

    /// Sets the machine scheduled to retire when this one releases.
    pub fn retiring(self, name: &str) -> Self {
        self.field("retiring", json!({ "id": 3, "name": name }))
    }

    pub fn info_status(self, status: &str) -> Self {
        self.field("infoStatus", json!(status))
    }

    /// Returns the built machine object.
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }

    fn push_named(mut self, key: &str, name: &str) -> Self {
        let entry = json!({ "name": name });
        match self.fields.get_mut(key).and_then(Value::as_array_mut) {
            Some(list) => list.push(entry),
            None => {
                self.fields.insert(key.to_string(), json!([entry]));
            }
        }
        self
    }
}
