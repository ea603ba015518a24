use serde_json::{Map, Value};

use super::role::{Role, RoleMarkers};

/// Box field holding the node identifier
pub const FIELD_ID: &str = "id";
/// Box field holding the node's free-text content
pub const FIELD_TEXT: &str = "text";
/// Box field holding the node's saved attributes
pub const FIELD_SAVED_ATTRIBUTES: &str = "saved_object_attributes";
/// Box field holding the script runner's file reference object
pub const FIELD_TEXTFILE: &str = "textfile";
/// Key of the file name inside [`FIELD_TEXTFILE`]
pub const FIELD_FILENAME: &str = "filename";

/// A single box of the patcher
///
/// The node keeps the complete box object as its source of truth so a
/// parse/serialize cycle preserves every field, known or not, in its original
/// key order. `id`, `content` and `role` are read once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Option<String>,
    content: String,
    role: Role,
    fields: Map<String, Value>,
    modified: bool,
}

impl Node {
    /// Build a node from a box object
    pub fn from_fields(fields: Map<String, Value>, markers: &RoleMarkers) -> Self {
        let id = fields
            .get(FIELD_ID)
            .and_then(Value::as_str)
            .map(str::to_string);
        let content = fields
            .get(FIELD_TEXT)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let role = markers.classify(&content);

        Self {
            id,
            content,
            role,
            fields,
            modified: false,
        }
    }

    /// Build a node with just an id and content text
    pub fn new(id: &str, content: &str, markers: &RoleMarkers) -> Self {
        let mut fields = Map::new();
        fields.insert(FIELD_ID.to_string(), Value::String(id.to_string()));
        fields.insert(FIELD_TEXT.to_string(), Value::String(content.to_string()));
        Self::from_fields(fields, markers)
    }

    pub(crate) fn classify(&mut self, markers: &RoleMarkers) {
        self.role = markers.classify(&self.content);
    }

    /// Node identifier, absent for malformed boxes
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Free-text content (`text` field), empty when absent
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Role derived from the content text
    pub fn role(&self) -> Role {
        self.role
    }

    /// True once a repair has changed this node
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// The saved-attributes map, if the box has one
    pub fn attributes(&self) -> Option<&Map<String, Value>> {
        self.fields
            .get(FIELD_SAVED_ATTRIBUTES)
            .and_then(Value::as_object)
    }

    /// A single saved attribute
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes().and_then(|attrs| attrs.get(key))
    }

    /// Every box field other than id, text and saved attributes
    pub fn extra_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter().filter(|(key, _)| {
            !matches!(key.as_str(), FIELD_ID | FIELD_TEXT | FIELD_SAVED_ATTRIBUTES)
        })
    }

    /// A raw box field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The complete box object
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The declared script file reference (`textfile.filename`)
    pub fn file_reference(&self) -> Option<&str> {
        self.fields
            .get(FIELD_TEXTFILE)
            .and_then(|textfile| textfile.get(FIELD_FILENAME))
            .and_then(Value::as_str)
    }

    /// Overwrite the script file reference, leaving every other field alone
    ///
    /// Creates the `textfile` object when it is missing or not an object.
    /// Returns whether the stored value changed.
    pub fn set_file_reference(&mut self, filename: &str) -> bool {
        if self.file_reference() == Some(filename) {
            return false;
        }

        let textfile = self
            .fields
            .entry(FIELD_TEXTFILE)
            .or_insert_with(|| Value::Object(Map::new()));
        if !textfile.is_object() {
            *textfile = Value::Object(Map::new());
        }
        if let Value::Object(textfile) = textfile {
            textfile.insert(
                FIELD_FILENAME.to_string(),
                Value::String(filename.to_string()),
            );
        }

        self.modified = true;
        true
    }
}
