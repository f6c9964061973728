//! Task types and their store encoding
//!
//! The store only holds strings, so a task crosses an explicit boundary:
//! [`encode`] turns a [`Task`] into a field map and [`decode`] reads one back,
//! mapping `done` between `bool` and its `"True"`/`"False"` text form.

use checklist_store::FieldMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stored text for `true`
pub const TRUE_TEXT: &str = "True";

/// Stored text for `false`
pub const FALSE_TEXT: &str = "False";

const NAME_FIELD: &str = "name";
const DONE_FIELD: &str = "done";

/// Identifier of a task within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wrap a raw id
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A checklist item as read from the store
///
/// Fields are optional because a stored hash may lack them; absence is
/// preserved rather than defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Completion flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl Task {
    /// Create task with both fields set
    #[must_use]
    pub fn new(name: impl Into<String>, done: bool) -> Self {
        Self {
            name: Some(name.into()),
            done: Some(done),
        }
    }

    /// Overlay `patch` onto the fields this task already carries
    ///
    /// Patch fields the task lacks are dropped, so merging into an empty task
    /// yields an empty task.
    #[must_use]
    pub fn merged(self, patch: &TaskPatch) -> Self {
        Self {
            name: self.name.map(|old| patch.name.clone().unwrap_or(old)),
            done: self.done.map(|old| patch.done.unwrap_or(old)),
        }
    }

    /// Check if the record carries no fields at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.done.is_none()
    }
}

impl From<NewTask> for Task {
    fn from(new: NewTask) -> Self {
        Self {
            name: Some(new.name),
            done: Some(new.done.unwrap_or(false)),
        }
    }
}

/// Input for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Task text
    pub name: String,
    /// Completion flag; false when omitted
    #[serde(default)]
    pub done: Option<bool>,
}

impl NewTask {
    /// Create input with `done` left to its default
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: None,
        }
    }

    /// With explicit completion flag
    #[inline]
    #[must_use]
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }
}

/// Partial update of a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement text
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement completion flag
    #[serde(default)]
    pub done: Option<bool>,
}

impl TaskPatch {
    /// Patch touching only `name`
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            done: None,
        }
    }

    /// Patch touching only `done`
    #[must_use]
    pub fn done(done: bool) -> Self {
        Self {
            name: None,
            done: Some(done),
        }
    }
}

/// Store text for a flag
#[inline]
#[must_use]
pub fn bool_to_text(value: bool) -> &'static str {
    if value {
        TRUE_TEXT
    } else {
        FALSE_TEXT
    }
}

/// Read a stored flag; anything but `"True"` is false
#[inline]
#[must_use]
pub fn text_to_bool(text: &str) -> bool {
    text == TRUE_TEXT
}

/// Field map persisted for `task`
///
/// Absent fields are left out of the map so an existing hash keeps them.
#[must_use]
pub fn encode(task: &Task) -> FieldMap {
    let mut fields = FieldMap::new();
    if let Some(name) = &task.name {
        fields.insert(NAME_FIELD.to_string(), name.clone());
    }
    if let Some(done) = task.done {
        fields.insert(DONE_FIELD.to_string(), bool_to_text(done).to_string());
    }
    fields
}

/// Task read back from a stored field map
#[must_use]
pub fn decode(fields: &FieldMap) -> Task {
    Task {
        name: fields.get(NAME_FIELD).cloned(),
        done: fields.get(DONE_FIELD).map(|text| text_to_bool(text)),
    }
}
