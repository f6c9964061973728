//! Store key naming
//!
//! Every piece of state lives under a key derived from a list or profile name:
//! - `<list>:<id>` task hash
//! - `<list>:ids` index set
//! - `<list>:counter` id allocator
//! - `profile:<name>` profile list

use crate::task::TaskId;

/// Hash key of one task
#[inline]
#[must_use]
pub fn task_key(list_name: &str, id: TaskId) -> String {
    format!("{list_name}:{id}")
}

/// Set key holding the ids of a list
#[inline]
#[must_use]
pub fn index_key(list_name: &str) -> String {
    format!("{list_name}:ids")
}

/// Counter key allocating ids for a list
#[inline]
#[must_use]
pub fn counter_key(list_name: &str) -> String {
    format!("{list_name}:counter")
}

/// List key of a profile
#[inline]
#[must_use]
pub fn profile_key(profile_name: &str) -> String {
    format!("profile:{profile_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_layout() {
        assert_eq!(task_key("test", TaskId::new(3)), "test:3");
        assert_eq!(index_key("test"), "test:ids");
        assert_eq!(counter_key("test"), "test:counter");
        assert_eq!(profile_key("ann"), "profile:ann");
    }
}
