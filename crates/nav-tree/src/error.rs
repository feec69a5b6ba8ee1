use derive_more::Display;

/// Errors raised while building or editing a group forest
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TreeError {
    /// Two records share a name
    #[display(fmt = "group `{}` appears more than once", name)]
    DuplicateName { name: String },

    /// A group is listed as a child by two different parents
    #[display(fmt = "group `{}` is claimed by both `{}` and `{}`", child, first, second)]
    ConflictingParent {
        child: String,
        first: String,
        second: String,
    },

    /// Following parents from this group leads back to it
    #[display(fmt = "group `{}` is part of a parent cycle", name)]
    Cycle { name: String },

    /// No group with this name
    #[display(fmt = "group `{}` not found", name)]
    NotFound { name: String },

    /// A move would place a group under itself
    #[display(fmt = "cannot move `{}` under `{}`, which is inside it", name, parent)]
    MoveIntoDescendant { name: String, parent: String },
}

impl TreeError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        TreeError::NotFound { name: name.into() }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TreeError::ConflictingParent {
            child: "b".into(),
            first: "a".into(),
            second: "c".into(),
        };
        assert_eq!(err.to_string(), "group `b` is claimed by both `a` and `c`");
        assert_eq!(TreeError::not_found("x").to_string(), "group `x` not found");
    }
}
