//! The five entity kinds that can be created through the API.

/// An insertable entity.
///
/// Each kind knows its display label (used in logs) and the confirmation
/// message returned to the client after a successful insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Department,
    Company,
    JobRole,
    Placement,
}

impl EntityKind {
    /// All kinds, in the order the aggregate fetch returns them.
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Student,
        EntityKind::Department,
        EntityKind::Company,
        EntityKind::JobRole,
        EntityKind::Placement,
    ];

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Student => "Student",
            EntityKind::Department => "Department",
            EntityKind::Company => "Company",
            EntityKind::JobRole => "Job Role",
            EntityKind::Placement => "Placement",
        }
    }

    /// Key of this kind's array in the `GET /api/data` response.
    pub const fn collection_key(self) -> &'static str {
        match self {
            EntityKind::Student => "students",
            EntityKind::Department => "departments",
            EntityKind::Company => "companies",
            EntityKind::JobRole => "job_roles",
            EntityKind::Placement => "placements",
        }
    }

    /// Message returned alongside the generated id after an insert.
    pub const fn created_message(self) -> &'static str {
        match self {
            EntityKind::Student => "✅ Student added!",
            EntityKind::Department => "✅ Department added!",
            EntityKind::Company => "✅ Company added!",
            EntityKind::JobRole => "✅ Job Role added!",
            EntityKind::Placement => "✅ Placement added!",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_messages_name_the_entity() {
        for kind in EntityKind::ALL {
            let message = kind.created_message();
            assert!(message.starts_with('✅'));
            assert!(message.contains(kind.label()), "{message} should mention {kind}");
        }
    }

    #[test]
    fn department_message_matches_wire_contract() {
        assert_eq!(
            EntityKind::Department.created_message(),
            "✅ Department added!"
        );
    }

    #[test]
    fn collection_keys_are_unique() {
        let mut keys: Vec<_> = EntityKind::ALL.iter().map(|k| k.collection_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), EntityKind::ALL.len());
    }
}
