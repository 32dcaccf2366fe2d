//! Fixed list of teachers shown on the explore page.

use tutor_entity::teacher::Teacher;

/// The explore catalog. Its contents do not depend on the caller.
#[derive(Debug, Clone, Default)]
pub struct TeacherCatalog;

impl TeacherCatalog {
    /// Creates the catalog.
    pub fn new() -> Self {
        Self
    }

    /// Returns the teachers listed on the explore page.
    pub fn explore(&self) -> Vec<Teacher> {
        vec![
            teacher(
                1,
                "Math Mentor",
                "Walks through algebra and calculus problems one step at a time.",
            ),
            teacher(
                2,
                "Language Coach",
                "Practices conversation and corrects grammar as you write.",
            ),
            teacher(
                3,
                "Science Guide",
                "Explains physics, chemistry, and biology concepts with worked examples.",
            ),
        ]
    }
}

fn teacher(id: u32, name: &str, description: &str) -> Teacher {
    Teacher {
        id,
        name: name.to_string(),
        description: description.to_string(),
    }
}
