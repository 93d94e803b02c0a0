//! SkillsHub skills library
//!
//! Filesystem conventions shared by the `skillshub` commands:
//!
//! - Locate the `skills` directory from the working directory upward
//! - Validate a skill directory's `skill.json` and `README.md`
//! - Build the aggregated `index.json` catalog
//!
//! Every operation is a synchronous, read-mostly pass over local files.
//! Only [`index::write_index`] writes anything.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod index;
pub mod locator;
pub mod validator;

pub use error::{Result, SkillsError};
pub use index::{build_index, read_index, write_index};
pub use locator::{find_skills_dir, find_skills_dir_from, list_skill_dirs, DEFAULT_DIR_NAME};
pub use validator::{skill_dir_name, validate_skill, ValidationIssue};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{build_index, find_skills_dir, list_skill_dirs, validate_skill, write_index};
    pub use crate::{SkillsError, ValidationIssue};
}
