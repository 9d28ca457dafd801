//! Project layout and configuration

mod layout;

pub use layout::{
    ProjectLayout, MANIFEST_FILE_NAME, MODULES_DIR_NAME, PROJECT_DIR_ENV,
};
