//! Pure content rendering for target files.
//!
//! Nothing in this module touches the file system; the pipeline reads the
//! current content, calls [`render`], and writes the result.
//!
//! - [`inventory`] - fixed Ansible inventory template
//! - [`key_value`] - `key: value` line rewriting

pub mod inventory;
pub mod key_value;

pub use inventory::{render_inventory, INVENTORY_KEYS, MISSING_VALUE};
pub use key_value::rewrite_key_value;

use crate::config::{Dialect, EnvMap, Strategy};

/// Render new content for a target.
///
/// `current` is only consulted by [`Strategy::KeyValue`]; the inventory
/// template replaces the file regardless of what it held.
pub fn render(strategy: Strategy, current: &str, env: &EnvMap, dialect: Dialect) -> String {
    match strategy {
        Strategy::Inventory => render_inventory(env),
        Strategy::KeyValue => rewrite_key_value(current, env, dialect),
    }
}

/// Whether rendering a target needs its current content.
pub fn needs_current_content(strategy: Strategy) -> bool {
    matches!(strategy, Strategy::KeyValue)
}
