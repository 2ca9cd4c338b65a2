//! Ansible inventory rendering.

use crate::config::EnvMap;

/// Rendered in place of an env key that has no value.
pub const MISSING_VALUE: &str = "undefined";

/// Env keys read by the inventory template, in template order.
pub const INVENTORY_KEYS: [&str; 4] = [
    "host_ip",
    "host_user",
    "host_port",
    "host_ssh_key_private_path",
];

/// Render the single-host `[vps]` inventory block.
///
/// The output always has the same shape; keys absent from `env` render as
/// [`MISSING_VALUE`].
///
/// # Example
///
/// ```
/// use envstamp::config::EnvMap;
/// use envstamp::template::render_inventory;
///
/// let mut env = EnvMap::new();
/// env.insert("host_ip".into(), "10.0.0.1".into());
///
/// let out = render_inventory(&env);
/// assert!(out.starts_with("[vps] \n    10.0.0.1 ansible_user=undefined"));
/// ```
pub fn render_inventory(env: &EnvMap) -> String {
    let [ip, user, port, key_path] = INVENTORY_KEYS.map(|key| lookup(env, key));

    format!(
        "[vps] \n    {ip} ansible_user={user} ansible_port={port} \
         ansible_ssh_private_key_file={key_path} \
         ansible_ssh_common_args='-o IdentitiesOnly=yes'\n"
    )
}

fn lookup<'a>(env: &'a EnvMap, key: &str) -> &'a str {
    env.get(key).map(String::as_str).unwrap_or(MISSING_VALUE)
}
