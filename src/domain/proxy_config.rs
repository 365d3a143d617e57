//! Proxy routing document (velocity.toml).
//!
//! The document is edited through `toml_edit`, so tables, keys and comments the
//! merge does not touch are written back as they were read.

use toml_edit::{Array, DocumentMut, Item, Table, TableLike};

use super::AppError;

pub const SERVERS_TABLE: &str = "servers";
pub const FORCED_HOSTS_TABLE: &str = "forced-hosts";

/// A backend route to add to the proxy config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRoute<'a> {
    pub server_name: &'a str,
    pub address: &'a str,
    /// Domain appended to the server name for its forced host.
    pub forced_host_domain: &'a str,
}

impl ProxyRoute<'_> {
    pub fn forced_host(&self) -> String {
        format!("{}.{}", self.server_name, self.forced_host_domain)
    }
}

/// Insert `route` into the proxy config content and return the new document.
///
/// `existing` is `None` when the file is absent.
pub fn add_route(
    path: &str,
    existing: Option<&str>,
    route: &ProxyRoute<'_>,
) -> Result<String, AppError> {
    let mut doc = match existing {
        Some(content) => content.parse::<DocumentMut>().map_err(|err| AppError::ConfigParse {
            path: path.to_string(),
            details: err.to_string(),
        })?,
        None => DocumentMut::new(),
    };

    {
        let servers = table_mut(&mut doc, SERVERS_TABLE, path)?;
        if let Some(current) = servers.get(route.server_name)
            && !current.is_str()
        {
            return Err(AppError::schema_violation(
                path,
                &format!("{}.{}", SERVERS_TABLE, route.server_name),
                "a string address",
                current.type_name(),
            ));
        }
        servers.insert(route.server_name, toml_edit::value(route.address));
    }

    {
        let forced_hosts = table_mut(&mut doc, FORCED_HOSTS_TABLE, path)?;
        let host = route.forced_host();
        if let Some(current) = forced_hosts.get(&host)
            && !current.is_array()
        {
            return Err(AppError::schema_violation(
                path,
                &format!("{}.\"{}\"", FORCED_HOSTS_TABLE, host),
                "an array of server names",
                current.type_name(),
            ));
        }
        let backends: Array = [route.server_name].into_iter().collect();
        forced_hosts.insert(&host, toml_edit::value(backends));
    }

    Ok(doc.to_string())
}

/// Locate the table under `key`, creating it when absent.
fn table_mut<'a>(
    doc: &'a mut DocumentMut,
    key: &str,
    path: &str,
) -> Result<&'a mut dyn TableLike, AppError> {
    if !doc.contains_key(key) {
        doc.insert(key, Item::Table(Table::new()));
    }
    let item = doc
        .get_mut(key)
        .ok_or_else(|| AppError::InternalError(format!("table '{}' vanished after insert", key)))?;
    let found = item.type_name();
    item.as_table_like_mut().ok_or_else(|| AppError::schema_violation(path, key, "a table", found))
}
