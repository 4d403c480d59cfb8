use serde::Deserialize;

/// Result payload of `users/current`.
///
/// There is no dedicated site-lookup endpoint for read-only roles; the
/// current user's privilege list is the only place the site id shows up.
#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub privilege: Privilege,
}

#[derive(Debug, Default, Deserialize)]
pub struct Privilege {
    #[serde(default)]
    pub sites: Vec<SitePrivilege>,
}

/// A site the current user has access to.
#[derive(Debug, Clone, Deserialize)]
pub struct SitePrivilege {
    /// Human-readable site name, matched against the configured site.
    #[serde(default)]
    pub name: String,

    /// Opaque site identifier used in API paths.
    #[serde(default)]
    pub key: String,
}
