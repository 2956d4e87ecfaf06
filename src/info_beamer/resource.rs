use std::fmt::Display;

// API: https://info-beamer.com/doc/api
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Resource {
    Devices,
    Packages,
    Setups,
    Assets,
    Account,
}

impl Resource {
    /// The listings that are only dumped, devices are decoded separately.
    pub const DUMPED: [Resource; 4] = [Resource::Packages, Resource::Setups, Resource::Assets, Resource::Account];

    pub fn path(&self) -> &'static str {
        match self {
            Resource::Devices => "device/list",
            Resource::Packages => "package/list",
            Resource::Setups => "setup/list",
            Resource::Assets => "asset/list",
            Resource::Account => "account",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Devices => "devices",
            Resource::Packages => "packages",
            Resource::Setups => "setups",
            Resource::Assets => "assets",
            Resource::Account => "account",
        };
        write!(f, "{}", name)
    }
}
