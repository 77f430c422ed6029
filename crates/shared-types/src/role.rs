use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinic user category controlling which dashboard labels are shown.
///
/// - `Patient`: default role for self-registered accounts.
/// - `Doctor`, `Nurse`: clinical staff.
/// - `Admin`, `Director`: front office and management.
/// - `Support`: technical support staff.
/// - `ProjectAdmin`: administrator of the CRM installation itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
    Director,
    Nurse,
    Support,
    ProjectAdmin,
}

/// All roles in catalog (display) order.
pub const ALL_ROLES: [Role; 7] = [
    Role::Patient,
    Role::Doctor,
    Role::Admin,
    Role::Director,
    Role::Nurse,
    Role::Support,
    Role::ProjectAdmin,
];

/// Display metadata for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConfig {
    /// Human-readable label.
    pub name: &'static str,
    /// Icon identifier, resolved to a glyph by the UI layer.
    pub icon: &'static str,
    /// Color token, used as a CSS class by the UI layer.
    pub color: &'static str,
}

/// The role catalog, indexed by `Role as usize`.
static ROLE_CATALOG: [RoleConfig; 7] = [
    RoleConfig {
        name: "Пациент",
        icon: "User",
        color: "bg-blue-500",
    },
    RoleConfig {
        name: "Врач",
        icon: "Stethoscope",
        color: "bg-green-500",
    },
    RoleConfig {
        name: "Администратор",
        icon: "Settings",
        color: "bg-purple-500",
    },
    RoleConfig {
        name: "Директор",
        icon: "Briefcase",
        color: "bg-orange-500",
    },
    RoleConfig {
        name: "Медсестра",
        icon: "Heart",
        color: "bg-pink-500",
    },
    RoleConfig {
        name: "Техподдержка",
        icon: "Wrench",
        color: "bg-gray-500",
    },
    RoleConfig {
        name: "Администратор проекта",
        icon: "Shield",
        color: "bg-red-500",
    },
];

impl Role {
    /// Catalog entry for this role. Total over the enum.
    pub fn config(self) -> &'static RoleConfig {
        &ROLE_CATALOG[self as usize]
    }

    /// Shorthand for `config().name`.
    pub fn display_name(self) -> &'static str {
        self.config().name
    }

    /// Wire identifier, e.g. `project_admin`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
            Role::Director => "director",
            Role::Nurse => "nurse",
            Role::Support => "support",
            Role::ProjectAdmin => "project_admin",
        }
    }

    /// Parse a wire identifier. Returns `None` for anything outside the closed set.
    pub fn parse_role(s: &str) -> Option<Self> {
        ALL_ROLES
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Parse a comma-separated list such as `doctor,admin`.
    ///
    /// Fails on the first unknown entry, returning it, and on a list with no roles.
    pub fn parse_role_list(list: &str) -> Result<Vec<Self>, String> {
        let roles = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| Self::parse_role(s).ok_or_else(|| s.trim().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        if roles.is_empty() {
            return Err(list.to_string());
        }
        Ok(roles)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
