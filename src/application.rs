//! Application and account types supplied to the consent screen.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// An account on the platform (the application owner, or an account the
/// consenting user belongs to).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Incognito accounts are never listed on the consent screen.
    #[serde(default)]
    pub is_incognito: bool,
}

/// A third-party application requesting delegated access.
///
/// Immutable; supplied by the caller from the authorization request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub client_id: String,
    /// Default redirect target registered for this application.
    pub redirect_uri: String,
    pub account: Account,
}

/// Role of a user within an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Admin,
    Member,
    Backer,
}

/// A user's membership in an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub role: MemberRole,
    pub account: Account,
}

/// Accounts the user administers, for display on the consent screen.
///
/// Unique by account id, first occurrence wins. Only Admin memberships count
/// and incognito accounts are excluded.
pub fn administrated_accounts(memberships: &[Membership]) -> Vec<Account> {
    let mut seen = HashSet::new();
    memberships
        .iter()
        .filter(|m| m.role == MemberRole::Admin && !m.account.is_incognito)
        .filter(|m| seen.insert(m.account.id.clone()))
        .map(|m| m.account.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            name: format!("Account {}", id),
            slug: format!("account-{}", id),
            is_incognito: false,
        }
    }

    #[test]
    fn test_administrated_accounts_filters_non_admins() {
        let memberships = vec![
            Membership {
                role: MemberRole::Admin,
                account: account("1"),
            },
            Membership {
                role: MemberRole::Member,
                account: account("2"),
            },
            Membership {
                role: MemberRole::Backer,
                account: account("3"),
            },
        ];

        let accounts = administrated_accounts(&memberships);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "1");
    }

    #[test]
    fn test_administrated_accounts_unique_by_id() {
        let memberships = vec![
            Membership {
                role: MemberRole::Admin,
                account: account("1"),
            },
            Membership {
                role: MemberRole::Admin,
                account: account("1"),
            },
            Membership {
                role: MemberRole::Admin,
                account: account("2"),
            },
        ];

        let accounts = administrated_accounts(&memberships);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "1");
        assert_eq!(accounts[1].id, "2");
    }

    #[test]
    fn test_administrated_accounts_excludes_incognito() {
        let mut incognito = account("1");
        incognito.is_incognito = true;

        let memberships = vec![
            Membership {
                role: MemberRole::Admin,
                account: incognito,
            },
            Membership {
                role: MemberRole::Admin,
                account: account("2"),
            },
        ];

        let accounts = administrated_accounts(&memberships);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "2");
    }

    #[test]
    fn test_application_deserializes_camel_case() {
        let json = r#"{
            "name": "Test App",
            "clientId": "client_123",
            "redirectUri": "https://example.com/callback",
            "account": { "id": "acc_1", "name": "Owner", "slug": "owner" }
        }"#;

        let application: Application = serde_json::from_str(json).unwrap();
        assert_eq!(application.client_id, "client_123");
        assert!(!application.account.is_incognito);
    }
}
