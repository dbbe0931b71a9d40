use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_ROLE_MEMBERS;
use crate::error::VestingError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Manages the role table itself.
    Admin,
    /// Adds grants; may claim or revoke any grant.
    GrantAdmin,
    /// Pauses and unpauses the grant registry.
    PauseAdmin,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleEntry {
    pub role: Role,
    pub account: Pubkey,
}

impl RoleEntry {
    pub const SIZE: usize = 1 + 32;
}

/// Capability check consumed by the grant registry and investor pools.
pub trait HasRole {
    fn has_role(&self, role: Role, account: &Pubkey) -> bool;
}

/// Role table embedded in the accounts that need admin gating.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessControl {
    pub members: Vec<RoleEntry>,
}

impl HasRole for AccessControl {
    fn has_role(&self, role: Role, account: &Pubkey) -> bool {
        self.members
            .iter()
            .any(|m| m.role == role && m.account == *account)
    }
}

impl AccessControl {
    /// Serialized size with room for `MAX_ROLE_MEMBERS` entries.
    pub const SIZE: usize = 4 + MAX_ROLE_MEMBERS * RoleEntry::SIZE;

    pub fn with_admin(admin: Pubkey) -> Result<Self, VestingError> {
        let mut ac = Self::default();
        ac.grant_role(Role::Admin, admin)?;
        Ok(ac)
    }

    pub fn grant_role(&mut self, role: Role, account: Pubkey) -> Result<(), VestingError> {
        if account == Pubkey::default() {
            return Err(VestingError::InvalidParameters);
        }
        if self.has_role(role, &account) {
            return Err(VestingError::RoleAlreadyGranted);
        }
        if self.members.len() >= MAX_ROLE_MEMBERS {
            return Err(VestingError::RoleListFull);
        }
        self.members.push(RoleEntry { role, account });
        Ok(())
    }

    pub fn revoke_role(&mut self, role: Role, account: &Pubkey) -> Result<(), VestingError> {
        let idx = self
            .members
            .iter()
            .position(|m| m.role == role && m.account == *account)
            .ok_or(VestingError::RoleNotFound)?;
        if role == Role::Admin && self.count(Role::Admin) == 1 {
            return Err(VestingError::LastAdmin);
        }
        self.members.remove(idx);
        Ok(())
    }

    pub fn count(&self, role: Role) -> usize {
        self.members.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_and_check() {
        let admin = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let mut ac = AccessControl::with_admin(admin).unwrap();

        assert!(ac.has_role(Role::Admin, &admin));
        assert!(!ac.has_role(Role::GrantAdmin, &admin));
        assert!(!ac.has_role(Role::Admin, &other));

        ac.grant_role(Role::GrantAdmin, other).unwrap();
        assert!(ac.has_role(Role::GrantAdmin, &other));
        assert!(matches!(
            ac.grant_role(Role::GrantAdmin, other),
            Err(VestingError::RoleAlreadyGranted)
        ));
        assert!(matches!(
            ac.grant_role(Role::PauseAdmin, Pubkey::default()),
            Err(VestingError::InvalidParameters)
        ));
    }

    #[test]
    fn last_admin_is_kept() {
        let admin = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let mut ac = AccessControl::with_admin(admin).unwrap();

        assert!(matches!(ac.revoke_role(Role::Admin, &admin), Err(VestingError::LastAdmin)));

        ac.grant_role(Role::Admin, second).unwrap();
        ac.revoke_role(Role::Admin, &admin).unwrap();
        assert!(!ac.has_role(Role::Admin, &admin));
        assert!(ac.has_role(Role::Admin, &second));
        assert!(matches!(
            ac.revoke_role(Role::Admin, &admin),
            Err(VestingError::RoleNotFound)
        ));
    }

    #[test]
    fn table_is_bounded() {
        let mut ac = AccessControl::default();
        for _ in 0..MAX_ROLE_MEMBERS {
            ac.grant_role(Role::GrantAdmin, Pubkey::new_unique()).unwrap();
        }
        assert!(matches!(
            ac.grant_role(Role::GrantAdmin, Pubkey::new_unique()),
            Err(VestingError::RoleListFull)
        ));
    }
}
