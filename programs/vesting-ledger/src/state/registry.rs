use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;
use crate::state::{AccessControl, HasRole, Role};

/// Singleton PDA owning the grant role table and pause switch.
#[account]
pub struct GrantRegistry {
    pub access: AccessControl,
    /// Blocks add/claim/revoke while set.
    pub paused: bool,
    /// Grants currently active across all mints.
    pub active_grants: u32,
    pub bump: u8,
}

impl GrantRegistry {
    pub const SIZE: usize =
        AccessControl::SIZE + // access
        1 +                   // paused
        4 +                   // active_grants
        1;                    // bump

    pub fn ensure_active(&self) -> Result<(), VestingError> {
        if self.paused {
            return Err(VestingError::RegistryPaused);
        }
        Ok(())
    }

    pub fn ensure_role(&self, role: Role, caller: &Pubkey) -> Result<(), VestingError> {
        if !self.access.has_role(role, caller) {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Pause switch, gated on `PauseAdmin`.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<(), VestingError> {
        self.ensure_role(Role::PauseAdmin, caller)?;
        match (self.paused, paused) {
            (true, true) => Err(VestingError::RegistryPaused),
            (false, false) => Err(VestingError::RegistryNotPaused),
            _ => {
                self.paused = paused;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(pause_admin: Pubkey, grant_admin: Pubkey) -> GrantRegistry {
        let mut access = AccessControl::with_admin(pause_admin).unwrap();
        access.grant_role(Role::PauseAdmin, pause_admin).unwrap();
        access.grant_role(Role::GrantAdmin, grant_admin).unwrap();
        GrantRegistry {
            access,
            paused: false,
            active_grants: 0,
            bump: 255,
        }
    }

    #[test]
    fn pause_blocks_grant_operations() {
        let pauser = Pubkey::new_unique();
        let mut r = registry(pauser, Pubkey::new_unique());
        assert!(r.ensure_active().is_ok());

        r.set_paused(&pauser, true).unwrap();
        assert!(matches!(r.ensure_active(), Err(VestingError::RegistryPaused)));
        assert!(matches!(r.set_paused(&pauser, true), Err(VestingError::RegistryPaused)));

        r.set_paused(&pauser, false).unwrap();
        assert!(r.ensure_active().is_ok());
        assert!(matches!(
            r.set_paused(&pauser, false),
            Err(VestingError::RegistryNotPaused)
        ));
    }

    #[test]
    fn only_pause_admin_flips_the_switch() {
        let grant_admin = Pubkey::new_unique();
        let mut r = registry(Pubkey::new_unique(), grant_admin);
        assert!(matches!(
            r.set_paused(&grant_admin, true),
            Err(VestingError::Unauthorized)
        ));
        assert!(!r.paused);
    }

    #[test]
    fn adding_grants_needs_grant_admin() {
        let pauser = Pubkey::new_unique();
        let grant_admin = Pubkey::new_unique();
        let r = registry(pauser, grant_admin);
        assert!(r.ensure_role(Role::GrantAdmin, &grant_admin).is_ok());
        assert!(matches!(
            r.ensure_role(Role::GrantAdmin, &pauser),
            Err(VestingError::Unauthorized)
        ));
        assert!(matches!(
            r.ensure_role(Role::GrantAdmin, &Pubkey::new_unique()),
            Err(VestingError::Unauthorized)
        ));
    }
}
