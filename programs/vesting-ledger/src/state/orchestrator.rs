use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_VESTING_INFOS;
use crate::error::VestingError;
use crate::utils::VestingSchedule;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingInfo {
    pub schedule: VestingSchedule,
    pub deployed: bool,
}

impl VestingInfo {
    pub const SIZE: usize = VestingSchedule::SIZE + 1;
}

/// One-shot distributor: holds mint authority and deploys a StepVesting per beneficiary.
#[account]
pub struct Orchestrator {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub vesting_infos: Vec<VestingInfo>,
    /// Sum of every schedule total, minted piecewise as each info is deployed.
    pub total_supply: u64,
    pub deployed_count: u8,
    pub bump: u8,
}

impl Orchestrator {
    pub const fn space(max_infos: usize) -> usize {
        8 +                             // discriminator
        32 +                            // owner
        32 +                            // mint
        4 + max_infos * VestingInfo::SIZE + // vesting_infos
        8 +                             // total_supply
        1 +                             // deployed_count
        1                               // bump
    }

    /// The signer must hold the mint authority it is about to hand over.
    pub fn ensure_mint_authority(
        current: Option<Pubkey>,
        signer: &Pubkey,
    ) -> Result<(), VestingError> {
        match current {
            Some(authority) if authority == *signer => Ok(()),
            _ => Err(VestingError::InvalidMintAuthority),
        }
    }

    /// Validates the schedules and returns them as undeployed infos plus their summed total.
    pub fn prepare_infos(
        schedules: &[VestingSchedule],
    ) -> Result<(Vec<VestingInfo>, u64), VestingError> {
        if schedules.is_empty() || schedules.len() > MAX_VESTING_INFOS {
            return Err(VestingError::InvalidVestingInfoCount);
        }
        let mut total: u64 = 0;
        for (i, s) in schedules.iter().enumerate() {
            s.validate()?;
            if schedules[..i].iter().any(|p| p.beneficiary == s.beneficiary) {
                return Err(VestingError::DuplicateBeneficiary);
            }
            total = total
                .checked_add(s.total()?)
                .ok_or(VestingError::MathOverflow)?;
        }
        let infos = schedules
            .iter()
            .map(|s| VestingInfo {
                schedule: *s,
                deployed: false,
            })
            .collect();
        Ok((infos, total))
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<(), VestingError> {
        if *caller != self.owner {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    /// Marks the beneficiary's info deployed and returns its schedule.
    pub fn take_for_deploy(&mut self, beneficiary: &Pubkey) -> Result<VestingSchedule, VestingError> {
        let info = self
            .vesting_infos
            .iter_mut()
            .find(|i| i.schedule.beneficiary == *beneficiary)
            .ok_or(VestingError::VestingInfoNotFound)?;
        if info.deployed {
            return Err(VestingError::AlreadyDeployed);
        }
        info.deployed = true;
        self.deployed_count = self
            .deployed_count
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        Ok(info.schedule)
    }

    pub fn fully_deployed(&self) -> bool {
        self.deployed_count as usize == self.vesting_infos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const TOKEN: u64 = 1_000_000_000;
    const LISTING: i64 = 1_660_700_000;

    fn schedule(cliff_amount: u64, step_amount: u64, num_steps: u16) -> VestingSchedule {
        VestingSchedule {
            beneficiary: Pubkey::new_unique(),
            cliff_time: LISTING,
            cliff_amount,
            step_amount,
            step_duration: 30 * DAY,
            num_steps,
        }
    }

    fn orchestrator(schedules: &[VestingSchedule]) -> Orchestrator {
        let (vesting_infos, total_supply) = Orchestrator::prepare_infos(schedules).unwrap();
        Orchestrator {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            vesting_infos,
            total_supply,
            deployed_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn total_supply_sums_schedules() {
        let launchpad = schedule(10_000_000 * TOKEN, 0, 0);
        let airdrop = schedule(5_000_000 * TOKEN, 5_000_000 * TOKEN, 5);
        let strategic = schedule(8_333_337 * TOKEN, 8_333_333 * TOKEN, 11);
        let o = orchestrator(&[launchpad, airdrop, strategic]);
        assert_eq!(o.total_supply, 140_000_000 * TOKEN);
        assert!(o.vesting_infos.iter().all(|i| !i.deployed));
    }

    #[test]
    fn rejects_bad_info_lists() {
        assert!(matches!(
            Orchestrator::prepare_infos(&[]),
            Err(VestingError::InvalidVestingInfoCount)
        ));

        let too_many: Vec<_> = (0..MAX_VESTING_INFOS + 1).map(|_| schedule(1, 0, 0)).collect();
        assert!(matches!(
            Orchestrator::prepare_infos(&too_many),
            Err(VestingError::InvalidVestingInfoCount)
        ));

        let a = schedule(1, 1, 1);
        let dup = VestingSchedule { cliff_amount: 2, ..a };
        assert!(matches!(
            Orchestrator::prepare_infos(&[a, dup]),
            Err(VestingError::DuplicateBeneficiary)
        ));

        let invalid = VestingSchedule { step_duration: 0, ..schedule(1, 1, 1) };
        assert!(matches!(
            Orchestrator::prepare_infos(&[invalid]),
            Err(VestingError::InvalidParameters)
        ));
    }

    #[test]
    fn only_the_mint_authority_can_hand_over_minting() {
        let authority = Pubkey::new_unique();
        assert!(Orchestrator::ensure_mint_authority(Some(authority), &authority).is_ok());
        assert!(matches!(
            Orchestrator::ensure_mint_authority(Some(authority), &Pubkey::new_unique()),
            Err(VestingError::InvalidMintAuthority)
        ));
        assert!(matches!(
            Orchestrator::ensure_mint_authority(None, &authority),
            Err(VestingError::InvalidMintAuthority)
        ));
    }

    #[test]
    fn only_the_owner_deploys() {
        let a = schedule(1, 1, 1);
        let o = orchestrator(&[a]);
        assert!(o.ensure_owner(&o.owner).is_ok());
        assert!(matches!(
            o.ensure_owner(&Pubkey::new_unique()),
            Err(VestingError::Unauthorized)
        ));
    }

    #[test]
    fn each_info_deploys_once() {
        let a = schedule(1, 1, 1);
        let b = schedule(2, 0, 0);
        let mut o = orchestrator(&[a, b]);

        assert_eq!(o.take_for_deploy(&a.beneficiary).unwrap(), a);
        assert!(!o.fully_deployed());
        assert!(matches!(
            o.take_for_deploy(&a.beneficiary),
            Err(VestingError::AlreadyDeployed)
        ));
        assert!(matches!(
            o.take_for_deploy(&Pubkey::new_unique()),
            Err(VestingError::VestingInfoNotFound)
        ));

        o.take_for_deploy(&b.beneficiary).unwrap();
        assert!(o.fully_deployed());
        assert_eq!(o.deployed_count, 2);
    }
}
