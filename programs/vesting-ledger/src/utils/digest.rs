//! Roster commitment for investor pools.
//! Each investor is hashed as a fixed 40-byte leaf (wallet || entitlement LE) in roster order,
//! so off-chain tooling can recompute the digest from the same input list.

use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::state::InvestorEntry;

const DOMAIN: &[u8] = b"vesting-ledger:investor-roster:v1";

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct RosterLeaf {
    wallet: [u8; 32],
    entitlement: u64,
}

pub fn roster_digest(entries: &[InvestorEntry]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN);
    for e in entries {
        hasher.update(bytemuck::bytes_of(&leaf(&e.wallet, e.entitlement)));
    }
    *hasher.finalize().as_bytes()
}

fn leaf(wallet: &Pubkey, entitlement: u64) -> RosterLeaf {
    RosterLeaf {
        wallet: wallet.to_bytes(),
        entitlement: entitlement.to_le(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(wallet: Pubkey, entitlement: u64) -> InvestorEntry {
        InvestorEntry {
            wallet,
            entitlement,
            ..InvestorEntry::default()
        }
    }

    #[test]
    fn leaf_layout_is_packed() {
        assert_eq!(core::mem::size_of::<RosterLeaf>(), 40);
        let w = Pubkey::new_unique();
        let l = leaf(&w, 7);
        let bytes = bytemuck::bytes_of(&l);
        assert_eq!(&bytes[..32], w.as_ref());
        assert_eq!(&bytes[32..], &7u64.to_le_bytes());
    }

    #[test]
    fn digest_depends_on_order_and_amounts() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let ab = roster_digest(&[entry(a, 600_000), entry(b, 360_000)]);
        let ba = roster_digest(&[entry(b, 360_000), entry(a, 600_000)]);
        let ab2 = roster_digest(&[entry(a, 600_000), entry(b, 360_001)]);
        assert_eq!(ab, roster_digest(&[entry(a, 600_000), entry(b, 360_000)]));
        assert_ne!(ab, ba);
        assert_ne!(ab, ab2);
    }

    #[test]
    fn digest_ignores_progress_fields() {
        let a = Pubkey::new_unique();
        let fresh = entry(a, 120_000);
        let progressed = InvestorEntry {
            tokens_left: 10_000,
            claimed: 10_000,
            credited: 20_000,
            ..fresh
        };
        assert_eq!(roster_digest(&[fresh]), roster_digest(&[progressed]));
    }
}
