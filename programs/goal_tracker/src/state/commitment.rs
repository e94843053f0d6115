use anchor_lang::prelude::*;

use crate::{constants::COMMITMENT_SEED, error::GoalTrackerError, ID};

/// How a client should classify a live commitment
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitmentStatus {
    /// Can still be resolved by its owner
    Active,
    /// Deadline reached; the stake stays locked and the goal counts as failed
    Lapsed,
}

/// A stake locked against a self-declared task.
/// The account balance above the rent-exempt minimum is the custody.
#[account]
#[derive(Debug, InitSpace)]
pub struct Commitment {
    /// Wallet that opened the commitment and is the only one allowed to resolve it
    pub owner: Pubkey,
    /// Owner-chosen identifier, part of the PDA seeds
    pub commitment_id: u64,
    /// Unix timestamp; resolution must happen strictly before it
    pub deadline: i64,
    /// Lamports held in custody, fixed at creation
    pub staked_amount: u64,
    /// Only ever true inside the transaction that closes the account
    pub completed: bool,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Commitment {
    /// Account size including the discriminator
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Derive the PDA for `(owner, commitment_id)`
    pub fn address(owner: &Pubkey, commitment_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[COMMITMENT_SEED, owner.as_ref(), &commitment_id.to_le_bytes()],
            &ID,
        )
    }

    /// Lamports held on behalf of the owner, excluding the rent deposit
    pub fn custody(lamports: u64, rent_minimum: u64) -> u64 {
        lamports.saturating_sub(rent_minimum)
    }

    pub fn is_resolvable_at(&self, now: i64) -> bool {
        now < self.deadline
    }

    pub fn status(&self, now: i64) -> CommitmentStatus {
        if self.is_resolvable_at(now) {
            CommitmentStatus::Active
        } else {
            CommitmentStatus::Lapsed
        }
    }

    /// Read a live commitment owned by this program
    pub fn load(info: &AccountInfo) -> Result<Self> {
        require!(
            info.owner == &ID && !info.data_is_empty(),
            GoalTrackerError::NotFound
        );
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..])
    }

    /// Check that `key` is the PDA this record was created at
    pub fn verify_address(&self, key: &Pubkey) -> Result<()> {
        let derived = Pubkey::create_program_address(
            &[
                COMMITMENT_SEED,
                self.owner.as_ref(),
                &self.commitment_id.to_le_bytes(),
                &[self.bump],
            ],
            &ID,
        )
        .map_err(|_| error!(GoalTrackerError::InvalidAddress))?;
        require_keys_eq!(derived, *key, GoalTrackerError::InvalidAddress);
        Ok(())
    }

    /// Ownership is checked before the deadline
    pub fn authorize_resolution(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(self.owner, *caller, GoalTrackerError::Unauthorized);
        require!(
            self.is_resolvable_at(now),
            GoalTrackerError::DeadlinePassed
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commitment(deadline: i64) -> Commitment {
        Commitment {
            owner: Pubkey::new_unique(),
            commitment_id: 7,
            deadline,
            staked_amount: 1_000_000_000,
            completed: false,
            bump: 255,
        }
    }

    #[test]
    fn test_space_constant() {
        assert_eq!(Commitment::SPACE, 8 + 32 + 8 + 8 + 8 + 1 + 1);
    }

    #[test]
    fn test_status_flips_at_deadline() {
        let c = commitment(1_000_000);

        assert_eq!(c.status(999_999), CommitmentStatus::Active);
        assert_eq!(c.status(1_000_000), CommitmentStatus::Lapsed);
        assert_eq!(c.status(1_000_001), CommitmentStatus::Lapsed);
        assert!(c.is_resolvable_at(999_999));
        assert!(!c.is_resolvable_at(1_000_000));
    }

    #[test]
    fn test_custody_excludes_deposit() {
        assert_eq!(Commitment::custody(1_001_350_000, 1_350_000), 1_000_000_000);
        assert_eq!(Commitment::custody(1_350_000, 1_350_000), 0);
        assert_eq!(Commitment::custody(0, 1_350_000), 0);
    }

    #[test]
    fn test_address_is_deterministic_per_owner_and_id() {
        let owner = Pubkey::new_unique();
        let other = Pubkey::new_unique();

        assert_eq!(Commitment::address(&owner, 7), Commitment::address(&owner, 7));
        assert_ne!(Commitment::address(&owner, 7).0, Commitment::address(&owner, 8).0);
        assert_ne!(Commitment::address(&owner, 7).0, Commitment::address(&other, 7).0);
    }
}
