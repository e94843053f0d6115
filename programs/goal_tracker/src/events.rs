use anchor_lang::prelude::*;

/// Event emitted when lamports are locked in a new commitment
#[event]
pub struct CommitmentOpened {
    pub commitment: Pubkey,
    pub owner: Pubkey,
    pub commitment_id: u64,
    pub deadline: i64,
    pub staked_amount: u64,
    /// Lamports paid towards the rent-exempt minimum
    pub deposit: u64,
    pub timestamp: i64,
}

/// Event emitted when a commitment is completed and closed
#[event]
pub struct CommitmentResolved {
    pub commitment: Pubkey,
    pub owner: Pubkey,
    pub commitment_id: u64,
    pub staked_amount: u64,
    /// Everything returned to the owner, stake and deposit together
    pub released: u64,
    pub timestamp: i64,
}

impl CommitmentOpened {
    pub fn emit_event(
        commitment: Pubkey,
        owner: Pubkey,
        commitment_id: u64,
        deadline: i64,
        staked_amount: u64,
        deposit: u64,
    ) -> Result<()> {
        emit!(Self {
            commitment,
            owner,
            commitment_id,
            deadline,
            staked_amount,
            deposit,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

impl CommitmentResolved {
    pub fn emit_event(
        commitment: Pubkey,
        owner: Pubkey,
        commitment_id: u64,
        staked_amount: u64,
        released: u64,
        timestamp: i64,
    ) -> Result<()> {
        emit!(Self {
            commitment,
            owner,
            commitment_id,
            staked_amount,
            released,
            timestamp,
        });
        Ok(())
    }
}
