use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


use instructions::*;

declare_id!("Cu1Ty3HxTkKsrsLZfCy46BXtGUke7gjyYX6FhrQEWUr9");

/// The Goal Tracker program holds lamports in escrow against a self-declared
/// commitment until its owner completes it before the deadline
#[program]
pub mod goal_tracker {
    use super::*;

    /// Lock `staked_amount` lamports in a new commitment PDA
    pub fn open_commitment(
        ctx: Context<OpenCommitment>,
        args: OpenCommitmentArgs,
    ) -> Result<()> {
        instructions::open_commitment(ctx, args)
    }

    /// Complete a commitment before its deadline, closing it and returning the stake
    pub fn resolve_commitment(ctx: Context<ResolveCommitment>) -> Result<()> {
        instructions::resolve_commitment(ctx)
    }
}
