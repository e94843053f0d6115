use anchor_lang::prelude::*;

use crate::{events::CommitmentResolved, state::Commitment, utils::close_commitment_account};

pub fn resolve_commitment(ctx: Context<ResolveCommitment>) -> Result<()> {
    let commitment_info = ctx.accounts.commitment.to_account_info();

    let mut commitment = Commitment::load(&commitment_info)?;
    commitment.verify_address(commitment_info.key)?;

    let now = Clock::get()?.unix_timestamp;
    commitment.authorize_resolution(ctx.accounts.owner.key, now)?;

    // Only observable within this instruction; the close below zeroes it
    commitment.completed = true;
    {
        let mut data = commitment_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        commitment.try_serialize(&mut writer)?;
    }

    let released =
        close_commitment_account(&commitment_info, &ctx.accounts.owner.to_account_info())?;

    msg!("Commitment resolved: {}", commitment_info.key());
    msg!("Returned {} lamports to {}", released, commitment.owner);

    CommitmentResolved::emit_event(
        commitment_info.key(),
        commitment.owner,
        commitment.commitment_id,
        commitment.staked_amount,
        released,
        now,
    )?;

    Ok(())
}

#[derive(Accounts)]
pub struct ResolveCommitment<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(mut)]
    /// CHECK: Loaded and validated as a `Commitment` in the handler so a
    /// missing record surfaces as `NotFound`.
    pub commitment: UncheckedAccount<'info>,
}
